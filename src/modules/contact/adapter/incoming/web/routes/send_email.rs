use actix_web::{post, web, Responder};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::contact::application::ports::incoming::SendContactEmailError;
use crate::shared::api::ApiResponse;
use crate::shared::validation::validate_contact;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SendEmailBody {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[post("/api/functions/send-email")]
pub async fn send_email_handler(
    _user: AuthenticatedUser,
    body: web::Json<SendEmailBody>,
    data: web::Data<AppState>,
) -> impl Responder {
    let payload = match validate_contact(&body.name, &body.email, &body.subject, &body.message) {
        Ok(p) => p,
        Err(errors) => return ApiResponse::validation_failed(errors.to_json()),
    };

    match data.contact.send.execute(payload).await {
        Ok(()) => ApiResponse::success(json!({ "message": "Email sent successfully" })),
        Err(e) => {
            error!("Contact email delivery failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
