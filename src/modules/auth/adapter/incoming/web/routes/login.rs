use actix_web::{post, web, Responder};
use tracing::error;

use crate::modules::auth::application::ports::incoming::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/auth/login")]
pub async fn login_handler(
    req: web::Json<LoginRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.login.execute(req.into_inner()).await {
        Ok(response) => ApiResponse::success(response),

        Err(LoginError::InvalidCredentials) => {
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }

        Err(e) => {
            error!("Login failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
