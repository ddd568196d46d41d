use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::auth::application::ports::incoming::RefreshError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[post("/api/auth/refresh")]
pub async fn refresh_token_handler(
    req: web::Json<RefreshRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.refresh.execute(&req.refresh_token).await {
        Ok(response) => ApiResponse::success(response),

        Err(RefreshError::InvalidToken) => {
            ApiResponse::unauthorized("INVALID_REFRESH_TOKEN", "Invalid or expired refresh token")
        }

        Err(e) => {
            error!("Token refresh failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
