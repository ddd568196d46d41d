use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::storage::application::ports::incoming::{CreateUploadError, UploadRequest};
use crate::modules::storage::application::upload_policy::UploadKind;
use crate::shared::api::ApiResponse;
use crate::shared::validation::ValidationErrors;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UploadBody {
    pub kind: String,
    pub file_name: String,
    pub content_type: String,
}

fn validate_body(body: UploadBody) -> Result<UploadRequest, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let kind = match UploadKind::parse(body.kind.trim()) {
        Some(kind) => Some(kind),
        None => {
            errors.add("kind", "Unknown upload kind");
            None
        }
    };

    let file_name = body.file_name.trim().to_string();
    if file_name.is_empty() {
        errors.add("file_name", "File name is required");
    }

    let content_type = body.content_type.trim().to_string();
    if content_type.is_empty() {
        errors.add("content_type", "Content type is required");
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(UploadRequest {
        kind: kind.unwrap_or(UploadKind::Avatar),
        file_name,
        content_type,
    })
}

#[post("/api/uploads")]
pub async fn create_upload_handler(
    user: AuthenticatedUser,
    body: web::Json<UploadBody>,
    data: web::Data<AppState>,
) -> impl Responder {
    let payload = match validate_body(body.into_inner()) {
        Ok(p) => p,
        Err(errors) => return ApiResponse::validation_failed(errors.to_json()),
    };

    match data
        .storage
        .create_upload
        .execute(user.user_id, payload)
        .await
    {
        Ok(ticket) => ApiResponse::created(ticket),
        Err(CreateUploadError::UnsupportedContentType) => ApiResponse::bad_request(
            "UNSUPPORTED_CONTENT_TYPE",
            "Content type is not allowed for this upload kind",
        ),
        Err(e) => {
            error!("Creating upload ticket failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
