use actix_web::{delete, get, post, put, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::functions::application::parse::youtube_id_from_url;
use crate::modules::video::application::ports::incoming::{
    RefreshVideoMetadataError, ReorderVideosError, VideoError,
};
use crate::modules::video::application::ports::outgoing::VideoData;
use crate::shared::api::ApiResponse;
use crate::shared::validation::{normalize_optional, ValidationErrors};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct VideoBody {
    pub title: String,
    pub description: Option<String>,
    pub youtube_url: String,
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReorderBody {
    pub ids: Vec<Uuid>,
}

fn validate_body(body: VideoBody) -> Result<VideoData, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let title = body.title.trim().to_string();
    if title.is_empty() {
        errors.add("title", "Title is required");
    } else if title.len() > 200 {
        errors.add("title", "Title must be less than 200 characters");
    }

    let youtube_url = body.youtube_url.trim().to_string();
    if youtube_url.is_empty() {
        errors.add("youtube_url", "YouTube URL is required");
    } else if youtube_id_from_url(&youtube_url).is_none() {
        errors.add("youtube_url", "Please enter a valid YouTube URL");
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(VideoData {
        title,
        description: normalize_optional(body.description.as_deref()),
        youtube_url,
        youtube_id: None,
        thumbnail_url: normalize_optional(body.thumbnail_url.as_deref()),
    })
}

#[get("/api/videos")]
pub async fn list_videos_handler(data: web::Data<AppState>) -> impl Responder {
    match data.video.list.execute().await {
        Ok(rows) => ApiResponse::success(rows),
        Err(e) => {
            error!("Listing videos failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/videos")]
pub async fn create_video_handler(
    user: AuthenticatedUser,
    body: web::Json<VideoBody>,
    data: web::Data<AppState>,
) -> impl Responder {
    let payload = match validate_body(body.into_inner()) {
        Ok(p) => p,
        Err(errors) => return ApiResponse::validation_failed(errors.to_json()),
    };

    match data.video.create.execute(user.user_id, payload).await {
        Ok(created) => ApiResponse::created(created),
        Err(e) => {
            error!("Creating video failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

// Registered before the `{id}` routes so "order" never parses as an id.
#[put("/api/videos/order")]
pub async fn reorder_videos_handler(
    user: AuthenticatedUser,
    body: web::Json<ReorderBody>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .video
        .reorder
        .execute(user.user_id, body.into_inner().ids)
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(ReorderVideosError::OrderMismatch) => ApiResponse::bad_request(
            "ORDER_MISMATCH",
            "Id list must cover all stored videos exactly once",
        ),
        Err(e) => {
            error!("Reordering videos failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/videos/{id}")]
pub async fn update_video_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    body: web::Json<VideoBody>,
    data: web::Data<AppState>,
) -> impl Responder {
    let payload = match validate_body(body.into_inner()) {
        Ok(p) => p,
        Err(errors) => return ApiResponse::validation_failed(errors.to_json()),
    };

    match data
        .video
        .update
        .execute(user.user_id, path.into_inner(), payload)
        .await
    {
        Ok(updated) => ApiResponse::success(updated),
        Err(VideoError::NotFound) => ApiResponse::not_found("VIDEO_NOT_FOUND", "Video not found"),
        Err(e) => {
            error!("Updating video failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/videos/{id}")]
pub async fn delete_video_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .video
        .delete
        .execute(user.user_id, path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(VideoError::NotFound) => ApiResponse::not_found("VIDEO_NOT_FOUND", "Video not found"),
        Err(e) => {
            error!("Deleting video failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/videos/{id}/refresh-metadata")]
pub async fn refresh_video_metadata_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .video
        .refresh_metadata
        .execute(user.user_id, path.into_inner())
        .await
    {
        Ok(updated) => ApiResponse::success(updated),
        Err(RefreshVideoMetadataError::NotFound) => {
            ApiResponse::not_found("VIDEO_NOT_FOUND", "Video not found")
        }
        Err(RefreshVideoMetadataError::InvalidYoutubeUrl) => ApiResponse::bad_request(
            "INVALID_YOUTUBE_URL",
            "Stored YouTube URL has no recognizable video id",
        ),
        Err(e) => {
            error!("Refreshing video metadata failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
