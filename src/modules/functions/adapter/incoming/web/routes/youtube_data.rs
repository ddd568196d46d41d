use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::functions::application::ports::incoming::YoutubeDataFunctionError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct YoutubeDataBody {
    pub youtube_url: String,
}

#[post("/api/functions/youtube-data")]
pub async fn youtube_data_handler(
    body: web::Json<YoutubeDataBody>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.functions.youtube_data.execute(&body.youtube_url).await {
        Ok(metadata) => ApiResponse::success(metadata),
        Err(YoutubeDataFunctionError::InvalidUrl) => ApiResponse::bad_request(
            "INVALID_YOUTUBE_URL",
            "URL must point at a YouTube video",
        ),
        Err(YoutubeDataFunctionError::UpstreamError(e)) => {
            error!("YouTube metadata lookup failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
