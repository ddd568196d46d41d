use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::functions::application::ports::incoming::GithubStatsFunctionError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct GithubStatsBody {
    pub github_url: String,
}

#[post("/api/functions/github-stats")]
pub async fn github_stats_handler(
    body: web::Json<GithubStatsBody>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.functions.github_stats.execute(&body.github_url).await {
        Ok(stats) => ApiResponse::success(stats),
        Err(GithubStatsFunctionError::InvalidUrl) => ApiResponse::bad_request(
            "INVALID_GITHUB_URL",
            "URL must point at a GitHub repository",
        ),
        Err(GithubStatsFunctionError::UpstreamError(e)) => {
            error!("GitHub stats lookup failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
