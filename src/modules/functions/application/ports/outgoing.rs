use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct GithubStats {
    pub stars: i32,
    pub forks: i32,
}

/// Display-ready video metadata as the public site renders it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VideoMetadata {
    pub video_id: String,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub duration: String,
    pub views: String,
    pub likes: String,
    pub published_at: String,
}

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream request failed: {0}")]
    RequestFailed(String),
    #[error("resource not found upstream")]
    NotFound,
    #[error("malformed upstream response: {0}")]
    MalformedResponse(String),
}

#[async_trait]
pub trait GithubStatsQuery {
    async fn fetch(&self, owner: &str, repo: &str) -> Result<GithubStats, UpstreamError>;
}

#[async_trait]
pub trait YoutubeMetadataQuery {
    async fn fetch(&self, video_id: &str) -> Result<VideoMetadata, UpstreamError>;
}
