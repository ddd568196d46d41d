use async_trait::async_trait;
use std::fmt;

use super::outgoing::{GithubStats, VideoMetadata};

#[derive(Debug, Clone, PartialEq)]
pub enum GithubStatsFunctionError {
    /// URL does not name a `github.com/{owner}/{repo}` repository. No
    /// upstream call happens in this case.
    InvalidUrl,
    UpstreamError(String),
}

impl fmt::Display for GithubStatsFunctionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GithubStatsFunctionError::InvalidUrl => write!(f, "Invalid GitHub repository URL"),
            GithubStatsFunctionError::UpstreamError(e) => write!(f, "GitHub error: {}", e),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum YoutubeDataFunctionError {
    InvalidUrl,
    UpstreamError(String),
}

impl fmt::Display for YoutubeDataFunctionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YoutubeDataFunctionError::InvalidUrl => write!(f, "Invalid YouTube URL"),
            YoutubeDataFunctionError::UpstreamError(e) => write!(f, "YouTube error: {}", e),
        }
    }
}

#[async_trait]
pub trait GithubStatsFunctionUseCase {
    async fn execute(&self, github_url: &str) -> Result<GithubStats, GithubStatsFunctionError>;
}

#[async_trait]
pub trait YoutubeDataFunctionUseCase {
    async fn execute(&self, youtube_url: &str)
        -> Result<VideoMetadata, YoutubeDataFunctionError>;
}
