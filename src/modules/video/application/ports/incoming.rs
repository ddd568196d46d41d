use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use super::outgoing::{VideoData, VideoRecord};

#[derive(Debug, Clone, PartialEq)]
pub enum VideoError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for VideoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoError::NotFound => write!(f, "Video not found"),
            VideoError::RepositoryError(e) => write!(f, "Repository error: {}", e),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReorderVideosError {
    /// The submitted id list does not cover the stored videos exactly.
    OrderMismatch,
    RepositoryError(String),
}

impl fmt::Display for ReorderVideosError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReorderVideosError::OrderMismatch => {
                write!(f, "Id list does not match the stored videos")
            }
            ReorderVideosError::RepositoryError(e) => write!(f, "Repository error: {}", e),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RefreshVideoMetadataError {
    NotFound,
    InvalidYoutubeUrl,
    UpstreamError(String),
    RepositoryError(String),
}

impl fmt::Display for RefreshVideoMetadataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefreshVideoMetadataError::NotFound => write!(f, "Video not found"),
            RefreshVideoMetadataError::InvalidYoutubeUrl => {
                write!(f, "Stored YouTube URL has no recognizable video id")
            }
            RefreshVideoMetadataError::UpstreamError(e) => write!(f, "YouTube error: {}", e),
            RefreshVideoMetadataError::RepositoryError(e) => {
                write!(f, "Repository error: {}", e)
            }
        }
    }
}

#[async_trait]
pub trait ListVideosUseCase {
    async fn execute(&self) -> Result<Vec<VideoRecord>, VideoError>;
}

#[async_trait]
pub trait CreateVideoUseCase {
    async fn execute(&self, owner: Uuid, data: VideoData) -> Result<VideoRecord, VideoError>;
}

#[async_trait]
pub trait UpdateVideoUseCase {
    async fn execute(
        &self,
        owner: Uuid,
        id: Uuid,
        data: VideoData,
    ) -> Result<VideoRecord, VideoError>;
}

#[async_trait]
pub trait DeleteVideoUseCase {
    async fn execute(&self, owner: Uuid, id: Uuid) -> Result<(), VideoError>;
}

#[async_trait]
pub trait ReorderVideosUseCase {
    async fn execute(&self, owner: Uuid, ids: Vec<Uuid>) -> Result<(), ReorderVideosError>;
}

#[async_trait]
pub trait RefreshVideoMetadataUseCase {
    async fn execute(
        &self,
        owner: Uuid,
        id: Uuid,
    ) -> Result<VideoRecord, RefreshVideoMetadataError>;
}
