use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::modules::functions::application::ports::outgoing::VideoMetadata;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VideoRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub youtube_url: String,
    pub youtube_id: Option<String>,
    pub thumbnail_url: Option<String>,
    pub duration: Option<String>,
    pub views: Option<String>,
    pub likes: Option<String>,
    pub published_at: Option<String>,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Normalized video payload. The derived fields (`youtube_id`,
/// `thumbnail_url`) are filled by the service, not the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoData {
    pub title: String,
    pub description: Option<String>,
    pub youtube_url: String,
    pub youtube_id: Option<String>,
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Error)]
pub enum VideoRepositoryError {
    #[error("video not found")]
    NotFound,
    #[error("id list does not match the stored videos")]
    OrderMismatch,
    #[error("database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait VideoRepository {
    /// Newest entries first (highest order_index).
    async fn list_all(&self) -> Result<Vec<VideoRecord>, VideoRepositoryError>;

    async fn find(&self, owner: Uuid, id: Uuid) -> Result<VideoRecord, VideoRepositoryError>;

    async fn count_for(&self, owner: Uuid) -> Result<u64, VideoRepositoryError>;

    async fn insert(
        &self,
        owner: Uuid,
        data: VideoData,
        order_index: i32,
    ) -> Result<VideoRecord, VideoRepositoryError>;

    async fn update(
        &self,
        owner: Uuid,
        id: Uuid,
        data: VideoData,
    ) -> Result<VideoRecord, VideoRepositoryError>;

    async fn set_metadata(
        &self,
        owner: Uuid,
        id: Uuid,
        metadata: VideoMetadata,
    ) -> Result<VideoRecord, VideoRepositoryError>;

    /// Rewrites order_index for the owner's whole collection in one
    /// transaction. `ids` is the new display order, first id on top.
    /// Applies nothing unless `ids` covers the stored rows exactly.
    async fn reorder(&self, owner: Uuid, ids: Vec<Uuid>) -> Result<(), VideoRepositoryError>;

    async fn delete(&self, owner: Uuid, id: Uuid) -> Result<(), VideoRepositoryError>;
}
