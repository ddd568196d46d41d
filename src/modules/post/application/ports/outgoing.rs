use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PostRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub featured: bool,
    pub published: bool,
    pub read_time: Option<String>,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Normalized post payload, already past handler validation.
#[derive(Debug, Clone, PartialEq)]
pub struct PostData {
    pub title: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub featured: bool,
    pub published: bool,
    pub read_time: Option<String>,
}

#[derive(Debug, Error)]
pub enum PostRepositoryError {
    #[error("post not found")]
    NotFound,
    #[error("database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PostRepository {
    /// Published rows only, newest first. The public feed.
    async fn list_published(&self) -> Result<Vec<PostRecord>, PostRepositoryError>;

    /// Every row including drafts, newest first. The admin view.
    async fn list_all(&self) -> Result<Vec<PostRecord>, PostRepositoryError>;

    /// A single published row; drafts read as absent.
    async fn find_published(&self, id: Uuid) -> Result<PostRecord, PostRepositoryError>;

    async fn count_for(&self, owner: Uuid) -> Result<u64, PostRepositoryError>;

    async fn insert(
        &self,
        owner: Uuid,
        data: PostData,
        order_index: i32,
    ) -> Result<PostRecord, PostRepositoryError>;

    async fn update(
        &self,
        owner: Uuid,
        id: Uuid,
        data: PostData,
    ) -> Result<PostRecord, PostRepositoryError>;

    async fn delete(&self, owner: Uuid, id: Uuid) -> Result<(), PostRepositoryError>;
}
