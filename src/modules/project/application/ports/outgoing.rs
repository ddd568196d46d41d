use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProjectRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub image_url: Option<String>,
    pub technologies: Vec<String>,
    pub status: String,
    pub featured: bool,
    pub github_stars: i32,
    pub github_forks: i32,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Normalized project payload, already past handler validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectData {
    pub title: String,
    pub description: String,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub image_url: Option<String>,
    pub technologies: Vec<String>,
    pub status: String,
    pub featured: bool,
}

#[derive(Debug, Error)]
pub enum ProjectRepositoryError {
    #[error("project not found")]
    NotFound,
    #[error("database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProjectRepository {
    /// Newest entries first (highest order_index).
    async fn list_all(&self) -> Result<Vec<ProjectRecord>, ProjectRepositoryError>;

    async fn find(&self, owner: Uuid, id: Uuid) -> Result<ProjectRecord, ProjectRepositoryError>;

    async fn count_for(&self, owner: Uuid) -> Result<u64, ProjectRepositoryError>;

    async fn insert(
        &self,
        owner: Uuid,
        data: ProjectData,
        order_index: i32,
    ) -> Result<ProjectRecord, ProjectRepositoryError>;

    async fn update(
        &self,
        owner: Uuid,
        id: Uuid,
        data: ProjectData,
    ) -> Result<ProjectRecord, ProjectRepositoryError>;

    async fn set_stats(
        &self,
        owner: Uuid,
        id: Uuid,
        stars: i32,
        forks: i32,
    ) -> Result<ProjectRecord, ProjectRepositoryError>;

    async fn delete(&self, owner: Uuid, id: Uuid) -> Result<(), ProjectRepositoryError>;
}
