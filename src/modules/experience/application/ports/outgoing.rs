use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ExperienceRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub company: String,
    pub position: String,
    pub duration: String,
    pub location: Option<String>,
    pub description: String,
    pub technologies: Vec<String>,
    pub experience_type: Option<String>,
    pub color: Option<String>,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Normalized experience payload, already past handler validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceData {
    pub company: String,
    pub position: String,
    pub duration: String,
    pub location: Option<String>,
    pub description: String,
    pub technologies: Vec<String>,
    pub experience_type: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Error)]
pub enum ExperienceRepositoryError {
    #[error("experience not found")]
    NotFound,
    #[error("database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ExperienceRepository {
    /// Newest entries first (highest order_index).
    async fn list_all(&self) -> Result<Vec<ExperienceRecord>, ExperienceRepositoryError>;

    async fn count_for(&self, owner: Uuid) -> Result<u64, ExperienceRepositoryError>;

    async fn insert(
        &self,
        owner: Uuid,
        data: ExperienceData,
        order_index: i32,
    ) -> Result<ExperienceRecord, ExperienceRepositoryError>;

    async fn update(
        &self,
        owner: Uuid,
        id: Uuid,
        data: ExperienceData,
    ) -> Result<ExperienceRecord, ExperienceRepositoryError>;

    async fn delete(&self, owner: Uuid, id: Uuid) -> Result<(), ExperienceRepositoryError>;
}
