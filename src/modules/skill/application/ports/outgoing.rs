use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::shared::validation::SkillData;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SkillRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub category: String,
    pub proficiency_level: i32,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FeaturedSkillRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image_url: Option<String>,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Normalized featured-skill payload, already past handler validation.
#[derive(Debug, Clone, PartialEq)]
pub struct FeaturedSkillData {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Error)]
pub enum SkillRepositoryError {
    #[error("skill not found")]
    NotFound,
    #[error("database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SkillRepository {
    async fn list_all(&self) -> Result<Vec<SkillRecord>, SkillRepositoryError>;

    async fn count_for(&self, owner: Uuid) -> Result<u64, SkillRepositoryError>;

    async fn insert(
        &self,
        owner: Uuid,
        data: SkillData,
        order_index: i32,
    ) -> Result<SkillRecord, SkillRepositoryError>;

    /// Updates the row only when it belongs to `owner`.
    async fn update(
        &self,
        owner: Uuid,
        id: Uuid,
        data: SkillData,
    ) -> Result<SkillRecord, SkillRepositoryError>;

    async fn delete(&self, owner: Uuid, id: Uuid) -> Result<(), SkillRepositoryError>;
}

#[async_trait]
pub trait FeaturedSkillRepository {
    async fn list_all(&self) -> Result<Vec<FeaturedSkillRecord>, SkillRepositoryError>;

    async fn count_for(&self, owner: Uuid) -> Result<u64, SkillRepositoryError>;

    async fn insert(
        &self,
        owner: Uuid,
        data: FeaturedSkillData,
        order_index: i32,
    ) -> Result<FeaturedSkillRecord, SkillRepositoryError>;

    async fn update(
        &self,
        owner: Uuid,
        id: Uuid,
        data: FeaturedSkillData,
    ) -> Result<FeaturedSkillRecord, SkillRepositoryError>;

    async fn delete(&self, owner: Uuid, id: Uuid) -> Result<(), SkillRepositoryError>;
}
