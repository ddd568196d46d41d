use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::shared::validation::ProfileData;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProfileRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub about_me: Option<String>,
    pub my_story: Option<String>,
    pub location: Option<String>,
    pub phone_number: Option<String>,
    pub email_contact: Option<String>,
    pub avatar_url: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub instagram_url: Option<String>,
    pub semester: Option<String>,
    pub years_coding: Option<String>,
    pub projects_count: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum ProfileRepositoryError {
    #[error("profile not found")]
    NotFound,
    #[error("database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProfileRepository {
    /// Returns the single profile used for the public site, if any.
    async fn find_display_profile(&self) -> Result<Option<ProfileRecord>, ProfileRepositoryError>;

    /// Inserts the owner's profile on first save, updates it afterwards.
    async fn upsert(
        &self,
        owner: Uuid,
        data: ProfileData,
    ) -> Result<ProfileRecord, ProfileRepositoryError>;
}
