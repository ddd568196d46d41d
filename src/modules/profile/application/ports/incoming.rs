use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use super::outgoing::ProfileRecord;
use crate::shared::validation::ProfileData;

#[derive(Debug, Clone, PartialEq)]
pub enum GetProfileError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for GetProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetProfileError::NotFound => write!(f, "Profile not found"),
            GetProfileError::RepositoryError(e) => write!(f, "Repository error: {}", e),
        }
    }
}

#[async_trait]
pub trait GetProfileUseCase {
    async fn execute(&self) -> Result<ProfileRecord, GetProfileError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum UpsertProfileError {
    RepositoryError(String),
}

impl fmt::Display for UpsertProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpsertProfileError::RepositoryError(e) => write!(f, "Repository error: {}", e),
        }
    }
}

#[async_trait]
pub trait UpsertProfileUseCase {
    async fn execute(
        &self,
        owner: Uuid,
        data: ProfileData,
    ) -> Result<ProfileRecord, UpsertProfileError>;
}
