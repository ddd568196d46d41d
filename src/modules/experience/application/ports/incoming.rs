use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use super::outgoing::{ExperienceData, ExperienceRecord};

#[derive(Debug, Clone, PartialEq)]
pub enum ExperienceError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for ExperienceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExperienceError::NotFound => write!(f, "Experience not found"),
            ExperienceError::RepositoryError(e) => write!(f, "Repository error: {}", e),
        }
    }
}

#[async_trait]
pub trait ListExperiencesUseCase {
    async fn execute(&self) -> Result<Vec<ExperienceRecord>, ExperienceError>;
}

#[async_trait]
pub trait CreateExperienceUseCase {
    async fn execute(
        &self,
        owner: Uuid,
        data: ExperienceData,
    ) -> Result<ExperienceRecord, ExperienceError>;
}

#[async_trait]
pub trait UpdateExperienceUseCase {
    async fn execute(
        &self,
        owner: Uuid,
        id: Uuid,
        data: ExperienceData,
    ) -> Result<ExperienceRecord, ExperienceError>;
}

#[async_trait]
pub trait DeleteExperienceUseCase {
    async fn execute(&self, owner: Uuid, id: Uuid) -> Result<(), ExperienceError>;
}
