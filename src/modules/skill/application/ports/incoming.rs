use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use super::outgoing::{FeaturedSkillData, FeaturedSkillRecord, SkillRecord};
use crate::shared::validation::SkillData;

/// How many featured skills one owner may keep at once.
pub const FEATURED_SKILL_LIMIT: u64 = 3;

#[derive(Debug, Clone, PartialEq)]
pub enum SkillError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for SkillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkillError::NotFound => write!(f, "Skill not found"),
            SkillError::RepositoryError(e) => write!(f, "Repository error: {}", e),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CreateFeaturedSkillError {
    LimitReached,
    RepositoryError(String),
}

impl fmt::Display for CreateFeaturedSkillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateFeaturedSkillError::LimitReached => {
                write!(f, "Featured skill limit of {} reached", FEATURED_SKILL_LIMIT)
            }
            CreateFeaturedSkillError::RepositoryError(e) => {
                write!(f, "Repository error: {}", e)
            }
        }
    }
}

#[async_trait]
pub trait ListSkillsUseCase {
    async fn execute(&self) -> Result<Vec<SkillRecord>, SkillError>;
}

#[async_trait]
pub trait CreateSkillUseCase {
    async fn execute(&self, owner: Uuid, data: SkillData) -> Result<SkillRecord, SkillError>;
}

#[async_trait]
pub trait UpdateSkillUseCase {
    async fn execute(
        &self,
        owner: Uuid,
        id: Uuid,
        data: SkillData,
    ) -> Result<SkillRecord, SkillError>;
}

#[async_trait]
pub trait DeleteSkillUseCase {
    async fn execute(&self, owner: Uuid, id: Uuid) -> Result<(), SkillError>;
}

#[async_trait]
pub trait ListFeaturedSkillsUseCase {
    async fn execute(&self) -> Result<Vec<FeaturedSkillRecord>, SkillError>;
}

#[async_trait]
pub trait CreateFeaturedSkillUseCase {
    async fn execute(
        &self,
        owner: Uuid,
        data: FeaturedSkillData,
    ) -> Result<FeaturedSkillRecord, CreateFeaturedSkillError>;
}

#[async_trait]
pub trait UpdateFeaturedSkillUseCase {
    async fn execute(
        &self,
        owner: Uuid,
        id: Uuid,
        data: FeaturedSkillData,
    ) -> Result<FeaturedSkillRecord, SkillError>;
}

#[async_trait]
pub trait DeleteFeaturedSkillUseCase {
    async fn execute(&self, owner: Uuid, id: Uuid) -> Result<(), SkillError>;
}
