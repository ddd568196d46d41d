use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::skill::application::ports::incoming::{
    CreateFeaturedSkillError, CreateFeaturedSkillUseCase, DeleteFeaturedSkillUseCase,
    ListFeaturedSkillsUseCase, SkillError, UpdateFeaturedSkillUseCase, FEATURED_SKILL_LIMIT,
};
use crate::modules::skill::application::ports::outgoing::{
    FeaturedSkillData, FeaturedSkillRecord, FeaturedSkillRepository, SkillRepositoryError,
};

pub struct FeaturedSkillService {
    repository: Arc<dyn FeaturedSkillRepository + Send + Sync>,
}

impl FeaturedSkillService {
    pub fn new(repository: Arc<dyn FeaturedSkillRepository + Send + Sync>) -> Self {
        Self { repository }
    }
}

fn map_err(e: SkillRepositoryError) -> SkillError {
    match e {
        SkillRepositoryError::NotFound => SkillError::NotFound,
        SkillRepositoryError::DatabaseError(msg) => SkillError::RepositoryError(msg),
    }
}

#[async_trait]
impl ListFeaturedSkillsUseCase for FeaturedSkillService {
    async fn execute(&self) -> Result<Vec<FeaturedSkillRecord>, SkillError> {
        self.repository.list_all().await.map_err(map_err)
    }
}

#[async_trait]
impl CreateFeaturedSkillUseCase for FeaturedSkillService {
    async fn execute(
        &self,
        owner: Uuid,
        data: FeaturedSkillData,
    ) -> Result<FeaturedSkillRecord, CreateFeaturedSkillError> {
        let count = self
            .repository
            .count_for(owner)
            .await
            .map_err(|e| CreateFeaturedSkillError::RepositoryError(e.to_string()))?;

        if count >= FEATURED_SKILL_LIMIT {
            return Err(CreateFeaturedSkillError::LimitReached);
        }

        self.repository
            .insert(owner, data, count as i32)
            .await
            .map_err(|e| CreateFeaturedSkillError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl UpdateFeaturedSkillUseCase for FeaturedSkillService {
    async fn execute(
        &self,
        owner: Uuid,
        id: Uuid,
        data: FeaturedSkillData,
    ) -> Result<FeaturedSkillRecord, SkillError> {
        self.repository.update(owner, id, data).await.map_err(map_err)
    }
}

#[async_trait]
impl DeleteFeaturedSkillUseCase for FeaturedSkillService {
    async fn execute(&self, owner: Uuid, id: Uuid) -> Result<(), SkillError> {
        self.repository.delete(owner, id).await.map_err(map_err)
    }
}
