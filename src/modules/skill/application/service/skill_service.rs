use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::skill::application::ports::incoming::{
    CreateSkillUseCase, DeleteSkillUseCase, ListSkillsUseCase, SkillError, UpdateSkillUseCase,
};
use crate::modules::skill::application::ports::outgoing::{
    SkillRecord, SkillRepository, SkillRepositoryError,
};
use crate::shared::validation::SkillData;

pub struct SkillService {
    repository: Arc<dyn SkillRepository + Send + Sync>,
}

impl SkillService {
    pub fn new(repository: Arc<dyn SkillRepository + Send + Sync>) -> Self {
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
impl ListSkillsUseCase for SkillService {
    async fn execute(&self) -> Result<Vec<SkillRecord>, SkillError> {
        self.repository.list_all().await.map_err(map_err)
    }
}

#[async_trait]
impl CreateSkillUseCase for SkillService {
    async fn execute(&self, owner: Uuid, data: SkillData) -> Result<SkillRecord, SkillError> {
        // Appended at the end of the owner's list.
        let order_index = self.repository.count_for(owner).await.map_err(map_err)? as i32;
        self.repository
            .insert(owner, data, order_index)
            .await
            .map_err(map_err)
    }
}

#[async_trait]
impl UpdateSkillUseCase for SkillService {
    async fn execute(
        &self,
        owner: Uuid,
        id: Uuid,
        data: SkillData,
    ) -> Result<SkillRecord, SkillError> {
        self.repository.update(owner, id, data).await.map_err(map_err)
    }
}

#[async_trait]
impl DeleteSkillUseCase for SkillService {
    async fn execute(&self, owner: Uuid, id: Uuid) -> Result<(), SkillError> {
        self.repository.delete(owner, id).await.map_err(map_err)
    }
}
