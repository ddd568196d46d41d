use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use super::ports::incoming::{
    GetProfileError, GetProfileUseCase, UpsertProfileError, UpsertProfileUseCase,
};
use super::ports::outgoing::{ProfileRecord, ProfileRepository, ProfileRepositoryError};
use crate::shared::validation::ProfileData;

pub struct ProfileService {
    repository: Arc<dyn ProfileRepository + Send + Sync>,
}

impl ProfileService {
    pub fn new(repository: Arc<dyn ProfileRepository + Send + Sync>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl GetProfileUseCase for ProfileService {
    async fn execute(&self) -> Result<ProfileRecord, GetProfileError> {
        match self.repository.find_display_profile().await {
            Ok(Some(profile)) => Ok(profile),
            Ok(None) => Err(GetProfileError::NotFound),
            Err(e) => Err(GetProfileError::RepositoryError(e.to_string())),
        }
    }
}

#[async_trait]
impl UpsertProfileUseCase for ProfileService {
    async fn execute(
        &self,
        owner: Uuid,
        data: ProfileData,
    ) -> Result<ProfileRecord, UpsertProfileError> {
        self.repository
            .upsert(owner, data)
            .await
            .map_err(|e| UpsertProfileError::RepositoryError(e.to_string()))
    }
}
