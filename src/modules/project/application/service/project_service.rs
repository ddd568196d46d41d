use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::application::ports::incoming::{
    CreateProjectUseCase, DeleteProjectUseCase, ListProjectsUseCase, ProjectError,
    UpdateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::{
    ProjectData, ProjectRecord, ProjectRepository, ProjectRepositoryError,
};

pub struct ProjectService {
    repository: Arc<dyn ProjectRepository + Send + Sync>,
}

impl ProjectService {
    pub fn new(repository: Arc<dyn ProjectRepository + Send + Sync>) -> Self {
        Self { repository }
    }
}

fn map_err(e: ProjectRepositoryError) -> ProjectError {
    match e {
        ProjectRepositoryError::NotFound => ProjectError::NotFound,
        ProjectRepositoryError::DatabaseError(msg) => ProjectError::RepositoryError(msg),
    }
}

#[async_trait]
impl ListProjectsUseCase for ProjectService {
    async fn execute(&self) -> Result<Vec<ProjectRecord>, ProjectError> {
        self.repository.list_all().await.map_err(map_err)
    }
}

#[async_trait]
impl CreateProjectUseCase for ProjectService {
    async fn execute(
        &self,
        owner: Uuid,
        data: ProjectData,
    ) -> Result<ProjectRecord, ProjectError> {
        let order_index = self.repository.count_for(owner).await.map_err(map_err)? as i32;
        self.repository
            .insert(owner, data, order_index)
            .await
            .map_err(map_err)
    }
}

#[async_trait]
impl UpdateProjectUseCase for ProjectService {
    async fn execute(
        &self,
        owner: Uuid,
        id: Uuid,
        data: ProjectData,
    ) -> Result<ProjectRecord, ProjectError> {
        self.repository.update(owner, id, data).await.map_err(map_err)
    }
}

#[async_trait]
impl DeleteProjectUseCase for ProjectService {
    async fn execute(&self, owner: Uuid, id: Uuid) -> Result<(), ProjectError> {
        self.repository.delete(owner, id).await.map_err(map_err)
    }
}
