use std::sync::Arc;

use super::ports::incoming::{
    CreateProjectUseCase, DeleteProjectUseCase, ListProjectsUseCase, RefreshProjectStatsUseCase,
    UpdateProjectUseCase,
};

#[derive(Clone)]
pub struct ProjectUseCases {
    pub list: Arc<dyn ListProjectsUseCase + Send + Sync>,
    pub create: Arc<dyn CreateProjectUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateProjectUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteProjectUseCase + Send + Sync>,
    pub refresh_stats: Arc<dyn RefreshProjectStatsUseCase + Send + Sync>,
}
