use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::functions::application::parse::github_repo_from_url;
use crate::modules::functions::application::ports::outgoing::{GithubStatsQuery, UpstreamError};
use crate::modules::project::application::ports::incoming::{
    RefreshProjectStatsError, RefreshProjectStatsUseCase,
};
use crate::modules::project::application::ports::outgoing::{
    ProjectRecord, ProjectRepository, ProjectRepositoryError,
};

/// Re-reads star/fork counts from GitHub and persists them on the project
/// row, replacing the old copy-out-of-a-serverless-function round-trip.
pub struct RefreshProjectStatsService {
    repository: Arc<dyn ProjectRepository + Send + Sync>,
    github: Arc<dyn GithubStatsQuery + Send + Sync>,
}

impl RefreshProjectStatsService {
    pub fn new(
        repository: Arc<dyn ProjectRepository + Send + Sync>,
        github: Arc<dyn GithubStatsQuery + Send + Sync>,
    ) -> Self {
        Self { repository, github }
    }
}

fn map_repo_err(e: ProjectRepositoryError) -> RefreshProjectStatsError {
    match e {
        ProjectRepositoryError::NotFound => RefreshProjectStatsError::NotFound,
        ProjectRepositoryError::DatabaseError(msg) => {
            RefreshProjectStatsError::RepositoryError(msg)
        }
    }
}

#[async_trait]
impl RefreshProjectStatsUseCase for RefreshProjectStatsService {
    async fn execute(
        &self,
        owner: Uuid,
        id: Uuid,
    ) -> Result<ProjectRecord, RefreshProjectStatsError> {
        let project = self.repository.find(owner, id).await.map_err(map_repo_err)?;

        let github_url = project
            .github_url
            .as_deref()
            .ok_or(RefreshProjectStatsError::MissingGithubUrl)?;

        let (repo_owner, repo_name) = github_repo_from_url(github_url)
            .ok_or(RefreshProjectStatsError::InvalidGithubUrl)?;

        let stats = self
            .github
            .fetch(&repo_owner, &repo_name)
            .await
            .map_err(|e: UpstreamError| RefreshProjectStatsError::UpstreamError(e.to_string()))?;

        self.repository
            .set_stats(owner, id, stats.stars, stats.forks)
            .await
            .map_err(map_repo_err)
    }
}
