use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use super::outgoing::{ProjectData, ProjectRecord};

#[derive(Debug, Clone, PartialEq)]
pub enum ProjectError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for ProjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectError::NotFound => write!(f, "Project not found"),
            ProjectError::RepositoryError(e) => write!(f, "Repository error: {}", e),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RefreshProjectStatsError {
    NotFound,
    MissingGithubUrl,
    InvalidGithubUrl,
    UpstreamError(String),
    RepositoryError(String),
}

impl fmt::Display for RefreshProjectStatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefreshProjectStatsError::NotFound => write!(f, "Project not found"),
            RefreshProjectStatsError::MissingGithubUrl => {
                write!(f, "Project has no GitHub URL")
            }
            RefreshProjectStatsError::InvalidGithubUrl => {
                write!(f, "Project GitHub URL is not a repository URL")
            }
            RefreshProjectStatsError::UpstreamError(e) => write!(f, "GitHub error: {}", e),
            RefreshProjectStatsError::RepositoryError(e) => write!(f, "Repository error: {}", e),
        }
    }
}

#[async_trait]
pub trait ListProjectsUseCase {
    async fn execute(&self) -> Result<Vec<ProjectRecord>, ProjectError>;
}

#[async_trait]
pub trait CreateProjectUseCase {
    async fn execute(&self, owner: Uuid, data: ProjectData)
        -> Result<ProjectRecord, ProjectError>;
}

#[async_trait]
pub trait UpdateProjectUseCase {
    async fn execute(
        &self,
        owner: Uuid,
        id: Uuid,
        data: ProjectData,
    ) -> Result<ProjectRecord, ProjectError>;
}

#[async_trait]
pub trait DeleteProjectUseCase {
    async fn execute(&self, owner: Uuid, id: Uuid) -> Result<(), ProjectError>;
}

#[async_trait]
pub trait RefreshProjectStatsUseCase {
    async fn execute(&self, owner: Uuid, id: Uuid)
        -> Result<ProjectRecord, RefreshProjectStatsError>;
}
