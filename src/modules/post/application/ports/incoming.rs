use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use super::outgoing::{PostData, PostRecord};

#[derive(Debug, Clone, PartialEq)]
pub enum PostError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for PostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostError::NotFound => write!(f, "Post not found"),
            PostError::RepositoryError(e) => write!(f, "Repository error: {}", e),
        }
    }
}

#[async_trait]
pub trait ListPublishedPostsUseCase {
    async fn execute(&self) -> Result<Vec<PostRecord>, PostError>;
}

#[async_trait]
pub trait GetPublishedPostUseCase {
    async fn execute(&self, id: Uuid) -> Result<PostRecord, PostError>;
}

#[async_trait]
pub trait ListAllPostsUseCase {
    async fn execute(&self) -> Result<Vec<PostRecord>, PostError>;
}

#[async_trait]
pub trait CreatePostUseCase {
    async fn execute(&self, owner: Uuid, data: PostData) -> Result<PostRecord, PostError>;
}

#[async_trait]
pub trait UpdatePostUseCase {
    async fn execute(
        &self,
        owner: Uuid,
        id: Uuid,
        data: PostData,
    ) -> Result<PostRecord, PostError>;
}

#[async_trait]
pub trait DeletePostUseCase {
    async fn execute(&self, owner: Uuid, id: Uuid) -> Result<(), PostError>;
}
