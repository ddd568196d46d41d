use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use super::ports::incoming::{
    CreatePostUseCase, DeletePostUseCase, GetPublishedPostUseCase, ListAllPostsUseCase,
    ListPublishedPostsUseCase, PostError, UpdatePostUseCase,
};
use super::ports::outgoing::{PostData, PostRecord, PostRepository, PostRepositoryError};

pub struct PostService {
    repository: Arc<dyn PostRepository + Send + Sync>,
}

impl PostService {
    pub fn new(repository: Arc<dyn PostRepository + Send + Sync>) -> Self {
        Self { repository }
    }
}

fn map_err(e: PostRepositoryError) -> PostError {
    match e {
        PostRepositoryError::NotFound => PostError::NotFound,
        PostRepositoryError::DatabaseError(msg) => PostError::RepositoryError(msg),
    }
}

#[async_trait]
impl ListPublishedPostsUseCase for PostService {
    async fn execute(&self) -> Result<Vec<PostRecord>, PostError> {
        self.repository.list_published().await.map_err(map_err)
    }
}

#[async_trait]
impl GetPublishedPostUseCase for PostService {
    async fn execute(&self, id: Uuid) -> Result<PostRecord, PostError> {
        self.repository.find_published(id).await.map_err(map_err)
    }
}

#[async_trait]
impl ListAllPostsUseCase for PostService {
    async fn execute(&self) -> Result<Vec<PostRecord>, PostError> {
        self.repository.list_all().await.map_err(map_err)
    }
}

#[async_trait]
impl CreatePostUseCase for PostService {
    async fn execute(&self, owner: Uuid, data: PostData) -> Result<PostRecord, PostError> {
        let order_index = self.repository.count_for(owner).await.map_err(map_err)? as i32;
        self.repository
            .insert(owner, data, order_index)
            .await
            .map_err(map_err)
    }
}

#[async_trait]
impl UpdatePostUseCase for PostService {
    async fn execute(
        &self,
        owner: Uuid,
        id: Uuid,
        data: PostData,
    ) -> Result<PostRecord, PostError> {
        self.repository.update(owner, id, data).await.map_err(map_err)
    }
}

#[async_trait]
impl DeletePostUseCase for PostService {
    async fn execute(&self, owner: Uuid, id: Uuid) -> Result<(), PostError> {
        self.repository.delete(owner, id).await.map_err(map_err)
    }
}
