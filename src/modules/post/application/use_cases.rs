use std::sync::Arc;

use super::ports::incoming::{
    CreatePostUseCase, DeletePostUseCase, GetPublishedPostUseCase, ListAllPostsUseCase,
    ListPublishedPostsUseCase, UpdatePostUseCase,
};

#[derive(Clone)]
pub struct PostUseCases {
    pub list_published: Arc<dyn ListPublishedPostsUseCase + Send + Sync>,
    pub get_published: Arc<dyn GetPublishedPostUseCase + Send + Sync>,
    pub list_all: Arc<dyn ListAllPostsUseCase + Send + Sync>,
    pub create: Arc<dyn CreatePostUseCase + Send + Sync>,
    pub update: Arc<dyn UpdatePostUseCase + Send + Sync>,
    pub delete: Arc<dyn DeletePostUseCase + Send + Sync>,
}
