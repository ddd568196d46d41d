use std::sync::Arc;

use super::ports::incoming::{
    CreateVideoUseCase, DeleteVideoUseCase, ListVideosUseCase, RefreshVideoMetadataUseCase,
    ReorderVideosUseCase, UpdateVideoUseCase,
};

#[derive(Clone)]
pub struct VideoUseCases {
    pub list: Arc<dyn ListVideosUseCase + Send + Sync>,
    pub create: Arc<dyn CreateVideoUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateVideoUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteVideoUseCase + Send + Sync>,
    pub reorder: Arc<dyn ReorderVideosUseCase + Send + Sync>,
    pub refresh_metadata: Arc<dyn RefreshVideoMetadataUseCase + Send + Sync>,
}
