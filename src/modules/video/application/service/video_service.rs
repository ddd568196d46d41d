use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::functions::application::parse::{fallback_thumbnail, youtube_id_from_url};
use crate::modules::video::application::ports::incoming::{
    CreateVideoUseCase, DeleteVideoUseCase, ListVideosUseCase, ReorderVideosError,
    ReorderVideosUseCase, UpdateVideoUseCase, VideoError,
};
use crate::modules::video::application::ports::outgoing::{
    VideoData, VideoRecord, VideoRepository, VideoRepositoryError,
};

pub struct VideoService {
    repository: Arc<dyn VideoRepository + Send + Sync>,
}

impl VideoService {
    pub fn new(repository: Arc<dyn VideoRepository + Send + Sync>) -> Self {
        Self { repository }
    }
}

fn map_err(e: VideoRepositoryError) -> VideoError {
    match e {
        VideoRepositoryError::NotFound => VideoError::NotFound,
        other => VideoError::RepositoryError(other.to_string()),
    }
}

/// Fills the derived fields from the submitted URL. The stored thumbnail is
/// only defaulted, an explicit one wins.
fn derive_fields(mut data: VideoData) -> VideoData {
    if let Some(id) = youtube_id_from_url(&data.youtube_url) {
        if data.thumbnail_url.is_none() {
            data.thumbnail_url = Some(fallback_thumbnail(&id));
        }
        data.youtube_id = Some(id);
    }
    data
}

#[async_trait]
impl ListVideosUseCase for VideoService {
    async fn execute(&self) -> Result<Vec<VideoRecord>, VideoError> {
        self.repository.list_all().await.map_err(map_err)
    }
}

#[async_trait]
impl CreateVideoUseCase for VideoService {
    async fn execute(&self, owner: Uuid, data: VideoData) -> Result<VideoRecord, VideoError> {
        let order_index = self.repository.count_for(owner).await.map_err(map_err)? as i32;
        self.repository
            .insert(owner, derive_fields(data), order_index)
            .await
            .map_err(map_err)
    }
}

#[async_trait]
impl UpdateVideoUseCase for VideoService {
    async fn execute(
        &self,
        owner: Uuid,
        id: Uuid,
        data: VideoData,
    ) -> Result<VideoRecord, VideoError> {
        self.repository
            .update(owner, id, derive_fields(data))
            .await
            .map_err(map_err)
    }
}

#[async_trait]
impl DeleteVideoUseCase for VideoService {
    async fn execute(&self, owner: Uuid, id: Uuid) -> Result<(), VideoError> {
        self.repository.delete(owner, id).await.map_err(map_err)
    }
}

#[async_trait]
impl ReorderVideosUseCase for VideoService {
    async fn execute(&self, owner: Uuid, ids: Vec<Uuid>) -> Result<(), ReorderVideosError> {
        match self.repository.reorder(owner, ids).await {
            Ok(()) => Ok(()),
            Err(VideoRepositoryError::OrderMismatch) => Err(ReorderVideosError::OrderMismatch),
            Err(e) => Err(ReorderVideosError::RepositoryError(e.to_string())),
        }
    }
}
