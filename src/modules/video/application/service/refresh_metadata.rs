use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::functions::application::parse::youtube_id_from_url;
use crate::modules::functions::application::ports::outgoing::YoutubeMetadataQuery;
use crate::modules::video::application::ports::incoming::{
    RefreshVideoMetadataError, RefreshVideoMetadataUseCase,
};
use crate::modules::video::application::ports::outgoing::{
    VideoRecord, VideoRepository, VideoRepositoryError,
};

/// Looks the video up on YouTube and persists the display metadata on the
/// stored row.
pub struct RefreshVideoMetadataService {
    repository: Arc<dyn VideoRepository + Send + Sync>,
    youtube: Arc<dyn YoutubeMetadataQuery + Send + Sync>,
}

impl RefreshVideoMetadataService {
    pub fn new(
        repository: Arc<dyn VideoRepository + Send + Sync>,
        youtube: Arc<dyn YoutubeMetadataQuery + Send + Sync>,
    ) -> Self {
        Self { repository, youtube }
    }
}

fn map_repo_err(e: VideoRepositoryError) -> RefreshVideoMetadataError {
    match e {
        VideoRepositoryError::NotFound => RefreshVideoMetadataError::NotFound,
        other => RefreshVideoMetadataError::RepositoryError(other.to_string()),
    }
}

#[async_trait]
impl RefreshVideoMetadataUseCase for RefreshVideoMetadataService {
    async fn execute(
        &self,
        owner: Uuid,
        id: Uuid,
    ) -> Result<VideoRecord, RefreshVideoMetadataError> {
        let video = self.repository.find(owner, id).await.map_err(map_repo_err)?;

        let video_id = video
            .youtube_id
            .clone()
            .or_else(|| youtube_id_from_url(&video.youtube_url))
            .ok_or(RefreshVideoMetadataError::InvalidYoutubeUrl)?;

        let metadata = self
            .youtube
            .fetch(&video_id)
            .await
            .map_err(|e| RefreshVideoMetadataError::UpstreamError(e.to_string()))?;

        self.repository
            .set_metadata(owner, id, metadata)
            .await
            .map_err(map_repo_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::Mutex;

    use crate::modules::functions::application::ports::outgoing::{UpstreamError, VideoMetadata};
    use crate::modules::video::application::ports::outgoing::VideoData;

    struct StubRepo {
        row: Mutex<Option<VideoRecord>>,
    }

    fn record(owner: Uuid, youtube_url: &str, youtube_id: Option<&str>) -> VideoRecord {
        VideoRecord {
            id: Uuid::new_v4(),
            user_id: owner,
            title: "Talk".to_string(),
            description: None,
            youtube_url: youtube_url.to_string(),
            youtube_id: youtube_id.map(|s| s.to_string()),
            thumbnail_url: None,
            duration: None,
            views: None,
            likes: None,
            published_at: None,
            order_index: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[async_trait]
    impl VideoRepository for StubRepo {
        async fn list_all(&self) -> Result<Vec<VideoRecord>, VideoRepositoryError> {
            unreachable!("not used here")
        }

        async fn find(
            &self,
            owner: Uuid,
            id: Uuid,
        ) -> Result<VideoRecord, VideoRepositoryError> {
            self.row
                .lock()
                .unwrap()
                .clone()
                .filter(|r| r.id == id && r.user_id == owner)
                .ok_or(VideoRepositoryError::NotFound)
        }

        async fn count_for(&self, _owner: Uuid) -> Result<u64, VideoRepositoryError> {
            unreachable!("not used here")
        }

        async fn insert(
            &self,
            _owner: Uuid,
            _data: VideoData,
            _order_index: i32,
        ) -> Result<VideoRecord, VideoRepositoryError> {
            unreachable!("not used here")
        }

        async fn update(
            &self,
            _owner: Uuid,
            _id: Uuid,
            _data: VideoData,
        ) -> Result<VideoRecord, VideoRepositoryError> {
            unreachable!("not used here")
        }

        async fn set_metadata(
            &self,
            owner: Uuid,
            id: Uuid,
            metadata: VideoMetadata,
        ) -> Result<VideoRecord, VideoRepositoryError> {
            let mut guard = self.row.lock().unwrap();
            let row = guard
                .as_mut()
                .filter(|r| r.id == id && r.user_id == owner)
                .ok_or(VideoRepositoryError::NotFound)?;
            row.youtube_id = Some(metadata.video_id);
            row.thumbnail_url = Some(metadata.thumbnail_url);
            row.duration = Some(metadata.duration);
            row.views = Some(metadata.views);
            row.likes = Some(metadata.likes);
            row.published_at = Some(metadata.published_at);
            Ok(row.clone())
        }

        async fn reorder(
            &self,
            _owner: Uuid,
            _ids: Vec<Uuid>,
        ) -> Result<(), VideoRepositoryError> {
            unreachable!("not used here")
        }

        async fn delete(&self, _owner: Uuid, _id: Uuid) -> Result<(), VideoRepositoryError> {
            unreachable!("not used here")
        }
    }

    struct StubYoutube {
        result: Result<VideoMetadata, String>,
    }

    #[async_trait]
    impl YoutubeMetadataQuery for StubYoutube {
        async fn fetch(&self, _video_id: &str) -> Result<VideoMetadata, UpstreamError> {
            self.result
                .clone()
                .map_err(UpstreamError::RequestFailed)
        }
    }

    fn metadata() -> VideoMetadata {
        VideoMetadata {
            video_id: "dQw4w9WgXcQ".to_string(),
            title: "Talk".to_string(),
            description: "Conference talk".to_string(),
            thumbnail_url: "https://i.ytimg.com/vi/dQw4w9WgXcQ/hq.jpg".to_string(),
            duration: "3:32".to_string(),
            views: "1.2M".to_string(),
            likes: "16K".to_string(),
            published_at: "2009-10-25".to_string(),
        }
    }

    #[tokio::test]
    async fn persists_fetched_metadata() {
        let owner = Uuid::new_v4();
        let row = record(owner, "https://youtu.be/dQw4w9WgXcQ", None);
        let id = row.id;
        let service = RefreshVideoMetadataService::new(
            Arc::new(StubRepo {
                row: Mutex::new(Some(row)),
            }),
            Arc::new(StubYoutube {
                result: Ok(metadata()),
            }),
        );

        let updated = service.execute(owner, id).await.unwrap();
        assert_eq!(updated.duration.as_deref(), Some("3:32"));
        assert_eq!(updated.views.as_deref(), Some("1.2M"));
    }

    #[tokio::test]
    async fn unrecognizable_url_is_rejected_without_a_lookup() {
        let owner = Uuid::new_v4();
        let row = record(owner, "https://vimeo.com/123", None);
        let id = row.id;
        let service = RefreshVideoMetadataService::new(
            Arc::new(StubRepo {
                row: Mutex::new(Some(row)),
            }),
            Arc::new(StubYoutube {
                result: Err("should not be called".to_string()),
            }),
        );

        let err = service.execute(owner, id).await.unwrap_err();
        assert_eq!(err, RefreshVideoMetadataError::InvalidYoutubeUrl);
    }

    #[tokio::test]
    async fn upstream_failure_is_surfaced() {
        let owner = Uuid::new_v4();
        let row = record(owner, "https://youtu.be/dQw4w9WgXcQ", Some("dQw4w9WgXcQ"));
        let id = row.id;
        let service = RefreshVideoMetadataService::new(
            Arc::new(StubRepo {
                row: Mutex::new(Some(row)),
            }),
            Arc::new(StubYoutube {
                result: Err("quota exceeded".to_string()),
            }),
        );

        let err = service.execute(owner, id).await.unwrap_err();
        assert!(matches!(err, RefreshVideoMetadataError::UpstreamError(_)));
    }
}
