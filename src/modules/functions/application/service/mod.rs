use async_trait::async_trait;
use std::sync::Arc;

use super::parse::{github_repo_from_url, youtube_id_from_url};
use super::ports::incoming::{
    GithubStatsFunctionError, GithubStatsFunctionUseCase, YoutubeDataFunctionError,
    YoutubeDataFunctionUseCase,
};
use super::ports::outgoing::{GithubStats, GithubStatsQuery, VideoMetadata, YoutubeMetadataQuery};

pub struct GithubStatsFunctionService {
    github: Arc<dyn GithubStatsQuery + Send + Sync>,
}

impl GithubStatsFunctionService {
    pub fn new(github: Arc<dyn GithubStatsQuery + Send + Sync>) -> Self {
        Self { github }
    }
}

#[async_trait]
impl GithubStatsFunctionUseCase for GithubStatsFunctionService {
    async fn execute(&self, github_url: &str) -> Result<GithubStats, GithubStatsFunctionError> {
        let (owner, repo) =
            github_repo_from_url(github_url).ok_or(GithubStatsFunctionError::InvalidUrl)?;

        self.github
            .fetch(&owner, &repo)
            .await
            .map_err(|e| GithubStatsFunctionError::UpstreamError(e.to_string()))
    }
}

pub struct YoutubeDataFunctionService {
    youtube: Arc<dyn YoutubeMetadataQuery + Send + Sync>,
}

impl YoutubeDataFunctionService {
    pub fn new(youtube: Arc<dyn YoutubeMetadataQuery + Send + Sync>) -> Self {
        Self { youtube }
    }
}

#[async_trait]
impl YoutubeDataFunctionUseCase for YoutubeDataFunctionService {
    async fn execute(
        &self,
        youtube_url: &str,
    ) -> Result<VideoMetadata, YoutubeDataFunctionError> {
        let video_id =
            youtube_id_from_url(youtube_url).ok_or(YoutubeDataFunctionError::InvalidUrl)?;

        self.youtube
            .fetch(&video_id)
            .await
            .map_err(|e| YoutubeDataFunctionError::UpstreamError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    use crate::modules::functions::application::ports::outgoing::UpstreamError;

    struct StubGithub {
        called: AtomicBool,
    }

    #[async_trait]
    impl GithubStatsQuery for StubGithub {
        async fn fetch(&self, owner: &str, repo: &str) -> Result<GithubStats, UpstreamError> {
            self.called.store(true, Ordering::SeqCst);
            assert_eq!(owner, "rust-lang");
            assert_eq!(repo, "rust");
            Ok(GithubStats {
                stars: 90_000,
                forks: 12_000,
            })
        }
    }

    #[tokio::test]
    async fn fetches_stats_for_repository_url() {
        let service = GithubStatsFunctionService::new(Arc::new(StubGithub {
            called: AtomicBool::new(false),
        }));

        let stats = service
            .execute("https://github.com/rust-lang/rust")
            .await
            .unwrap();
        assert_eq!(stats.stars, 90_000);
    }

    #[tokio::test]
    async fn invalid_url_short_circuits_before_the_network() {
        let github = Arc::new(StubGithub {
            called: AtomicBool::new(false),
        });
        let service = GithubStatsFunctionService::new(github.clone());

        let err = service.execute("https://github.com/no-repo").await.unwrap_err();
        assert_eq!(err, GithubStatsFunctionError::InvalidUrl);
        assert!(!github.called.load(Ordering::SeqCst));
    }

    struct StubYoutube;

    #[async_trait]
    impl YoutubeMetadataQuery for StubYoutube {
        async fn fetch(&self, video_id: &str) -> Result<VideoMetadata, UpstreamError> {
            Ok(VideoMetadata {
                video_id: video_id.to_string(),
                title: "Talk".to_string(),
                description: String::new(),
                thumbnail_url: format!("https://img.youtube.com/vi/{}/maxresdefault.jpg", video_id),
                duration: "3:32".to_string(),
                views: "1.2K".to_string(),
                likes: "40".to_string(),
                published_at: "2024-01-01".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn resolves_video_id_before_lookup() {
        let service = YoutubeDataFunctionService::new(Arc::new(StubYoutube));

        let metadata = service
            .execute("https://youtu.be/dQw4w9WgXcQ")
            .await
            .unwrap();
        assert_eq!(metadata.video_id, "dQw4w9WgXcQ");
    }

    #[tokio::test]
    async fn non_youtube_url_is_invalid() {
        let service = YoutubeDataFunctionService::new(Arc::new(StubYoutube));

        let err = service.execute("https://vimeo.com/1").await.unwrap_err();
        assert_eq!(err, YoutubeDataFunctionError::InvalidUrl);
    }
}
