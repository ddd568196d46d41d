use async_trait::async_trait;
use serde::Deserialize;

use crate::modules::functions::application::format::{
    compact_count, render_duration, render_published_date,
};
use crate::modules::functions::application::parse::fallback_thumbnail;
use crate::modules::functions::application::ports::outgoing::{
    UpstreamError, VideoMetadata, YoutubeMetadataQuery,
};

/// YouTube Data API v3 client resolving a video id into display-ready
/// metadata. Counts and timestamps come back already formatted for the
/// public site.
pub struct YoutubeMetadataReqwest {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Deserialize)]
struct VideosResponse {
    items: Vec<VideoItem>,
}

#[derive(Deserialize)]
struct VideoItem {
    snippet: Snippet,
    #[serde(rename = "contentDetails")]
    content_details: ContentDetails,
    statistics: Statistics,
}

#[derive(Deserialize)]
struct Snippet {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(rename = "publishedAt")]
    published_at: String,
    #[serde(default)]
    thumbnails: Thumbnails,
}

#[derive(Deserialize, Default)]
struct Thumbnails {
    maxres: Option<Thumbnail>,
    high: Option<Thumbnail>,
    default: Option<Thumbnail>,
}

#[derive(Deserialize)]
struct Thumbnail {
    url: String,
}

#[derive(Deserialize)]
struct ContentDetails {
    duration: String,
}

#[derive(Deserialize)]
struct Statistics {
    #[serde(rename = "viewCount")]
    view_count: Option<String>,
    #[serde(rename = "likeCount")]
    like_count: Option<String>,
}

impl YoutubeMetadataReqwest {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url("https://www.googleapis.com/youtube/v3".to_string(), api_key)
    }

    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    fn pick_thumbnail(video_id: &str, thumbnails: &Thumbnails) -> String {
        thumbnails
            .maxres
            .as_ref()
            .or(thumbnails.high.as_ref())
            .or(thumbnails.default.as_ref())
            .map(|t| t.url.clone())
            .unwrap_or_else(|| fallback_thumbnail(video_id))
    }

    fn format_count(raw: Option<&String>) -> String {
        raw.and_then(|v| v.parse::<u64>().ok())
            .map(compact_count)
            .unwrap_or_else(|| "0".to_string())
    }
}

#[async_trait]
impl YoutubeMetadataQuery for YoutubeMetadataReqwest {
    async fn fetch(&self, video_id: &str) -> Result<VideoMetadata, UpstreamError> {
        let url = format!("{}/videos", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("part", "snippet,contentDetails,statistics"),
                ("id", video_id),
                ("key", &self.api_key),
            ])
            .send()
            .await
            .map_err(|e| UpstreamError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(UpstreamError::RequestFailed(format!(
                "youtube returned {}",
                response.status()
            )));
        }

        let body: VideosResponse = response
            .json()
            .await
            .map_err(|e| UpstreamError::MalformedResponse(e.to_string()))?;

        // An unknown id comes back as 200 with an empty item list.
        let item = body.items.into_iter().next().ok_or(UpstreamError::NotFound)?;

        Ok(VideoMetadata {
            video_id: video_id.to_string(),
            title: item.snippet.title,
            description: item.snippet.description,
            thumbnail_url: Self::pick_thumbnail(video_id, &item.snippet.thumbnails),
            duration: render_duration(&item.content_details.duration),
            views: Self::format_count(item.statistics.view_count.as_ref()),
            likes: Self::format_count(item.statistics.like_count.as_ref()),
            published_at: render_published_date(&item.snippet.published_at),
        })
    }
}
