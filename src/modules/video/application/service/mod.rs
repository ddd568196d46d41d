pub mod refresh_metadata;
pub mod video_service;

pub use refresh_metadata::RefreshVideoMetadataService;
pub use video_service::VideoService;
