pub mod github_stats;
pub mod youtube_data;
