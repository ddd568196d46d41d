pub mod github_stats_reqwest;
pub mod youtube_metadata_reqwest;
