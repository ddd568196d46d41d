pub mod project_service;
pub mod refresh_stats;

pub use project_service::ProjectService;
pub use refresh_stats::RefreshProjectStatsService;
