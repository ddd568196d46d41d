use std::sync::Arc;

use super::ports::incoming::{GithubStatsFunctionUseCase, YoutubeDataFunctionUseCase};

#[derive(Clone)]
pub struct FunctionUseCases {
    pub github_stats: Arc<dyn GithubStatsFunctionUseCase + Send + Sync>,
    pub youtube_data: Arc<dyn YoutubeDataFunctionUseCase + Send + Sync>,
}
