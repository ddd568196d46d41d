use std::sync::Arc;

use crate::modules::auth::application::ports::incoming::{LoginUseCase, RefreshTokenUseCase};

#[derive(Clone)]
pub struct AuthUseCases {
    pub login: Arc<dyn LoginUseCase + Send + Sync>,
    pub refresh: Arc<dyn RefreshTokenUseCase + Send + Sync>,
}
