use std::sync::Arc;

use super::ports::incoming::{GetProfileUseCase, UpsertProfileUseCase};

#[derive(Clone)]
pub struct ProfileUseCases {
    pub get: Arc<dyn GetProfileUseCase + Send + Sync>,
    pub upsert: Arc<dyn UpsertProfileUseCase + Send + Sync>,
}
