use std::sync::Arc;

use super::ports::incoming::SendContactEmailUseCase;

#[derive(Clone)]
pub struct ContactUseCases {
    pub send: Arc<dyn SendContactEmailUseCase + Send + Sync>,
}
