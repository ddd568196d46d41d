use std::sync::Arc;

use super::ports::incoming::CreateUploadUseCase;

#[derive(Clone)]
pub struct StorageUseCases {
    pub create_upload: Arc<dyn CreateUploadUseCase + Send + Sync>,
}
