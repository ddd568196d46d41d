use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use super::ports::incoming::{
    CreateUploadError, CreateUploadUseCase, UploadRequest, UploadTicket,
};
use super::ports::outgoing::ObjectStore;
use super::upload_policy::sanitize_file_name;

pub struct UploadService {
    store: Arc<dyn ObjectStore>,
}

impl UploadService {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }
}

fn public_url(bucket: &str, object_key: &str) -> String {
    format!("https://storage.googleapis.com/{}/{}", bucket, object_key)
}

#[async_trait]
impl CreateUploadUseCase for UploadService {
    async fn execute(
        &self,
        owner: Uuid,
        request: UploadRequest,
    ) -> Result<UploadTicket, CreateUploadError> {
        // Policy check first; a bad content type never touches storage.
        if !request.kind.accepts(&request.content_type) {
            return Err(CreateUploadError::UnsupportedContentType);
        }

        let bucket = request.kind.bucket().to_string();
        let object_key = format!(
            "{}/{}_{}",
            owner,
            Utc::now().timestamp_millis(),
            sanitize_file_name(&request.file_name)
        );

        let upload_url = self
            .store
            .signed_put_url(&bucket, &object_key, &request.content_type)
            .await
            .map_err(|e| CreateUploadError::SignFailed(e.to_string()))?;

        Ok(UploadTicket {
            upload_url,
            public_url: public_url(&bucket, &object_key),
            object_key,
            bucket,
        })
    }
}
