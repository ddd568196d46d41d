use async_trait::async_trait;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

use super::super::upload_policy::UploadKind;

#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub kind: UploadKind,
    pub file_name: String,
    pub content_type: String,
}

/// Everything the client needs to finish the upload: where to PUT the bytes
/// and the durable URL to store on the owning record.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UploadTicket {
    pub upload_url: String,
    pub public_url: String,
    pub object_key: String,
    pub bucket: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CreateUploadError {
    UnsupportedContentType,
    SignFailed(String),
}

impl fmt::Display for CreateUploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedContentType => {
                write!(f, "Content type is not allowed for this upload kind")
            }
            Self::SignFailed(e) => write!(f, "Signing the upload URL failed: {}", e),
        }
    }
}

#[async_trait]
pub trait CreateUploadUseCase {
    async fn execute(
        &self,
        owner: Uuid,
        request: UploadRequest,
    ) -> Result<UploadTicket, CreateUploadError>;
}
