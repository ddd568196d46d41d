use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SignUrlError {
    #[error("access to the bucket was denied")]
    AccessDenied,
    #[error("bucket does not exist")]
    BucketNotFound,
    #[error("storage credentials are misconfigured")]
    Configuration,
    #[error("storage infrastructure error")]
    Infrastructure,
}

#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Returns a time-limited URL the client PUTs the file to.
    async fn signed_put_url(
        &self,
        bucket: &str,
        object_key: &str,
        content_type: &str,
    ) -> Result<String, SignUrlError>;
}
