use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;

use crate::modules::storage::application::ports::outgoing::{ObjectStore, SignUrlError};

/// TTL for signed upload URLs.
const SIGNED_URL_TTL: Duration = Duration::from_secs(15 * 60);

/// google-cloud-storage uses a bucket resource name format:
/// `projects/_/buckets/{bucket}`
fn bucket_resource(bucket: &str) -> String {
    format!("projects/_/buckets/{}", bucket)
}

fn map_sign_error(msg: &str) -> SignUrlError {
    let m = msg.to_lowercase();

    if m.contains("permission") || m.contains("forbidden") || m.contains("denied") {
        SignUrlError::AccessDenied
    } else if m.contains("bucket") && (m.contains("not found") || m.contains("404")) {
        SignUrlError::BucketNotFound
    } else if m.contains("invalid") || m.contains("config") || m.contains("configuration") {
        SignUrlError::Configuration
    } else {
        SignUrlError::Infrastructure
    }
}

/// Internal seam so tests never touch google-cloud-storage types.
#[async_trait]
trait GcsClient: Send + Sync {
    async fn sign_put_url(
        &self,
        bucket_resource: &str,
        object_name: &str,
        ttl: Duration,
    ) -> Result<String, String>;
}

#[cfg(test)]
struct ArcGcsClient(Arc<dyn GcsClient>);

#[cfg(test)]
#[async_trait]
impl GcsClient for ArcGcsClient {
    async fn sign_put_url(
        &self,
        bucket_resource: &str,
        object_name: &str,
        ttl: Duration,
    ) -> Result<String, String> {
        self.0.sign_put_url(bucket_resource, object_name, ttl).await
    }
}

#[derive(Clone)]
pub struct GcsObjectStore {
    client: Arc<OnceCell<Box<dyn GcsClient>>>,
    signed_url_ttl: Duration,
}

impl GcsObjectStore {
    /// Synchronous constructor; the client is initialized lazily on first use.
    pub fn new() -> Self {
        Self {
            client: Arc::new(OnceCell::new()),
            signed_url_ttl: SIGNED_URL_TTL,
        }
    }

    async fn get_client(&self) -> Result<&dyn GcsClient, Box<dyn std::error::Error + Send + Sync>> {
        self.client
            .get_or_try_init(|| async {
                let real_client = RealGcsClient::new().await?;
                Ok(Box::new(real_client) as Box<dyn GcsClient>)
            })
            .await
            .map(|boxed| &**boxed)
    }

    #[cfg(test)]
    fn with_client(client: Arc<dyn GcsClient>, signed_url_ttl: Duration) -> Self {
        let once = OnceCell::new();
        let _ = once.set(Box::new(ArcGcsClient(client)) as Box<dyn GcsClient>);

        Self {
            client: Arc::new(once),
            signed_url_ttl,
        }
    }
}

impl Default for GcsObjectStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ObjectStore for GcsObjectStore {
    async fn signed_put_url(
        &self,
        bucket: &str,
        object_key: &str,
        _content_type: &str,
    ) -> Result<String, SignUrlError> {
        let client = self
            .get_client()
            .await
            .map_err(|_| SignUrlError::Infrastructure)?;

        let bucket = bucket_resource(bucket);

        client
            .sign_put_url(&bucket, object_key, self.signed_url_ttl)
            .await
            .map_err(|e| map_sign_error(&e))
    }
}

struct RealGcsClient {
    signer: google_cloud_auth::signer::Signer,
}

impl RealGcsClient {
    async fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let signer = google_cloud_auth::credentials::Builder::default()
            .build_signer()
            .map_err(|e| {
                let msg = e.to_string();
                tracing::error!("Failed to build GCS signer: {:?}", e);

                if msg.contains("authorized_user") {
                    tracing::error!(
                        "Signed URLs require a service account key. \
                         Set GOOGLE_APPLICATION_CREDENTIALS to a service-account JSON (type=service_account)."
                    );
                }

                e
            })?;

        Ok(Self { signer })
    }
}

#[async_trait]
impl GcsClient for RealGcsClient {
    async fn sign_put_url(
        &self,
        bucket_resource: &str,
        object_name: &str,
        ttl: Duration,
    ) -> Result<String, String> {
        let url = google_cloud_storage::builder::storage::SignedUrlBuilder::for_object(
            bucket_resource.to_string(),
            object_name.to_string(),
        )
        .with_method(google_cloud_storage::http::Method::PUT)
        .with_expiration(ttl)
        .sign_with(&self.signer)
        .await
        .map_err(|e| e.to_string())?;

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct FakeGcsClient {
        last_call: Mutex<Option<(String, String, Duration)>>,
        result: Mutex<Result<String, String>>,
    }

    impl FakeGcsClient {
        fn new() -> Self {
            Self {
                last_call: Mutex::new(None),
                result: Mutex::new(Ok("ok".to_string())),
            }
        }

        fn set_result(&self, r: Result<String, String>) {
            *self.result.lock().unwrap() = r;
        }
    }

    #[async_trait]
    impl GcsClient for FakeGcsClient {
        async fn sign_put_url(
            &self,
            bucket_resource: &str,
            object_name: &str,
            ttl: Duration,
        ) -> Result<String, String> {
            *self.last_call.lock().unwrap() =
                Some((bucket_resource.to_string(), object_name.to_string(), ttl));

            self.result.lock().unwrap().clone()
        }
    }

    #[tokio::test]
    async fn signs_against_the_bucket_resource_name() {
        let fake = Arc::new(FakeGcsClient::new());
        fake.set_result(Ok("https://signed.example".to_string()));

        let store = GcsObjectStore::with_client(fake.clone(), Duration::from_secs(123));

        let url = store
            .signed_put_url("avatars", "u1/1_me.png", "image/png")
            .await
            .unwrap();
        assert_eq!(url, "https://signed.example");

        let call = fake.last_call.lock().unwrap().clone().unwrap();
        assert_eq!(call.0, "projects/_/buckets/avatars");
        assert_eq!(call.1, "u1/1_me.png");
        assert_eq!(call.2, Duration::from_secs(123));
    }

    #[tokio::test]
    async fn maps_access_denied() {
        let fake = Arc::new(FakeGcsClient::new());
        fake.set_result(Err("Permission denied".to_string()));

        let store = GcsObjectStore::with_client(fake, SIGNED_URL_TTL);
        let err = store
            .signed_put_url("avatars", "k", "image/png")
            .await
            .unwrap_err();

        assert!(matches!(err, SignUrlError::AccessDenied));
    }

    #[tokio::test]
    async fn maps_bucket_not_found() {
        let fake = Arc::new(FakeGcsClient::new());
        fake.set_result(Err("Bucket not found (404)".to_string()));

        let store = GcsObjectStore::with_client(fake, SIGNED_URL_TTL);
        let err = store
            .signed_put_url("missing", "k", "image/png")
            .await
            .unwrap_err();

        assert!(matches!(err, SignUrlError::BucketNotFound));
    }

    #[tokio::test]
    async fn unrecognized_failures_are_infrastructure() {
        let fake = Arc::new(FakeGcsClient::new());
        fake.set_result(Err("some weird error".to_string()));

        let store = GcsObjectStore::with_client(fake, SIGNED_URL_TTL);
        let err = store
            .signed_put_url("avatars", "k", "image/png")
            .await
            .unwrap_err();

        assert!(matches!(err, SignUrlError::Infrastructure));
    }
}
