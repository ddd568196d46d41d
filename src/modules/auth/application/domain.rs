use chrono::{DateTime, Utc};
use uuid::Uuid;

/// The single content owner. Credentials are seeded out-of-band; there is no
/// self-service registration.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
