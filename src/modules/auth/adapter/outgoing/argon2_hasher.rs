use argon2::{
    password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;
use rand_core::OsRng;

use crate::modules::auth::application::ports::outgoing::{HashError, PasswordHasher};

#[derive(Clone)]
pub struct Argon2Hasher {
    params: Params,
}

impl Argon2Hasher {
    /// Budget-VPS friendly defaults: 4MB memory, 3 iterations, 1 thread.
    pub fn new() -> Self {
        Self::with_params(4 * 1024, 3, 1)
    }

    pub fn with_params(memory_kib: u32, iterations: u32, parallelism: u32) -> Self {
        let params =
            Params::new(memory_kib, iterations, parallelism, None).expect("Invalid Argon2 params");
        Self { params }
    }

    pub fn from_env() -> Self {
        let memory_kib: u32 = std::env::var("ARGON2_MEMORY_KIB")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(4 * 1024);

        let iterations: u32 = std::env::var("ARGON2_ITERATIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3);

        let parallelism: u32 = std::env::var("ARGON2_PARALLELISM")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1);

        Self::with_params(memory_kib, iterations, parallelism)
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PasswordHasher for Argon2Hasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_string();
        let argon2 = self.argon2();

        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|e| HashError::HashingFailed(e.to_string()))
        })
        .await
        .map_err(|e| HashError::HashingFailed(e.to_string()))?
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hash = hash.to_string();
        let argon2 = self.argon2();

        tokio::task::spawn_blocking(move || {
            let parsed =
                PasswordHash::new(&hash).map_err(|e| HashError::InvalidHashFormat(e.to_string()))?;

            match argon2.verify_password(password.as_bytes(), &parsed) {
                Ok(()) => Ok(true),
                Err(argon2::password_hash::Error::Password) => Ok(false),
                Err(e) => Err(HashError::InvalidHashFormat(e.to_string())),
            }
        })
        .await
        .map_err(|e| HashError::HashingFailed(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Tiny params to keep unit tests fast.
    fn fast_hasher() -> Argon2Hasher {
        Argon2Hasher::with_params(8, 1, 1)
    }

    #[tokio::test]
    async fn hash_and_verify_round_trip() {
        let hasher = fast_hasher();
        let hash = hasher.hash_password("hunter2").await.expect("hashes");

        assert!(hasher.verify_password("hunter2", &hash).await.unwrap());
        assert!(!hasher.verify_password("hunter3", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn corrupt_hash_is_an_error() {
        let hasher = fast_hasher();
        assert!(matches!(
            hasher.verify_password("pw", "not-a-phc-string").await,
            Err(HashError::InvalidHashFormat(_))
        ));
    }
}
