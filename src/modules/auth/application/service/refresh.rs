use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::auth::application::ports::incoming::{
    RefreshError, RefreshResponse, RefreshTokenUseCase,
};
use crate::modules::auth::application::ports::outgoing::TokenProvider;

pub struct RefreshTokenService {
    tokens: Arc<dyn TokenProvider>,
}

impl RefreshTokenService {
    pub fn new(tokens: Arc<dyn TokenProvider>) -> Self {
        Self { tokens }
    }
}

#[async_trait]
impl RefreshTokenUseCase for RefreshTokenService {
    async fn execute(&self, refresh_token: &str) -> Result<RefreshResponse, RefreshError> {
        let claims = self
            .tokens
            .verify_token(refresh_token)
            .map_err(|_| RefreshError::InvalidToken)?;

        if claims.token_type != "refresh" {
            return Err(RefreshError::InvalidToken);
        }

        let access_token = self
            .tokens
            .generate_access_token(claims.sub)
            .map_err(|e| RefreshError::TokenGenerationFailed(e.to_string()))?;

        Ok(RefreshResponse { access_token })
    }
}
