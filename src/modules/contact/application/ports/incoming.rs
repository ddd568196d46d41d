use async_trait::async_trait;
use std::fmt;

use crate::shared::validation::ContactData;

#[derive(Debug, Clone, PartialEq)]
pub enum SendContactEmailError {
    /// No recipient configured; nothing is sent.
    MissingRecipient,
    SendFailed(String),
}

impl fmt::Display for SendContactEmailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRecipient => write!(f, "No contact recipient is configured"),
            Self::SendFailed(e) => write!(f, "Sending contact email failed: {}", e),
        }
    }
}

#[async_trait]
pub trait SendContactEmailUseCase {
    async fn execute(&self, message: ContactData) -> Result<(), SendContactEmailError>;
}
