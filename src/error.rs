//! Vault error types
//!
//! One error enum shared by the store, the credential service, the HTTP layer
//! and the client.

use thiserror::Error;

pub type VaultResult<T> = Result<T, VaultError>;

#[derive(Debug, Error)]
pub enum VaultError {
    /// A required field was missing or empty
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The document store was unreachable or rejected the operation
    #[error("Storage error: {0}")]
    Storage(String),

    /// The submitted master password did not match
    #[error("Incorrect master password")]
    AuthorizationMismatch,

    /// Client-side HTTP failure or a non-success response
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl VaultError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn storage(message: impl ToString) -> Self {
        Self::Storage(message.to_string())
    }

    pub fn transport(message: impl ToString) -> Self {
        Self::Transport(message.to_string())
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<mongodb::error::Error> for VaultError {
    fn from(err: mongodb::error::Error) -> Self {
        Self::storage(err)
    }
}

impl From<reqwest::Error> for VaultError {
    fn from(err: reqwest::Error) -> Self {
        Self::transport(err)
    }
}
