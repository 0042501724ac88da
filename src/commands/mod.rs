//! UI commands
//!
//! Operations the vault UI invokes on a `VaultSession`. Each returns a
//! `CommandResponse` the front end turns into a status line.

pub mod credentials;
pub mod theme;
pub mod vault;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandResponse {
    pub success: bool,
    pub error: Option<String>,
}

impl CommandResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}
