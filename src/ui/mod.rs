//! Vault UI
//!
//! Client state, its text rendering and the terminal loop that drives it.

pub mod state;
pub mod terminal;
pub mod view;

use crate::client::ApiClient;
use crate::config::VaultConfig;

pub use state::{ClientState, CredentialForm, Theme};

/// API client plus the state it keeps in sync
pub struct VaultSession {
    pub api: ApiClient,
    pub state: ClientState,
}

impl VaultSession {
    pub fn new(api: ApiClient, master_password: Option<String>, theme: Theme) -> Self {
        Self {
            api,
            state: ClientState::new(master_password, theme),
        }
    }

    pub fn from_config(config: &VaultConfig) -> Self {
        Self::new(
            ApiClient::new(config.api_base()),
            config.master_password.clone(),
            Theme::system_default(),
        )
    }
}
