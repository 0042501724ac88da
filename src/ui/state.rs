//! Client State
//!
//! Everything the vault UI holds in memory. The record list is a disposable
//! cache of the store and is replaced wholesale after each mutation.

use crate::store::{CredentialRecord, NewCredential};
use crate::vault::RevealGate;

/// Cosmetic display mode, never persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Follows the terminal's background when it reports one
    ///
    /// `COLORFGBG` looks like `15;0`; the last field is the background colour.
    pub fn system_default() -> Self {
        Self::from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref())
    }

    pub fn from_colorfgbg(value: Option<&str>) -> Self {
        let background = value
            .and_then(|v| v.rsplit(';').next())
            .and_then(|bg| bg.trim().parse::<u8>().ok());

        match background {
            Some(0..=6) | Some(8) => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Values typed into the add-password form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialForm {
    pub site: String,
    pub username: String,
    pub password: String,
}

impl CredentialForm {
    pub fn is_complete(&self) -> bool {
        !self.site.is_empty() && !self.username.is_empty() && !self.password.is_empty()
    }

    pub fn to_new_credential(&self) -> NewCredential {
        NewCredential::new(&self.site, &self.username, &self.password)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone)]
pub struct ClientState {
    pub records: Vec<CredentialRecord>,
    pub form: CredentialForm,
    pub gate: RevealGate,
    pub theme: Theme,
    /// One-line feedback shown under the view (alerts, failures)
    pub status: Option<String>,
}

impl ClientState {
    pub fn new(master_password: Option<String>, theme: Theme) -> Self {
        Self {
            records: Vec::new(),
            form: CredentialForm::default(),
            gate: RevealGate::new(master_password),
            theme,
            status: None,
        }
    }

    pub fn replace_records(&mut self, records: Vec<CredentialRecord>) {
        self.records = records;
    }

    /// Resolves a 1-based list position to a record id
    pub fn id_at(&self, position: usize) -> Option<&str> {
        position
            .checked_sub(1)
            .and_then(|index| self.records.get(index))
            .map(|record| record.id.as_str())
    }

    pub fn record(&self, id: &str) -> Option<&CredentialRecord> {
        self.records.iter().find(|record| record.id == id)
    }
}
