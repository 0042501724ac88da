//! Reveal Gate
//!
//! Master password check guarding the display of stored passwords.
//! The comparison happens entirely client-side against a configured value;
//! it gates display only, never network access.

use std::collections::HashSet;

use crate::error::{VaultError, VaultResult};

/// Visibility of one record's password
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    AwaitingMasterPassword,
    Revealed,
}

/// Tracks revealed records and the master password dialog
#[derive(Debug, Clone)]
pub struct RevealGate {
    master_password: Option<String>,
    revealed: HashSet<String>,
    pending: Option<String>,
    dialog_open: bool,
    input: String,
}

impl RevealGate {
    /// Creates a gate; with no master password every submission mismatches
    pub fn new(master_password: Option<String>) -> Self {
        Self {
            master_password,
            revealed: HashSet::new(),
            pending: None,
            dialog_open: false,
            input: String::new(),
        }
    }

    pub fn state(&self, id: &str) -> RevealState {
        if self.revealed.contains(id) {
            RevealState::Revealed
        } else if self.dialog_open && self.pending.as_deref() == Some(id) {
            RevealState::AwaitingMasterPassword
        } else {
            RevealState::Hidden
        }
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Hides a revealed record, or opens the dialog to reveal a hidden one
    pub fn toggle(&mut self, id: &str) -> RevealState {
        if self.is_revealed(id) {
            self.hide(id)
        } else {
            self.request_reveal(id)
        }
    }

    /// Opens the dialog for a hidden record; a revealed one stays as it is
    pub fn request_reveal(&mut self, id: &str) -> RevealState {
        if self.is_revealed(id) {
            return RevealState::Revealed;
        }

        self.pending = Some(id.to_string());
        self.dialog_open = true;
        RevealState::AwaitingMasterPassword
    }

    /// Clears a reveal. Never opens the dialog.
    pub fn hide(&mut self, id: &str) -> RevealState {
        self.revealed.remove(id);
        self.state(id)
    }

    /// Checks the current input against the master password
    ///
    /// On a match the pending record is revealed, the dialog closes and the
    /// input is cleared; its id is returned. On a mismatch nothing changes.
    pub fn submit(&mut self) -> VaultResult<String> {
        let matches = self
            .master_password
            .as_deref()
            .is_some_and(|master| master == self.input);

        if !self.dialog_open || !matches {
            return Err(VaultError::AuthorizationMismatch);
        }

        let id = self.pending.take().ok_or(VaultError::AuthorizationMismatch)?;
        self.revealed.insert(id.clone());
        self.dialog_open = false;
        self.input.clear();
        Ok(id)
    }

    /// Closes the dialog without touching any reveal state
    pub fn cancel(&mut self) {
        self.dialog_open = false;
        self.pending = None;
    }
}
