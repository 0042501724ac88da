//! Reveal Commands
//!
//! Drive the master password dialog that guards password display.

use tracing::{info, warn};

use crate::commands::CommandResponse;
use crate::error::VaultError;
use crate::ui::VaultSession;
use crate::vault::RevealState;

/// Hides a revealed password, or opens the dialog for a hidden one
pub fn toggle_visibility(session: &mut VaultSession, id: &str) -> RevealState {
    session.state.gate.toggle(id)
}

/// Opens the dialog for a hidden password; no-op when already revealed
pub fn request_reveal(session: &mut VaultSession, id: &str) -> RevealState {
    session.state.gate.request_reveal(id)
}

pub fn hide_password(session: &mut VaultSession, id: &str) -> RevealState {
    session.state.gate.hide(id)
}

/// Submits `input` as the master password
///
/// A mismatch keeps the dialog open and reports the alert text.
pub fn submit_master_password(session: &mut VaultSession, input: &str) -> CommandResponse {
    let gate = &mut session.state.gate;
    gate.set_input(input);

    match gate.submit() {
        Ok(id) => {
            info!(id = %id, "password revealed");
            CommandResponse::ok()
        }
        Err(e @ VaultError::AuthorizationMismatch) => {
            warn!("master password mismatch");
            CommandResponse::failed(e.to_string())
        }
        Err(e) => CommandResponse::failed(e.to_string()),
    }
}

pub fn cancel_master_password(session: &mut VaultSession) -> CommandResponse {
    session.state.gate.cancel();
    CommandResponse::ok()
}
