//! Credential Commands
//!
//! Add, delete, refresh and generate. Every successful mutation re-fetches
//! the full list; failures are logged and leave the list as it was.

use tracing::{error, info};

use crate::commands::CommandResponse;
use crate::ui::VaultSession;
use crate::vault::generate_password as generate;

/// Replaces the in-memory list with the server's
pub async fn refresh(session: &mut VaultSession) -> CommandResponse {
    match session.api.list().await {
        Ok(records) => {
            info!(count = records.len(), "fetched passwords");
            session.state.replace_records(records);
            CommandResponse::ok()
        }
        Err(e) => {
            error!(error = %e, "Error fetching passwords");
            CommandResponse::failed("Error fetching passwords")
        }
    }
}

/// Saves the form as a new credential
///
/// Does nothing unless site, username and password are all filled in.
pub async fn add_password(session: &mut VaultSession) -> CommandResponse {
    if !session.state.form.is_complete() {
        return CommandResponse::failed("Site, username and password are required");
    }

    let input = session.state.form.to_new_credential();
    match session.api.create(&input).await {
        Ok(record) => {
            info!(id = %record.id, "password added");
            let refreshed = refresh(session).await;
            session.state.form.clear();
            refreshed
        }
        Err(e) => {
            error!(error = %e, "Error adding password");
            CommandResponse::failed("Error adding password")
        }
    }
}

pub async fn delete_password(session: &mut VaultSession, id: &str) -> CommandResponse {
    match session.api.delete(id).await {
        Ok(()) => {
            info!(id, "password deleted");
            refresh(session).await
        }
        Err(e) => {
            error!(error = %e, "Error deleting password");
            CommandResponse::failed("Error deleting password")
        }
    }
}

/// Fills the form's password field; nothing is saved until `add_password`
pub fn generate_password(session: &mut VaultSession) -> CommandResponse {
    session.state.form.password = generate();
    CommandResponse::ok()
}
