//! Theme command.

use crate::commands::CommandResponse;
use crate::ui::VaultSession;

pub fn toggle_theme(session: &mut VaultSession) -> CommandResponse {
    session.state.theme = session.state.theme.toggled();
    CommandResponse::ok()
}
