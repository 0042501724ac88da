//! Text rendering of the client state.

use std::fmt::Write;

use crate::ui::state::{ClientState, Theme};

pub const MASK: &str = "••••••••";

const RESET: &str = "\x1b[0m";

struct Palette {
    heading: &'static str,
    muted: &'static str,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                heading: "\x1b[1;34m",
                muted: "\x1b[90m",
            },
            Theme::Dark => Self {
                heading: "\x1b[1;96m",
                muted: "\x1b[37m",
            },
        }
    }
}

/// Button label offers the opposite mode
fn theme_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "Dark Mode",
        Theme::Dark => "Light Mode",
    }
}

/// Renders the whole screen; `styled` adds ANSI colours for the theme
pub fn render(state: &ClientState, styled: bool) -> String {
    let palette = Palette::for_theme(state.theme);
    let heading = |text: &str| {
        if styled {
            format!("{}{}{}", palette.heading, text, RESET)
        } else {
            text.to_string()
        }
    };
    let muted = |text: &str| {
        if styled {
            format!("{}{}{}", palette.muted, text, RESET)
        } else {
            text.to_string()
        }
    };

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}    [{}]",
        heading("Password Manager"),
        theme_label(state.theme)
    );
    out.push('\n');

    let _ = writeln!(out, "{}", heading("Add New Password"));
    let form = &state.form;
    let _ = writeln!(out, "  Site:     {}", form.site);
    let _ = writeln!(out, "  Username: {}", form.username);
    let _ = writeln!(out, "  Password: {}", "•".repeat(form.password.chars().count()));
    out.push('\n');

    let _ = writeln!(out, "{}", heading("Saved Passwords"));
    if state.records.is_empty() {
        let _ = writeln!(out, "  {}", muted("(none)"));
    }
    for (index, record) in state.records.iter().enumerate() {
        let shown = if state.gate.is_revealed(&record.id) {
            record.password.as_str()
        } else {
            MASK
        };
        let _ = writeln!(out, "  {}. {}", index + 1, record.site);
        let _ = writeln!(out, "     Username: {}", record.username);
        let _ = writeln!(out, "     Password: {}", shown);
    }

    if state.gate.is_dialog_open() {
        out.push('\n');
        let site = state
            .gate
            .pending()
            .and_then(|id| state.record(id))
            .map(|record| record.site.as_str())
            .unwrap_or("");
        let _ = writeln!(out, "{} {}", heading("Enter Master Password"), muted(site));
        let _ = writeln!(out, "  {}", muted("(empty line to cancel)"));
    }

    if let Some(status) = &state.status {
        out.push('\n');
        let _ = writeln!(out, "! {}", status);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::CredentialRecord;

    fn state_with_record() -> ClientState {
        let mut state = ClientState::new(Some("m123".to_string()), Theme::Light);
        state.replace_records(vec![CredentialRecord {
            id: "r1".into(),
            site: "example.com".into(),
            username: "alice".into(),
            password: "hunter2".into(),
        }]);
        state
    }

    #[test]
    fn hidden_passwords_are_masked() {
        let state = state_with_record();
        let screen = render(&state, false);

        assert!(screen.contains("1. example.com"));
        assert!(screen.contains("Username: alice"));
        assert!(screen.contains(MASK));
        assert!(!screen.contains("hunter2"));
        assert!(screen.contains("[Dark Mode]"));
    }

    #[test]
    fn revealed_password_shows_the_literal_value() {
        let mut state = state_with_record();
        state.gate.toggle("r1");
        assert!(render(&state, false).contains("Enter Master Password example.com"));

        state.gate.set_input("m123");
        state.gate.submit().unwrap();
        let screen = render(&state, false);

        assert!(screen.contains("Password: hunter2"));
        assert!(!screen.contains("Enter Master Password"));
    }

    #[test]
    fn form_password_is_masked_per_character() {
        let mut state = state_with_record();
        state.form.password = "abc".into();
        assert!(render(&state, false).contains("  Password: •••\n"));
    }

    #[test]
    fn dark_theme_changes_label_and_colours() {
        let mut state = state_with_record();
        state.theme = Theme::Dark;
        let screen = render(&state, true);

        assert!(screen.contains("[Light Mode]"));
        assert!(screen.contains("\x1b[1;96m"));
    }
}
