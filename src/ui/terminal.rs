//! Terminal front end
//!
//! Reads one command per line, applies it through the command layer and
//! re-renders. While the master password dialog is open the whole line is
//! the submitted password and an empty line cancels.

use std::io::IsTerminal;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::commands::{credentials, theme, vault, CommandResponse};
use crate::error::VaultResult;
use crate::ui::view::render;
use crate::ui::VaultSession;
use crate::vault::RevealState;

pub const HELP: &str = "\
Commands:
  site <text>     set the site field
  user <text>     set the username field
  pass <text>     set the password field
  gen             generate a password into the form
  add             save the form as a new password
  show <n>        reveal password n (asks for the master password)
  hide <n>        mask password n
  toggle <n>      show or hide password n
  del <n>         delete password n
  theme           switch light/dark mode
  refresh         reload the list from the server
  help            show this help
  quit            exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    SetSite(String),
    SetUsername(String),
    SetPassword(String),
    Generate,
    Add,
    Show(usize),
    Hide(usize),
    Toggle(usize),
    Delete(usize),
    Theme,
    Refresh,
    Help,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Continue,
    Quit,
}

fn parse_position(arg: &str) -> Result<usize, String> {
    arg.trim()
        .parse::<usize>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| format!("Expected a list number, got '{}'", arg.trim()))
}

pub fn parse_command(line: &str) -> Result<UiCommand, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "site" => Ok(UiCommand::SetSite(rest.to_string())),
        "user" | "username" => Ok(UiCommand::SetUsername(rest.to_string())),
        "pass" | "password" => Ok(UiCommand::SetPassword(rest.to_string())),
        "gen" | "generate" => Ok(UiCommand::Generate),
        "add" => Ok(UiCommand::Add),
        "show" => parse_position(rest).map(UiCommand::Show),
        "hide" => parse_position(rest).map(UiCommand::Hide),
        "toggle" => parse_position(rest).map(UiCommand::Toggle),
        "del" | "delete" | "rm" => parse_position(rest).map(UiCommand::Delete),
        "theme" => Ok(UiCommand::Theme),
        "refresh" | "ls" => Ok(UiCommand::Refresh),
        "help" | "?" => Ok(UiCommand::Help),
        "quit" | "exit" | "q" => Ok(UiCommand::Quit),
        "" => Err("Type 'help' for commands".to_string()),
        other => Err(format!("Unknown command '{}'; type 'help'", other)),
    }
}

fn apply_response(session: &mut VaultSession, response: CommandResponse) {
    session.state.status = response.error;
}

fn set_visibility(
    session: &mut VaultSession,
    position: usize,
    apply: fn(&mut VaultSession, &str) -> RevealState,
) -> CommandResponse {
    let id = session.state.id_at(position).map(str::to_string);
    match id {
        Some(id) => {
            apply(session, &id);
            CommandResponse::ok()
        }
        None => CommandResponse::failed(format!("No password at position {}", position)),
    }
}

/// Applies one input line to the session
pub async fn handle_line(session: &mut VaultSession, line: &str) -> LineOutcome {
    if session.state.gate.is_dialog_open() {
        let response = if line.is_empty() {
            vault::cancel_master_password(session)
        } else {
            vault::submit_master_password(session, line)
        };
        apply_response(session, response);
        return LineOutcome::Continue;
    }

    let command = match parse_command(line) {
        Ok(command) => command,
        Err(message) => {
            session.state.status = Some(message);
            return LineOutcome::Continue;
        }
    };

    let response = match command {
        UiCommand::SetSite(value) => {
            session.state.form.site = value;
            CommandResponse::ok()
        }
        UiCommand::SetUsername(value) => {
            session.state.form.username = value;
            CommandResponse::ok()
        }
        UiCommand::SetPassword(value) => {
            session.state.form.password = value;
            CommandResponse::ok()
        }
        UiCommand::Generate => credentials::generate_password(session),
        UiCommand::Add => credentials::add_password(session).await,
        UiCommand::Show(position) => set_visibility(session, position, vault::request_reveal),
        UiCommand::Hide(position) => set_visibility(session, position, vault::hide_password),
        UiCommand::Toggle(position) => set_visibility(session, position, vault::toggle_visibility),
        UiCommand::Delete(position) => {
            let id = session.state.id_at(position).map(str::to_string);
            match id {
                Some(id) => credentials::delete_password(session, &id).await,
                None => CommandResponse::failed(format!("No password at position {}", position)),
            }
        }
        UiCommand::Theme => theme::toggle_theme(session),
        UiCommand::Refresh => credentials::refresh(session).await,
        UiCommand::Help => {
            session.state.status = Some(HELP.to_string());
            return LineOutcome::Continue;
        }
        UiCommand::Quit => return LineOutcome::Quit,
    };

    apply_response(session, response);
    LineOutcome::Continue
}

/// Runs the interactive loop until `quit` or end of input
pub async fn run(mut session: VaultSession) -> VaultResult<()> {
    let styled = std::io::stdout().is_terminal();
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let response = credentials::refresh(&mut session).await;
    apply_response(&mut session, response);

    loop {
        stdout.write_all(render(&session.state, styled).as_bytes()).await?;
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        if handle_line(&mut session, line.trim_end_matches(['\r', '\n'])).await == LineOutcome::Quit {
            break;
        }
        stdout.write_all(b"\n").await?;
    }

    Ok(())
}
