//! Headless mode runner - command loop without the TUI
//!
//! Drives the same TEA update loop as the terminal UI, but takes line
//! commands from stdin and emits a `page_rendered` event after each one.

use std::io::BufRead;

use avellon_app::config::Settings;
use avellon_app::message::Message;
use avellon_app::process::process_message;
use avellon_app::{AppState, Router};
use avellon_core::prelude::*;

use super::command::HeadlessCommand;
use super::HeadlessEvent;

/// Command-line driven setup applied before stdin is read
#[derive(Debug, Clone, Default)]
pub struct HeadlessOptions {
    /// Log in with these credentials first
    pub credentials: Option<(String, String)>,
    /// Page requested after the optional login
    pub page: Option<String>,
}

/// Run in headless mode until stdin closes or `quit` is read
pub fn run_headless(settings: Settings, options: HeadlessOptions) -> Result<()> {
    info!("AVELLON console starting in HEADLESS mode");

    let mut state = AppState::with_settings(settings);
    HeadlessEvent::started(state.session().current_page).emit()?;

    if let Some((identity, keycode)) = options.credentials {
        apply(&mut state, HeadlessCommand::Login { identity, keycode })?;
    }
    if let Some(label) = options.page {
        apply(&mut state, HeadlessCommand::Page(label))?;
    }
    emit_view(&mut state)?;

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                HeadlessEvent::error(format!("Failed to read stdin: {}", e), true).emit()?;
                return Err(e.into());
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<HeadlessCommand>() {
            Ok(HeadlessCommand::Quit) => {
                info!("Stdin: quit requested");
                process_message(&mut state, Message::Quit);
                break;
            }
            Ok(command) => {
                debug!("Stdin: {:?}", command);
                apply(&mut state, command)?;
                emit_view(&mut state)?;
            }
            Err(e) if e.is_recoverable() => {
                warn!("{}", e);
                HeadlessEvent::error(e.to_string(), false).emit()?;
            }
            Err(e) => {
                HeadlessEvent::error(e.to_string(), true).emit()?;
                return Err(e);
            }
        }
    }

    HeadlessEvent::stopped().emit()?;
    info!("AVELLON headless mode exiting");
    Ok(())
}

/// Run one command through the update loop
pub fn apply(state: &mut AppState, command: HeadlessCommand) -> Result<()> {
    match command {
        HeadlessCommand::Page(label) => {
            process_message(state, Message::RequestPage(Router::page_for_label(&label)));
        }
        HeadlessCommand::Select(label) => {
            let page = Router::page_for_label(&label);
            let message = if page.is_secure() {
                Message::SelectSecure(page)
            } else {
                Message::SelectPublic(page)
            };
            process_message(state, message);
        }
        HeadlessCommand::Login { identity, keycode } => {
            process_message(state, Message::OpenLogin);
            state.widgets.login.identity = identity;
            state.widgets.login.keycode = keycode;
            process_message(state, Message::SubmitLogin);

            let session = state.session();
            if session.authenticated {
                let role = session.role.as_deref().unwrap_or_default();
                HeadlessEvent::login_succeeded(role).emit()?;
            } else {
                let error = state.widgets.login.error.as_deref().unwrap_or_default();
                HeadlessEvent::login_rejected(error).emit()?;
            }
        }
        HeadlessCommand::Logout => {
            let was_authenticated = state.session().authenticated;
            process_message(state, Message::Logout);
            if was_authenticated {
                HeadlessEvent::logged_out().emit()?;
            }
        }
        HeadlessCommand::Show => state.invalidate_view(),
        HeadlessCommand::Quit => process_message(state, Message::Quit),
    }
    Ok(())
}

fn emit_view(state: &mut AppState) -> Result<()> {
    let view = state.page_view().clone();
    HeadlessEvent::page_rendered(view).emit()
}
