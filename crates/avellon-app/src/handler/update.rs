//! Main update function - handles state transitions (TEA pattern)

use avellon_core::prelude::*;
use avellon_core::PageId;

use crate::message::Message;
use crate::state::{AppPhase, AppState, Focus};
use crate::widget_state::step_index;

use super::{controls, keys::handle_key, UpdateResult};

/// Process a message and update state
/// Returns an optional follow-up message
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    // Ticks never change what is on screen
    if message == Message::Tick {
        return UpdateResult::none();
    }

    let page_before = state.session().current_page;
    state.invalidate_view();

    let result = dispatch(state, message);

    if state.session().current_page != page_before {
        state.widgets.notice = None;
    }
    result
}

fn dispatch(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Tick => UpdateResult::none(),

        Message::Quit => {
            info!("Quit requested");
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        // ─────────────────────────────────────────────────────────
        // Sidebar Messages
        // ─────────────────────────────────────────────────────────
        Message::SidebarPrev => handle_sidebar_step(state, -1),
        Message::SidebarNext => handle_sidebar_step(state, 1),

        Message::SelectPublic(page) => {
            state.controller.select_public_item(page);
            UpdateResult::none()
        }

        Message::SelectSecure(page) => {
            state.controller.select_secure_item(page);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Session Messages
        // ─────────────────────────────────────────────────────────
        Message::RequestPage(page) => {
            state.controller.request_page(page);
            UpdateResult::none()
        }

        Message::OpenLogin => {
            if state.session().authenticated {
                debug!("Already authenticated, ignoring login request");
                return UpdateResult::none();
            }
            state.widgets.login.clear();
            state.controller.request_page(PageId::Login);
            state.focus = Focus::Content;
            UpdateResult::none()
        }

        Message::CancelLogin => {
            state.widgets.login.clear();
            let back_to = state.session().menu_selection();
            state.controller.request_page(back_to);
            state.focus = Focus::Sidebar;
            UpdateResult::none()
        }

        Message::SubmitLogin => handle_submit_login(state),

        Message::Logout => {
            state.controller.logout();
            state.widgets.login.clear();
            // Public radio remounts on its default entry
            state.controller.select_public_item(PageId::Home);
            state.focus = Focus::Sidebar;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Page Control Messages
        // ─────────────────────────────────────────────────────────
        Message::ToggleFocus => {
            state.focus = state.focus.toggled();
            UpdateResult::none()
        }
        Message::FocusSidebar => {
            state.focus = Focus::Sidebar;
            UpdateResult::none()
        }
        Message::FocusContent => {
            state.focus = Focus::Content;
            UpdateResult::none()
        }

        Message::FieldPrev => controls::handle_field_step(state, -1),
        Message::FieldNext => controls::handle_field_step(state, 1),
        Message::Adjust(delta) => controls::handle_adjust(state, delta),
        Message::Activate => controls::handle_activate(state),
        Message::InputChar(c) => controls::handle_input_char(state, c),
        Message::InputBackspace => controls::handle_backspace(state),
    }
}

/// Moving the radio cursor selects the entry under it
fn handle_sidebar_step(state: &mut AppState, delta: i32) -> UpdateResult {
    let session = state.session();
    let menu = session.menu();
    let current = session.menu_selection();
    let index = menu.iter().position(|p| *p == current).unwrap_or(0);
    let next = menu[step_index(index, menu.len(), delta)];

    if session.authenticated {
        UpdateResult::message(Message::SelectSecure(next))
    } else {
        UpdateResult::message(Message::SelectPublic(next))
    }
}

fn handle_submit_login(state: &mut AppState) -> UpdateResult {
    let identity = state.widgets.login.identity.clone();
    let keycode = state.widgets.login.keycode.clone();

    match state.controller.login(&identity, &keycode) {
        Ok(()) => {
            state.widgets.login.clear();
            // Secure radio mounts on War Room
            state.controller.select_secure_item(PageId::WarRoom);
            state.focus = Focus::Sidebar;
        }
        Err(e) => {
            state.widgets.login.error = Some(e.to_string());
        }
    }
    UpdateResult::none()
}
