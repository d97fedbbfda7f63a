//! Key event handlers for sidebar and page focus

use avellon_core::PageId;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus};

/// Convert key events to messages based on focus and page
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit with Ctrl+C from anywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    let page = state.rendered_page();
    if state.focus == Focus::Content && state.widgets.has_text_focus(page) {
        return handle_key_text_input(page, key);
    }

    match state.focus {
        Focus::Sidebar => handle_key_sidebar(state, page, key),
        Focus::Content => handle_key_content(state, page, key),
    }
}

/// Keys shared by both panes when no text field is capturing input
fn handle_key_global(state: &AppState, page: PageId, key: InputKey) -> Option<Message> {
    let authenticated = state.session().authenticated;
    match key {
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Esc if page == PageId::Login => Some(Message::CancelLogin),
        InputKey::Esc => Some(Message::Quit),
        InputKey::Tab | InputKey::BackTab => Some(Message::ToggleFocus),
        InputKey::Char('l') if !authenticated => Some(Message::OpenLogin),
        InputKey::Char('o') if authenticated => Some(Message::Logout),
        InputKey::Char('b') if page == PageId::Home => Some(Message::RequestPage(PageId::Contact)),
        _ => None,
    }
}

fn handle_key_sidebar(state: &AppState, page: PageId, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::SidebarPrev),
        InputKey::Down | InputKey::Char('j') => Some(Message::SidebarNext),
        InputKey::Enter | InputKey::Right => Some(Message::FocusContent),
        _ => handle_key_global(state, page, key),
    }
}

fn handle_key_content(state: &AppState, page: PageId, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::FieldPrev),
        InputKey::Down | InputKey::Char('j') => Some(Message::FieldNext),
        InputKey::Left | InputKey::Char('h') => Some(Message::Adjust(-1)),
        InputKey::Right => Some(Message::Adjust(1)),
        InputKey::Enter | InputKey::Char(' ') => Some(Message::Activate),
        _ => handle_key_global(state, page, key),
    }
}

/// A text field has focus: printable keys are typed, not interpreted
fn handle_key_text_input(page: PageId, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(c) => Some(Message::InputChar(c)),
        InputKey::Backspace => Some(Message::InputBackspace),
        InputKey::Up | InputKey::BackTab => Some(Message::FieldPrev),
        InputKey::Down => Some(Message::FieldNext),
        InputKey::Enter => Some(Message::Activate),
        InputKey::Tab => Some(Message::ToggleFocus),
        InputKey::Esc if page == PageId::Login => Some(Message::CancelLogin),
        InputKey::Esc => Some(Message::FocusSidebar),
        _ => None,
    }
}
