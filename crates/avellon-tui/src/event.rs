//! Terminal event polling

use std::time::Duration;

use avellon_app::message::Message;
use avellon_app::InputKey;
use avellon_core::prelude::*;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        _ => None,
    }
}

/// Poll for terminal events, producing a tick when `timeout` elapses
pub fn poll(timeout: Duration) -> Result<Option<Message>> {
    if !event::poll(timeout)? {
        return Ok(Some(Message::Tick));
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            Ok(key_event_to_input(key).map(Message::Key))
        }
        // Resize needs a redraw with the cached view; anything else is ignored
        Event::Resize(..) => Ok(Some(Message::Tick)),
        _ => Ok(None),
    }
}
