//! Test utilities for TUI rendering verification
//!
//! Widgets and full frames are drawn into ratatui's `TestBackend` and the
//! resulting buffer is searched as plain text.

use avellon_app::config::Settings;
use avellon_app::message::Message;
use avellon_app::process::process_all;
use avellon_app::AppState;
use avellon_core::PageId;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Large enough for the war room and analytics pages
pub const WIDE_WIDTH: u16 = 140;
pub const WIDE_HEIGHT: u16 = 44;

/// `TestBackend` terminal with text-search helpers.
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// 80x24
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    /// 140x44, for full-screen renders
    pub fn wide() -> Self {
        Self::with_size(WIDE_WIDTH, WIDE_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame, e.g. `term.draw_with(|f| view(f, &mut state))`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        self.content().contains(text)
    }

    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        line_content(self.buffer(), line).contains(text)
    }

    /// Whole buffer, one terminal row per line
    pub fn content(&self) -> String {
        let buffer = self.buffer();
        (0..buffer.area.height)
            .map(|y| line_content(buffer, y) + "\n")
            .collect()
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn line_content(buffer: &Buffer, line: u16) -> String {
    if line >= buffer.area.height {
        return String::new();
    }
    (0..buffer.area.width)
        .map(|x| buffer[(x, line)].symbol())
        .collect()
}

/// State that has already logged in as `ana` and landed on the War Room
pub fn authenticated_state(settings: Settings) -> AppState {
    let mut state = AppState::with_settings(settings);
    state.widgets.login.identity = "ana".to_string();
    state.widgets.login.keycode = "1234".to_string();
    process_all(&mut state, [Message::RequestPage(PageId::Login), Message::SubmitLogin]);
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_terminal_sizes() {
        assert_eq!(TestTerminal::new().area(), Rect::new(0, 0, 80, 24));
        assert_eq!(TestTerminal::wide().area(), Rect::new(0, 0, 140, 44));
    }

    #[test]
    fn test_buffer_contains() {
        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("Hello World"), term.area());

        assert!(term.buffer_contains("Hello World"));
        assert!(!term.buffer_contains("Goodbye"));
        assert!(term.line_contains(0, "Hello"));
        assert!(!term.line_contains(1, "Hello"));
        assert!(!term.line_contains(99, "Hello"));
    }

    #[test]
    fn test_content_has_one_line_per_row() {
        let term = TestTerminal::with_size(5, 3);
        assert_eq!(term.content().lines().count(), 3);
    }

    #[test]
    fn test_authenticated_state_lands_on_war_room() {
        let state = authenticated_state(Settings::default());
        assert!(state.session().authenticated);
        assert_eq!(state.session().current_page, PageId::WarRoom);
    }
}
