//! Secure console login box

use avellon_app::view::LoginView;
use avellon_app::widget_state::LoginField;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    text::{Line, Span},
    widgets::{Padding, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::text;
use crate::theme::styles;

/// Border + padding + slack around the widest line.
const BOX_CHROME: u16 = 8;
const BOX_HEIGHT: u16 = 14;

pub struct LoginPage<'a> {
    view: &'a LoginView,
    focused: bool,
}

impl<'a> LoginPage<'a> {
    pub fn new(view: &'a LoginView, focused: bool) -> Self {
        Self { view, focused }
    }

    fn field_focused(&self, field: LoginField) -> bool {
        self.focused && self.view.focus == field
    }

    fn box_width(&self) -> u16 {
        let widest = self.view.heading.width().max(self.view.subheading.width());
        widest as u16 + BOX_CHROME
    }
}

impl Widget for LoginPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let view = self.view;

        let [column] = Layout::horizontal([Constraint::Length(self.box_width())])
            .flex(Flex::Center)
            .areas(area);
        let [centered] = Layout::vertical([Constraint::Length(BOX_HEIGHT)])
            .flex(Flex::Center)
            .areas(column);

        let mut lines = vec![
            Line::from(Span::styled(view.heading, styles::accent_bold())).centered(),
            text::caption(view.subheading).centered(),
            Line::default(),
            text::input(
                "Identity",
                &view.identity,
                self.field_focused(LoginField::Identity),
            ),
            Line::default(),
            text::input(
                "Keycode",
                &view.masked_keycode,
                self.field_focused(LoginField::Keycode),
            ),
            Line::default(),
            text::button("Authenticate", self.field_focused(LoginField::Authenticate)).centered(),
        ];
        if let Some(error) = view.error.as_deref() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(error, styles::error())).centered());
        }

        Paragraph::new(lines)
            .block(styles::glass_block(self.focused).padding(Padding::new(2, 2, 1, 1)))
            .wrap(Wrap { trim: false })
            .render(centered, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use avellon_app::view::render_login;
    use avellon_app::widget_state::LoginForm;

    #[test]
    fn test_login_masks_keycode() {
        let mut term = TestTerminal::new();
        let form = LoginForm {
            identity: "ana".to_string(),
            keycode: "1234".to_string(),
            focus: LoginField::Keycode,
            error: None,
        };
        let view = render_login(&form);
        term.render_widget(LoginPage::new(&view, true), term.area());

        assert!(term.buffer_contains("AVELLON SECURE CONSOLE"));
        assert!(term.buffer_contains("[ana]"));
        assert!(term.buffer_contains("[••••_]"));
        assert!(!term.buffer_contains("1234"));
        assert!(term.buffer_contains("[ AUTHENTICATE ]"));
    }

    #[test]
    fn test_login_shows_error() {
        let mut term = TestTerminal::new();
        let form = LoginForm {
            error: Some("Invalid Credentials. Attempt Logged.".to_string()),
            ..Default::default()
        };
        let view = render_login(&form);
        term.render_widget(LoginPage::new(&view, false), term.area());

        assert!(term.buffer_contains("Invalid Credentials. Attempt Logged."));
    }
}
