//! Sidebar: brand, navigation radio, login/logout hint and version footer

use avellon_app::SessionState;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

const BRAND: &str = "AVELLON";
const TAGLINE: &str = "The Architecture of Dominion";
const VERSION_LINES: [&str; 3] = [
    "© 2026 AVELLON INTELLIGENCE",
    "Ver: 21.4.0-ENT",
    "Status: OPERATIONAL",
];

pub struct Sidebar<'a> {
    session: &'a SessionState,
    focused: bool,
}

impl<'a> Sidebar<'a> {
    pub fn new(session: &'a SessionState, focused: bool) -> Self {
        Self { session, focused }
    }

    fn menu_lines(&self) -> Vec<Line<'static>> {
        let selected = self.session.menu_selection();
        self.session
            .menu()
            .iter()
            .map(|page| {
                if *page == selected {
                    let style = if self.focused {
                        styles::focused_selected()
                    } else {
                        styles::accent_bold()
                    };
                    Line::from(Span::styled(format!(" (•) {} ", page.label()), style))
                } else {
                    Line::from(Span::styled(
                        format!(" ( ) {}", page.label()),
                        styles::text_secondary(),
                    ))
                }
            })
            .collect()
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).style(Style::default().bg(palette::SIDEBAR_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let [top, bottom] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(VERSION_LINES.len() as u16),
        ])
        .areas(inner);

        let section = if self.session.authenticated {
            "SECURE CONSOLE"
        } else {
            "NAVIGATION"
        };

        let mut lines = vec![
            Line::from(Span::styled(BRAND, styles::accent_bold())),
            Line::from(Span::styled(TAGLINE, styles::text_muted())),
            Line::default(),
            Line::from(Span::styled(section, styles::heading())),
        ];
        lines.extend(self.menu_lines());
        lines.push(Line::default());

        if self.session.authenticated {
            if let Some(role) = self.session.role.as_deref() {
                lines.push(Line::from(Span::styled(
                    format!("Role: {}", role),
                    styles::text_secondary(),
                )));
            }
            lines.push(Line::from(vec![
                Span::styled("[o]", styles::accent()),
                Span::styled(" Log Out", styles::text_primary()),
            ]));
        } else {
            lines.push(Line::from(vec![
                Span::styled("[l]", styles::accent()),
                Span::styled(" Secure Login", styles::text_primary()),
            ]));
        }

        Paragraph::new(lines).render(top, buf);

        let version: Vec<Line> = VERSION_LINES
            .iter()
            .map(|l| Line::from(Span::styled(*l, styles::text_muted())))
            .collect();
        Paragraph::new(version).render(bottom, buf);
    }
}
