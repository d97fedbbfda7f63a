//! Legal footer banner

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

const FOOTER_LINES: [&str; 3] = [
    "AVELLON INTELLIGENCE © 2026. All Rights Reserved.",
    "Restricted Access. Unauthorized use is a violation of federal law.",
    "Operating under ISO 27001 Information Security Standards.",
];

#[derive(Debug, Default, Clone, Copy)]
pub struct Footer;

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = FOOTER_LINES
            .iter()
            .map(|l| Line::from(Span::styled(*l, styles::text_muted())))
            .collect();
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
