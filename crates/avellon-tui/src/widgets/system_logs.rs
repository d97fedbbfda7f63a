//! System audit log table

use avellon_app::view::SystemLogsView;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    widgets::{Row, Table, Widget},
};

use crate::theme::styles;

const HEADER: [&str; 4] = ["Timestamp", "User", "Action", "IP"];

pub struct SystemLogsPage<'a> {
    view: &'a SystemLogsView,
    focused: bool,
}

impl<'a> SystemLogsPage<'a> {
    pub fn new(view: &'a SystemLogsView, focused: bool) -> Self {
        Self { view, focused }
    }
}

impl Widget for SystemLogsPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = self.view.rows.iter().map(|entry| {
            Row::new(vec![
                entry.timestamp.as_str(),
                entry.user.as_str(),
                entry.action.as_str(),
                entry.ip.as_str(),
            ])
            .style(styles::text_primary())
        });

        let widths = [
            Constraint::Length(12),
            Constraint::Length(14),
            Constraint::Min(22),
            Constraint::Length(14),
        ];

        Table::new(rows, widths)
            .header(
                Row::new(HEADER)
                    .style(styles::accent_bold())
                    .bottom_margin(1),
            )
            .column_spacing(2)
            .block(styles::titled_block(self.view.title, self.focused))
            .render(area, buf);
    }
}
