//! Main render/view function (View in TEA pattern)

use avellon_app::{AppState, Focus};
use ratatui::{style::Style, widgets::Block, Frame};

use crate::theme::palette;
use crate::{layout, widgets};

#[cfg(test)]
mod tests;

/// Render the complete UI.
///
/// Takes `&mut` only so a stale page view can be re-rendered through the
/// router; nothing else in the state changes.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let ui = &state.settings.ui;
    let areas = layout::create(area, ui.show_footer);
    let map_detail = ui.map_resolution;
    let content_focused = state.focus == Focus::Content;

    frame.render_widget(
        widgets::Sidebar::new(state.session(), !content_focused),
        areas.sidebar,
    );

    let page = widgets::PageBody::new(state.page_view(), content_focused).map_detail(map_detail);
    frame.render_widget(page, areas.page);

    if let Some(footer) = areas.footer {
        frame.render_widget(widgets::Footer, footer);
    }
}
