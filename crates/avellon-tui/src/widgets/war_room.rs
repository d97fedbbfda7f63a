//! Global War Room: metrics, theater map and intelligence stream

use avellon_app::config::MapDetail;
use avellon_app::view::{Metric, WarRoomView};
use avellon_core::{IntelEvent, MapMarker, MapViewport};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Map, MapResolution},
        Paragraph, Widget, Wrap,
    },
};

use crate::theme::{palette, styles};

/// Marker radii are in map pixels; the canvas works in degrees.
const DEGREES_PER_RADIUS_UNIT: f64 = 0.5;

const METRICS_HEIGHT: u16 = 4;

pub struct WarRoomPage<'a> {
    view: &'a WarRoomView,
    focused: bool,
    detail: MapDetail,
}

impl<'a> WarRoomPage<'a> {
    pub fn new(view: &'a WarRoomView, focused: bool, detail: MapDetail) -> Self {
        Self {
            view,
            focused,
            detail,
        }
    }
}

impl Widget for WarRoomPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [metrics_area, body] =
            Layout::vertical([Constraint::Length(METRICS_HEIGHT), Constraint::Min(0)]).areas(area);
        let [map_area, feed_area] =
            Layout::horizontal([Constraint::Percentage(68), Constraint::Percentage(32)])
                .areas(body);

        render_metrics(&self.view.metrics, metrics_area, buf);
        TheaterMap {
            markers: &self.view.markers,
            detail: self.detail,
            focused: self.focused,
        }
        .render(map_area, buf);
        render_feed(&self.view.feed, feed_area, buf);
    }
}

fn render_metrics(metrics: &[Metric], area: Rect, buf: &mut Buffer) {
    let share = Constraint::Ratio(1, metrics.len().max(1) as u32);
    let cells = Layout::horizontal(vec![share; metrics.len()]).split(area);

    for (metric, cell) in metrics.iter().zip(cells.iter()) {
        let mut value = vec![Span::styled(metric.value.as_str(), styles::heading())];
        if let Some(delta) = metric.delta.as_deref() {
            value.push(Span::raw("  "));
            value.push(Span::styled(delta, styles::accent()));
        }
        Paragraph::new(vec![
            Line::from(Span::styled(metric.label.to_uppercase(), styles::text_muted())),
            Line::from(value),
        ])
        .block(styles::glass_block(false))
        .render(*cell, buf);
    }
}

struct TheaterMap<'a> {
    markers: &'a [MapMarker],
    detail: MapDetail,
    focused: bool,
}

impl Widget for TheaterMap<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let resolution = match self.detail {
            MapDetail::High => MapResolution::High,
            MapDetail::Low => MapResolution::Low,
        };

        let viewport = MapViewport::theater();

        Canvas::default()
            .block(styles::titled_block("OPERATIONAL THEATER", self.focused))
            .marker(Marker::Braille)
            .background_color(palette::DEEPEST_BG)
            .x_bounds(viewport.lon_bounds)
            .y_bounds(viewport.lat_bounds)
            .paint(|ctx| {
                ctx.draw(&Map {
                    resolution,
                    color: palette::COASTLINE,
                });
                ctx.layer();
                for marker in self.markers {
                    ctx.draw(&Circle {
                        x: marker.lon,
                        y: marker.lat,
                        radius: marker.radius * DEGREES_PER_RADIUS_UNIT,
                        color: styles::tier_color(marker.tier),
                    });
                }
            })
            .render(area, buf);
    }
}

fn feed_lines(event: &IntelEvent) -> Vec<Line<'_>> {
    vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", event.severity.label()),
                styles::tier_badge(event.severity),
            ),
            Span::styled(format!("  {}", event.age), styles::text_muted()),
        ]),
        Line::from(Span::styled(event.title.as_str(), styles::heading())),
        Line::from(Span::styled(
            format!("{} • {}", event.location, event.category),
            styles::text_secondary(),
        )),
        Line::from(Span::styled(
            format!("Conf: {}% | ID: {}", event.confidence, event.id),
            styles::text_muted(),
        )),
        Line::default(),
    ]
}

fn render_feed(feed: &[IntelEvent], area: Rect, buf: &mut Buffer) {
    let lines: Vec<Line> = feed.iter().flat_map(feed_lines).collect();
    Paragraph::new(lines)
        .block(styles::titled_block("INTELLIGENCE STREAM", false))
        .wrap(Wrap { trim: false })
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use avellon_app::view::render_war_room;
    use avellon_core::FixtureProvider;

    #[test]
    fn test_war_room_panels() {
        let mut term = TestTerminal::with_size(140, 40);
        let view = render_war_room(&FixtureProvider::new());
        term.render_widget(WarRoomPage::new(&view, false, MapDetail::Low), term.area());

        assert!(term.buffer_contains("GLOBAL RISK INDEX"));
        assert!(term.buffer_contains("72.4"));
        assert!(term.buffer_contains("+1.2%"));
        assert!(term.buffer_contains("OPERATIONAL THEATER"));
        assert!(term.buffer_contains("INTELLIGENCE STREAM"));
    }

    #[test]
    fn test_feed_items_show_badge_and_provenance() {
        let mut term = TestTerminal::with_size(140, 40);
        let view = render_war_room(&FixtureProvider::new());
        term.render_widget(WarRoomPage::new(&view, false, MapDetail::High), term.area());

        assert!(term.buffer_contains(" CRITICAL "));
        assert!(term.buffer_contains("Unverified Drone Activity"));
        assert!(term.buffer_contains("Red Sea Sector 4 • Conflict"));
        assert!(term.buffer_contains("Conf: 94% | ID: EVT-902"));
    }

    #[test]
    fn test_critical_marker_is_drawn_in_tier_color() {
        let mut term = TestTerminal::with_size(140, 40);
        let view = render_war_room(&FixtureProvider::new());
        term.render_widget(WarRoomPage::new(&view, false, MapDetail::Low), term.area());

        let buffer = term.buffer();
        let red_cells = buffer
            .content()
            .iter()
            .filter(|cell| cell.fg == palette::TIER_CRITICAL)
            .count();
        assert!(red_cells > 0);
    }
}
