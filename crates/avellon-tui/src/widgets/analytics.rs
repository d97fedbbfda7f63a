//! Strategic Analytics: risk velocity chart and dependency graph

use avellon_app::view::{AnalyticsTab, AnalyticsView};
use avellon_core::{SupplyChainGraph, TrendPoint, TREND_MAX, TREND_MIN};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Chart, Dataset, GraphType, Padding, Paragraph, Tabs, Widget},
};

use super::text;
use crate::theme::{palette, styles};

pub struct AnalyticsPage<'a> {
    view: &'a AnalyticsView,
    focused: bool,
}

impl<'a> AnalyticsPage<'a> {
    pub fn new(view: &'a AnalyticsView, focused: bool) -> Self {
        Self { view, focused }
    }
}

impl Widget for AnalyticsPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let view = self.view;
        let block = styles::glass_block(self.focused).padding(Padding::horizontal(1));
        let inner = block.inner(area);
        block.render(area, buf);

        let [title_area, tabs_area, body] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .areas(inner);

        text::title(view.title).render(title_area, buf);

        let selected = AnalyticsTab::ALL
            .iter()
            .position(|t| *t == view.selected_tab)
            .unwrap_or(0);
        Tabs::new(AnalyticsTab::ALL.iter().map(AnalyticsTab::label))
            .select(selected)
            .style(styles::text_secondary())
            .highlight_style(styles::control(self.focused).patch(styles::accent_bold()))
            .divider("│")
            .render(tabs_area, buf);

        match view.selected_tab {
            AnalyticsTab::RiskVelocity => RiskVelocityChart { trend: &view.trend }.render(body, buf),
            AnalyticsTab::DependencyGraph => {
                let [graph_area, caption_area] =
                    Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(body);
                graph_lines(&view.graph).render(graph_area, buf);
                Line::from(Span::styled(view.critical_caption.as_str(), styles::error()))
                    .render(caption_area, buf);
            }
        }
    }
}

struct RiskVelocityChart<'a> {
    trend: &'a [TrendPoint],
}

impl Widget for RiskVelocityChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let points: Vec<(f64, f64)> = self
            .trend
            .iter()
            .enumerate()
            .map(|(day, p)| (day as f64, p.score))
            .collect();
        let last_day = points.len().saturating_sub(1) as f64;

        let date_label = |index: usize| {
            self.trend
                .get(index)
                .map(|p| p.date.format("%b %d").to_string())
                .unwrap_or_default()
        };
        let x_labels = vec![
            date_label(0),
            date_label(self.trend.len() / 2),
            date_label(self.trend.len().saturating_sub(1)),
        ];
        let mid = (TREND_MIN + TREND_MAX) / 2.0;
        let y_labels = [TREND_MIN, mid, TREND_MAX].map(|v| format!("{:.0}", v));

        let dataset = Dataset::default()
            .name("Risk Score")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(palette::ACCENT))
            .data(&points);

        Chart::new(vec![dataset])
            .block(styles::titled_block("30-DAY RISK VELOCITY", false))
            .x_axis(
                Axis::default()
                    .style(styles::text_muted())
                    .bounds([0.0, last_day])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .style(styles::text_muted())
                    .bounds([TREND_MIN, TREND_MAX])
                    .labels(y_labels.to_vec()),
            )
            .render(area, buf);
    }
}

/// Left-to-right chain with the critical node and its inbound edge in red.
fn graph_lines(graph: &SupplyChainGraph) -> Paragraph<'_> {
    let mut lines = vec![Line::default()];

    for node in &graph.nodes {
        let style = if node.critical {
            styles::error().bg(palette::NODE_CRITICAL_BG)
        } else {
            styles::text_primary().bg(palette::NODE_BG)
        };
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(format!(" {} │ {} ", node.id, node.label), style),
        ]));

        if let Some(edge) = graph.edges.iter().find(|e| e.from == node.id) {
            let edge_style = if edge.critical {
                styles::error()
            } else {
                styles::text_muted()
            };
            let label = edge.label.as_deref().unwrap_or_default();
            lines.push(Line::from(Span::styled("     │", edge_style)));
            lines.push(Line::from(Span::styled(format!("     ▼ {}", label), edge_style)));
        }
    }

    Paragraph::new(lines)
}
