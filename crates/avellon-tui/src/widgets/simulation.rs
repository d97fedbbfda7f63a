//! Scenario Modeling: inputs on the left, projected impact on the right

use avellon_app::view::SimulationView;
use avellon_app::widget_state::SimulationField;
use avellon_core::{MAX_DURATION_DAYS, MIN_DURATION_DAYS};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Gauge, Padding, Paragraph, Widget, Wrap},
};

use super::text;
use crate::theme::{palette, styles};

pub struct SimulationPage<'a> {
    view: &'a SimulationView,
    focused: bool,
}

impl<'a> SimulationPage<'a> {
    pub fn new(view: &'a SimulationView, focused: bool) -> Self {
        Self { view, focused }
    }

    fn selector(&self, label: &str, value: String, field: SimulationField) -> Line<'static> {
        let focused = self.focused && self.view.focus == field;
        Line::from(vec![
            Span::styled(format!("{:<22}", label), styles::text_secondary()),
            Span::styled(format!("◀ {} ▶", value), styles::control(focused)),
        ])
    }

    fn inputs(&self) -> Vec<Line<'_>> {
        let params = &self.view.params;
        let mut lines = vec![
            text::section("SIMULATION PARAMETERS"),
            Line::default(),
            self.selector(
                "Scenario Type",
                params.scenario.label().to_string(),
                SimulationField::Scenario,
            ),
            Line::default(),
            self.selector(
                "Duration (Days)",
                params.duration_days.to_string(),
                SimulationField::Duration,
            ),
            Line::from(Span::styled(
                format!("{:22}{} .. {}", "", MIN_DURATION_DAYS, MAX_DURATION_DAYS),
                styles::text_muted(),
            )),
            Line::default(),
            self.selector(
                "Severity",
                params.severity.label().to_string(),
                SimulationField::Severity,
            ),
            Line::default(),
            text::button(
                "Run Simulation",
                self.focused && self.view.focus == SimulationField::Run,
            ),
        ];
        if let Some(notice) = self.view.notice.as_deref() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(notice, styles::callout())));
        }
        lines
    }
}

impl Widget for SimulationPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let view = self.view;
        let block = styles::glass_block(self.focused).padding(Padding::horizontal(1));
        let inner = block.inner(area);
        block.render(area, buf);

        let [header, columns] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(inner);
        Paragraph::new(vec![text::title(view.title), text::caption(view.subtitle)])
            .render(header, buf);

        let [inputs_area, impact_area] =
            Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
                .areas(columns);

        Paragraph::new(self.inputs())
            .wrap(Wrap { trim: false })
            .render(inputs_area, buf);

        let projection = &view.projection;
        let [metrics_area, gauge_area, outlook_area] = Layout::vertical([
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .areas(impact_area);

        let mut impact = vec![text::section("PROJECTED IMPACT"), Line::default()];
        impact.extend(view.impact.iter().map(text::metric));
        Paragraph::new(impact).render(metrics_area, buf);

        Gauge::default()
            .block(styles::titled_block("SUPPLY CHAIN STRESS", false))
            .gauge_style(Style::default().fg(palette::STATUS_RED).bg(palette::CARD_BG))
            .percent(projection.progress.min(100))
            .render(gauge_area, buf);

        Paragraph::new(vec![
            Line::from(Span::styled(
                format!(
                    "Probability of cascading failure: {}%",
                    projection.cascade_probability_pct
                ),
                styles::error(),
            )),
            Line::default(),
            Line::from(Span::styled(projection.recommendation, styles::callout())),
        ])
        .wrap(Wrap { trim: false })
        .render(outlook_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use avellon_app::view::render_simulation;
    use avellon_app::widget_state::SimulationInputs;

    #[test]
    fn test_default_projection() {
        let mut term = TestTerminal::with_size(120, 30);
        let view = render_simulation(&SimulationInputs::default(), None);
        term.render_widget(SimulationPage::new(&view, true), term.area());

        assert!(term.buffer_contains("Scenario Modeling"));
        assert!(term.buffer_contains("◀ Strait Closure ▶"));
        assert!(term.buffer_contains("◀ 14 ▶"));
        assert!(term.buffer_contains("$175.0M"));
        assert!(term.buffer_contains("High Confidence"));
        assert!(term.buffer_contains("Critical"));
        assert!(term.buffer_contains("28%"));
        assert!(term.buffer_contains("Probability of cascading failure: 68%"));
        assert!(term.buffer_contains("[ RUN SIMULATION ]"));
    }

    #[test]
    fn test_notice_is_shown() {
        let mut term = TestTerminal::with_size(120, 30);
        let view = render_simulation(&SimulationInputs::default(), Some("Simulation queued"));
        term.render_widget(SimulationPage::new(&view, false), term.area());

        assert!(term.buffer_contains("Simulation queued"));
    }
}
