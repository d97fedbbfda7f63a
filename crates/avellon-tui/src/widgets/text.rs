//! Shared line builders for page bodies

use avellon_app::view::{Feature, Metric};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Padding, Paragraph, Widget, Wrap},
};

use crate::theme::styles;

pub fn title(text: &str) -> Line<'_> {
    Line::from(Span::styled(text, styles::heading()))
}

pub fn section(text: &str) -> Line<'_> {
    Line::from(Span::styled(text, styles::accent_bold()))
}

pub fn body(text: &str) -> Line<'_> {
    Line::from(Span::styled(text, styles::text_primary()))
}

pub fn caption(text: &str) -> Line<'_> {
    Line::from(Span::styled(text, styles::text_muted()))
}

/// Heading, optional callout and caption for one feature block
pub fn feature(feature: &Feature) -> Vec<Line<'_>> {
    let mut lines = vec![Line::from(Span::styled(feature.heading, styles::heading()))];
    if let Some(callout) = feature.callout {
        lines.push(Line::from(Span::styled(
            format!(" {} ", callout),
            styles::callout(),
        )));
    }
    lines.push(caption(feature.body));
    lines.push(Line::default());
    lines
}

/// `LABEL  value  delta`
pub fn metric(metric: &Metric) -> Line<'_> {
    let mut spans = vec![
        Span::styled(metric.label.to_uppercase(), styles::text_muted()),
        Span::raw("  "),
        Span::styled(metric.value.as_str(), styles::heading()),
    ];
    if let Some(delta) = metric.delta.as_deref() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(delta, styles::accent()));
    }
    Line::from(spans)
}

/// Bold label followed by plain text
pub fn labelled<'a>(label: &'a str, text: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(label, styles::heading()),
        Span::raw(" "),
        Span::styled(text, styles::text_primary()),
    ])
}

/// Text input rendered as `Label: [value_]`
pub fn input<'a>(label: &'a str, value: &'a str, focused: bool) -> Line<'a> {
    let cursor = if focused { "_" } else { "" };
    Line::from(vec![
        Span::styled(format!("{:<22}", label), styles::text_secondary()),
        Span::styled(format!("[{}{}]", value, cursor), styles::control(focused)),
    ])
}

/// Push-button rendered as `[ LABEL ]`
pub fn button(label: &str, focused: bool) -> Line<'static> {
    Line::from(Span::styled(
        format!("[ {} ]", label.to_uppercase()),
        styles::control(focused),
    ))
}

/// Wrap `lines` in the page block and render them
pub fn render_block_text(lines: Vec<Line<'_>>, focused: bool, area: Rect, buf: &mut Buffer) {
    Paragraph::new(lines)
        .block(styles::glass_block(focused).padding(Padding::horizontal(1)))
        .wrap(Wrap { trim: false })
        .render(area, buf);
}
