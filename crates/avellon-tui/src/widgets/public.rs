//! Public marketing pages

use avellon_app::view::{
    AboutView, ContactView, HomeView, InsightsView, PlatformView, ServicesView, SolutionsView,
};
use avellon_app::widget_state::ContactField;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Padding, Paragraph, Row, Table, Tabs, Widget, Wrap},
};

use super::text;
use crate::theme::styles;

pub struct HomePage<'a> {
    view: &'a HomeView,
    focused: bool,
}

impl<'a> HomePage<'a> {
    pub fn new(view: &'a HomeView, focused: bool) -> Self {
        Self { view, focused }
    }
}

impl Widget for HomePage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let view = self.view;
        let mut lines = vec![
            text::title(view.title),
            Line::default(),
            text::section(view.hero_heading),
            text::body(view.hero_body),
            Line::default(),
        ];
        for pillar in &view.pillars {
            lines.extend(text::feature(pillar));
        }

        lines.push(text::section("WHO WE SERVE"));
        let audiences: Vec<Span> = view
            .audiences
            .iter()
            .flat_map(|m| {
                [
                    Span::styled(format!("{} ", m.label), styles::text_muted()),
                    Span::styled(format!("{}   ", m.value), styles::heading()),
                ]
            })
            .collect();
        lines.push(Line::from(audiences));
        lines.push(Line::default());

        let mut button = text::button(view.briefing_button, self.focused);
        button.push_span(Span::styled("  [b]", styles::text_muted()));
        lines.push(button);

        text::render_block_text(lines, self.focused, area, buf);
    }
}

pub struct PlatformPage<'a> {
    view: &'a PlatformView,
    focused: bool,
}

impl<'a> PlatformPage<'a> {
    pub fn new(view: &'a PlatformView, focused: bool) -> Self {
        Self { view, focused }
    }
}

impl Widget for PlatformPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let view = self.view;
        let block = styles::glass_block(self.focused).padding(Padding::horizontal(1));
        let inner = block.inner(area);
        block.render(area, buf);

        let table_height = view.readiness.len() as u16 + 3;
        let [body, table_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(table_height)]).areas(inner);

        let mut lines = vec![
            text::title(view.title),
            text::caption(view.intro),
            Line::default(),
            text::section("CORE MODULES"),
        ];
        for module in &view.modules {
            lines.extend(text::feature(module));
        }
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(body, buf);

        let rows = view
            .readiness
            .iter()
            .map(|row| Row::new(vec![row.feature, row.standard]).style(styles::text_primary()));
        Table::new(rows, [Constraint::Length(14), Constraint::Min(10)])
            .header(Row::new(vec!["Feature", "Standard"]).style(styles::heading()))
            .block(styles::titled_block("ENTERPRISE READINESS", false))
            .render(table_area, buf);
    }
}

pub struct SolutionsPage<'a> {
    view: &'a SolutionsView,
    focused: bool,
}

impl<'a> SolutionsPage<'a> {
    pub fn new(view: &'a SolutionsView, focused: bool) -> Self {
        Self { view, focused }
    }
}

impl Widget for SolutionsPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let view = self.view;
        let block = styles::glass_block(self.focused).padding(Padding::horizontal(1));
        let inner = block.inner(area);
        block.render(area, buf);

        let [title_area, tabs_area, body] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(1),
        ])
        .areas(inner);

        text::title(view.title).render(title_area, buf);

        Tabs::new(view.tabs.iter().map(|t| t.label))
            .select(view.selected_tab)
            .style(styles::text_secondary())
            .highlight_style(styles::control(self.focused).patch(styles::accent_bold()))
            .divider("│")
            .render(tabs_area, buf);

        if let Some(tab) = view.tabs.get(view.selected_tab) {
            let lines = vec![
                text::section(tab.audience),
                Line::default(),
                text::labelled("The Challenge:", tab.challenge),
                Line::default(),
                text::labelled("The AVELLON Approach:", tab.approach),
                Line::default(),
                text::labelled("Outcome:", tab.outcome),
            ];
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .render(body, buf);
        }
    }
}

pub struct ServicesPage<'a> {
    view: &'a ServicesView,
    focused: bool,
}

impl<'a> ServicesPage<'a> {
    pub fn new(view: &'a ServicesView, focused: bool) -> Self {
        Self { view, focused }
    }
}

impl Widget for ServicesPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            text::title(self.view.title),
            text::caption(self.view.intro),
            Line::default(),
        ];
        for offering in &self.view.offerings {
            lines.extend(text::feature(offering));
        }
        text::render_block_text(lines, self.focused, area, buf);
    }
}

pub struct InsightsPage<'a> {
    view: &'a InsightsView,
    focused: bool,
}

impl<'a> InsightsPage<'a> {
    pub fn new(view: &'a InsightsView, focused: bool) -> Self {
        Self { view, focused }
    }
}

impl Widget for InsightsPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let view = self.view;
        let mut lines = vec![
            text::title(view.title),
            text::caption(view.intro),
            Line::default(),
            text::section("LATEST BRIEFS"),
        ];

        for (i, brief) in view.briefs.iter().enumerate() {
            let marker = if brief.expanded { "▼" } else { "▶" };
            let focused = self.focused && i == view.cursor;
            lines.push(Line::from(Span::styled(
                format!("{} {}", marker, brief.title),
                styles::control(focused),
            )));
            if brief.expanded {
                lines.push(text::caption(brief.classification));
                lines.push(text::body(brief.summary));
            }
            lines.push(Line::default());
        }

        text::render_block_text(lines, self.focused, area, buf);
    }
}

pub struct AboutPage<'a> {
    view: &'a AboutView,
    focused: bool,
}

impl<'a> AboutPage<'a> {
    pub fn new(view: &'a AboutView, focused: bool) -> Self {
        Self { view, focused }
    }
}

impl Widget for AboutPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let view = self.view;
        let mut lines = vec![
            text::title(view.title),
            Line::default(),
            text::section(view.premise),
            Line::default(),
        ];
        for paragraph in &view.paragraphs {
            lines.push(text::body(paragraph));
            lines.push(Line::default());
        }
        lines.push(text::labelled("Headquarters:", view.headquarters));

        text::render_block_text(lines, self.focused, area, buf);
    }
}

pub struct ContactPage<'a> {
    view: &'a ContactView,
    focused: bool,
}

impl<'a> ContactPage<'a> {
    pub fn new(view: &'a ContactView, focused: bool) -> Self {
        Self { view, focused }
    }

    fn field_focused(&self, field: ContactField) -> bool {
        self.focused && self.view.focus == field
    }
}

impl Widget for ContactPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let view = self.view;
        let block = styles::glass_block(self.focused).padding(Padding::horizontal(1));
        let inner = block.inner(area);
        block.render(area, buf);

        let [header, columns] =
            Layout::vertical([Constraint::Length(4), Constraint::Min(1)]).areas(inner);
        Paragraph::new(vec![text::title(view.title), text::caption(view.intro)])
            .wrap(Wrap { trim: false })
            .render(header, buf);

        let [form_area, offices_area] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(columns);

        let inquiry_focused = self.field_focused(ContactField::InquiryType);
        let mut form = vec![
            text::input(
                "Institutional Email",
                &view.email,
                self.field_focused(ContactField::Email),
            ),
            Line::default(),
            text::input(
                "Organization / Agency",
                &view.organization,
                self.field_focused(ContactField::Organization),
            ),
            Line::default(),
            Line::from(vec![
                Span::styled(format!("{:<22}", "Inquiry Type"), styles::text_secondary()),
                Span::styled(
                    format!("◀ {} ▶", view.inquiry_type),
                    styles::control(inquiry_focused),
                ),
            ]),
            Line::default(),
            text::button(
                "Initiate Handshake",
                self.field_focused(ContactField::InitiateHandshake),
            ),
        ];
        if let Some(notice) = view.notice.as_deref() {
            form.push(Line::default());
            form.push(Line::from(Span::styled(notice, styles::callout())));
        }
        Paragraph::new(form)
            .wrap(Wrap { trim: false })
            .render(form_area, buf);

        let mut offices = vec![text::section("Global Offices"), Line::default()];
        for office in &view.offices {
            offices.push(text::body(office));
        }
        offices.push(Line::default());
        offices.push(text::caption(view.pgp_note));
        Paragraph::new(offices)
            .wrap(Wrap { trim: false })
            .render(offices_area, buf);
    }
}
