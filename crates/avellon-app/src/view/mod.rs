//! Page view models (render output of the router)
//!
//! Each renderer is a pure function from fixture data and widget state to a
//! [`PageView`]. The display surface only draws what is in here.

mod console;
mod public;

pub use console::{render_analytics, render_simulation, render_system_logs, render_war_room};
pub use public::{
    render_about, render_contact, render_home, render_insights, render_login, render_platform,
    render_services, render_solutions,
};

use avellon_core::{
    AuditLogEntry, IntelEvent, MapMarker, PageId, SimulationParams, SimulationProjection,
    SupplyChainGraph, TrendPoint,
};
use serde::Serialize;

use crate::widget_state::{ContactField, LoginField, SimulationField};

/// A titled block of copy, optionally with a callout line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub heading: &'static str,
    pub callout: Option<&'static str>,
    pub body: &'static str,
}

/// A labelled metric with an optional delta/status line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
    pub delta: Option<String>,
}

impl Metric {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            delta: None,
        }
    }

    pub fn with_delta(mut self, delta: impl Into<String>) -> Self {
        self.delta = Some(delta.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeView {
    pub title: &'static str,
    pub hero_heading: &'static str,
    pub hero_body: &'static str,
    pub pillars: Vec<Feature>,
    pub audiences: Vec<Metric>,
    pub briefing_button: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadinessRow {
    pub feature: &'static str,
    pub standard: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformView {
    pub title: &'static str,
    pub intro: &'static str,
    pub modules: Vec<Feature>,
    pub readiness: Vec<ReadinessRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolutionTab {
    pub label: &'static str,
    pub audience: &'static str,
    pub challenge: &'static str,
    pub approach: &'static str,
    pub outcome: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolutionsView {
    pub title: &'static str,
    pub tabs: Vec<SolutionTab>,
    pub selected_tab: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServicesView {
    pub title: &'static str,
    pub intro: &'static str,
    pub offerings: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Brief {
    pub title: &'static str,
    pub classification: &'static str,
    pub summary: &'static str,
    pub expanded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsightsView {
    pub title: &'static str,
    pub intro: &'static str,
    pub briefs: Vec<Brief>,
    pub cursor: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AboutView {
    pub title: &'static str,
    pub premise: &'static str,
    pub paragraphs: Vec<&'static str>,
    pub headquarters: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactView {
    pub title: &'static str,
    pub intro: &'static str,
    pub email: String,
    pub organization: String,
    pub inquiry_type: &'static str,
    pub focus: ContactField,
    pub offices: Vec<&'static str>,
    pub pgp_note: &'static str,
    pub notice: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginView {
    pub heading: &'static str,
    pub subheading: &'static str,
    pub identity: String,
    pub masked_keycode: String,
    pub focus: LoginField,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WarRoomView {
    pub metrics: Vec<Metric>,
    pub markers: Vec<MapMarker>,
    pub feed: Vec<IntelEvent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalyticsTab {
    RiskVelocity,
    DependencyGraph,
}

impl AnalyticsTab {
    pub const ALL: [AnalyticsTab; 2] = [AnalyticsTab::RiskVelocity, AnalyticsTab::DependencyGraph];

    pub fn label(&self) -> &'static str {
        match self {
            AnalyticsTab::RiskVelocity => "RISK VELOCITY",
            AnalyticsTab::DependencyGraph => "DEPENDENCY GRAPH",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsView {
    pub title: &'static str,
    pub selected_tab: AnalyticsTab,
    pub trend: Vec<TrendPoint>,
    pub graph: SupplyChainGraph,
    pub critical_caption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationView {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub params: SimulationParams,
    pub focus: SimulationField,
    pub projection: SimulationProjection,
    /// Revenue at risk and inventory burn, with their confidence labels
    pub impact: Vec<Metric>,
    pub notice: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemLogsView {
    pub title: &'static str,
    pub rows: Vec<AuditLogEntry>,
}

/// Render output for one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum PageView {
    Home(HomeView),
    Platform(PlatformView),
    Solutions(SolutionsView),
    Services(ServicesView),
    Insights(InsightsView),
    About(AboutView),
    Contact(ContactView),
    Login(LoginView),
    WarRoom(WarRoomView),
    Analytics(AnalyticsView),
    Simulation(SimulationView),
    SystemLogs(SystemLogsView),
}

impl PageView {
    /// The page this view renders.
    pub fn page(&self) -> PageId {
        match self {
            PageView::Home(_) => PageId::Home,
            PageView::Platform(_) => PageId::Platform,
            PageView::Solutions(_) => PageId::Solutions,
            PageView::Services(_) => PageId::Services,
            PageView::Insights(_) => PageId::Insights,
            PageView::About(_) => PageId::About,
            PageView::Contact(_) => PageId::Contact,
            PageView::Login(_) => PageId::Login,
            PageView::WarRoom(_) => PageId::WarRoom,
            PageView::Analytics(_) => PageId::Analytics,
            PageView::Simulation(_) => PageId::Simulation,
            PageView::SystemLogs(_) => PageId::SystemLogs,
        }
    }
}
