//! Local widget state for forms, tabs, expanders and sliders
//!
//! None of this touches the session. It only feeds the page renderers.

use avellon_core::{PageId, ScenarioType, Severity, SimulationParams};
use serde::Serialize;

/// Keycodes are never echoed.
const MASK_CHAR: char = '•';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginField {
    #[default]
    Identity,
    Keycode,
    Authenticate,
}

impl LoginField {
    const ORDER: [LoginField; 3] = [
        LoginField::Identity,
        LoginField::Keycode,
        LoginField::Authenticate,
    ];
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub identity: String,
    pub keycode: String,
    pub focus: LoginField,
    /// Inline error from the last rejected attempt.
    pub error: Option<String>,
}

impl LoginForm {
    pub fn masked_keycode(&self) -> String {
        self.keycode.chars().map(|_| MASK_CHAR).collect()
    }

    /// Mutable buffer of the focused text field, if any.
    fn focused_text(&mut self) -> Option<&mut String> {
        match self.focus {
            LoginField::Identity => Some(&mut self.identity),
            LoginField::Keycode => Some(&mut self.keycode),
            LoginField::Authenticate => None,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InquiryType {
    #[default]
    PlatformDemo,
    StrategicPartnership,
    MediaPress,
    SovereignLiaison,
}

impl InquiryType {
    pub const ALL: [InquiryType; 4] = [
        InquiryType::PlatformDemo,
        InquiryType::StrategicPartnership,
        InquiryType::MediaPress,
        InquiryType::SovereignLiaison,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InquiryType::PlatformDemo => "Platform Demo",
            InquiryType::StrategicPartnership => "Strategic Partnership",
            InquiryType::MediaPress => "Media / Press",
            InquiryType::SovereignLiaison => "Sovereign Liaison",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    #[default]
    Email,
    Organization,
    InquiryType,
    InitiateHandshake,
}

impl ContactField {
    const ORDER: [ContactField; 4] = [
        ContactField::Email,
        ContactField::Organization,
        ContactField::InquiryType,
        ContactField::InitiateHandshake,
    ];
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub email: String,
    pub organization: String,
    pub inquiry: InquiryType,
    pub focus: ContactField,
}

impl ContactForm {
    fn focused_text(&mut self) -> Option<&mut String> {
        match self.focus {
            ContactField::Email => Some(&mut self.email),
            ContactField::Organization => Some(&mut self.organization),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulationField {
    #[default]
    Scenario,
    Duration,
    Severity,
    Run,
}

impl SimulationField {
    const ORDER: [SimulationField; 4] = [
        SimulationField::Scenario,
        SimulationField::Duration,
        SimulationField::Severity,
        SimulationField::Run,
    ];
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationInputs {
    pub params: SimulationParams,
    pub focus: SimulationField,
}

/// Number of briefs on the Insights page.
pub const INSIGHT_COUNT: usize = 3;

/// Local UI state for every page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetState {
    pub login: LoginForm,
    pub contact: ContactForm,
    pub simulation: SimulationInputs,
    pub solutions_tab: usize,
    pub analytics_tab: usize,
    /// First brief starts expanded.
    pub insights_expanded: [bool; INSIGHT_COUNT],
    pub insights_cursor: usize,
    /// Transient feedback for buttons with no backing action.
    pub notice: Option<String>,
}

impl Default for WidgetState {
    fn default() -> Self {
        Self {
            login: LoginForm::default(),
            contact: ContactForm::default(),
            simulation: SimulationInputs::default(),
            solutions_tab: 0,
            analytics_tab: 0,
            insights_expanded: [true, false, false],
            insights_cursor: 0,
            notice: None,
        }
    }
}

/// Move `current` through `order` by `delta`, clamping at the ends.
fn step<T: Copy + PartialEq>(order: &[T], current: T, delta: i32) -> T {
    let index = order.iter().position(|v| *v == current).unwrap_or(0) as i32;
    let next = (index + delta).clamp(0, order.len() as i32 - 1);
    order[next as usize]
}

/// Clamp-step an index over `len` entries.
pub fn step_index(index: usize, len: usize, delta: i32) -> usize {
    if len == 0 {
        return 0;
    }
    (index as i32 + delta).clamp(0, len as i32 - 1) as usize
}

impl WidgetState {
    pub fn login_focus_step(&mut self, delta: i32) {
        self.login.focus = step(&LoginField::ORDER, self.login.focus, delta);
    }

    pub fn contact_focus_step(&mut self, delta: i32) {
        self.contact.focus = step(&ContactField::ORDER, self.contact.focus, delta);
    }

    pub fn simulation_focus_step(&mut self, delta: i32) {
        self.simulation.focus = step(&SimulationField::ORDER, self.simulation.focus, delta);
    }

    pub fn cycle_inquiry(&mut self, delta: i32) {
        self.contact.inquiry = step(&InquiryType::ALL, self.contact.inquiry, delta);
    }

    /// Left/right on the focused simulation control.
    pub fn adjust_simulation(&mut self, delta: i32) {
        let params = &mut self.simulation.params;
        match self.simulation.focus {
            SimulationField::Scenario => {
                params.scenario = step(&ScenarioType::ALL, params.scenario, delta);
            }
            SimulationField::Duration => {
                let days = (params.duration_days as i32 + delta).max(0) as u32;
                *params = params.with_duration(days);
            }
            SimulationField::Severity => {
                params.severity = step(&Severity::ALL, params.severity, delta);
            }
            SimulationField::Run => {}
        }
    }

    pub fn toggle_insight(&mut self) {
        if let Some(expanded) = self.insights_expanded.get_mut(self.insights_cursor) {
            *expanded = !*expanded;
        }
    }

    /// Text buffer receiving typed characters on the given page, if any.
    pub fn text_target(&mut self, page: PageId) -> Option<&mut String> {
        match page {
            PageId::Login => self.login.focused_text(),
            PageId::Contact => self.contact.focused_text(),
            _ => None,
        }
    }

    /// Whether typed characters would land in a text field on `page`.
    pub fn has_text_focus(&self, page: PageId) -> bool {
        match page {
            PageId::Login => self.login.focus != LoginField::Authenticate,
            PageId::Contact => matches!(
                self.contact.focus,
                ContactField::Email | ContactField::Organization
            ),
            _ => false,
        }
    }
}
