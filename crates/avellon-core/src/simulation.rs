//! Scenario modeling inputs and the projected-impact formula

use serde::{Deserialize, Serialize};

pub const MIN_DURATION_DAYS: u32 = 1;
pub const MAX_DURATION_DAYS: u32 = 90;
pub const DEFAULT_DURATION_DAYS: u32 = 14;

const REVENUE_PER_DAY_MUSD: f64 = 12.5;
const INVENTORY_BURN_PER_DAY_PCT: f64 = 2.4;
const CASCADE_PROBABILITY_PCT: u8 = 68;

pub const RECOMMENDATION: &str = "AI RECOMMENDATION: Initiate buffer stock release in EMEA region immediately to mitigate Day 14 stockout.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioType {
    #[default]
    StraitClosure,
    PandemicEvent,
    CyberGridDown,
    SanctionsEscalation,
}

impl ScenarioType {
    pub const ALL: [ScenarioType; 4] = [
        ScenarioType::StraitClosure,
        ScenarioType::PandemicEvent,
        ScenarioType::CyberGridDown,
        ScenarioType::SanctionsEscalation,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ScenarioType::StraitClosure => "Strait Closure",
            ScenarioType::PandemicEvent => "Pandemic Event",
            ScenarioType::CyberGridDown => "Cyber Grid Down",
            ScenarioType::SanctionsEscalation => "Sanctions Escalation",
        }
    }
}

/// Discrete severity slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    #[default]
    Localized,
    Regional,
    GlobalSystemic,
}

impl Severity {
    pub const ALL: [Severity; 3] = [
        Severity::Localized,
        Severity::Regional,
        Severity::GlobalSystemic,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Localized => "Localized",
            Severity::Regional => "Regional",
            Severity::GlobalSystemic => "Global Systemic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SimulationParams {
    pub scenario: ScenarioType,
    pub duration_days: u32,
    pub severity: Severity,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            scenario: ScenarioType::default(),
            duration_days: DEFAULT_DURATION_DAYS,
            severity: Severity::default(),
        }
    }
}

impl SimulationParams {
    /// Set the duration, held inside the slider range.
    pub fn with_duration(mut self, days: u32) -> Self {
        self.duration_days = days.clamp(MIN_DURATION_DAYS, MAX_DURATION_DAYS);
        self
    }
}

/// Projected impact panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationProjection {
    pub revenue_at_risk_musd: f64,
    pub inventory_burn_pct: f64,
    /// Progress bar fill, 0..=100.
    pub progress: u16,
    pub cascade_probability_pct: u8,
    pub recommendation: &'static str,
}

impl SimulationProjection {
    pub fn revenue_label(&self) -> String {
        format!("${:.1}M", self.revenue_at_risk_musd)
    }

    pub fn inventory_label(&self) -> String {
        format!("{:.1}%", self.inventory_burn_pct)
    }
}

/// Project impact from the slider inputs. Only the duration moves the numbers.
pub fn project(params: &SimulationParams) -> SimulationProjection {
    let days = params
        .duration_days
        .clamp(MIN_DURATION_DAYS, MAX_DURATION_DAYS);

    SimulationProjection {
        revenue_at_risk_musd: f64::from(days) * REVENUE_PER_DAY_MUSD,
        inventory_burn_pct: f64::from(days) * INVENTORY_BURN_PER_DAY_PCT,
        progress: (days * 2).min(100) as u16,
        cascade_probability_pct: CASCADE_PROBABILITY_PCT,
        recommendation: RECOMMENDATION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = SimulationParams::default();
        assert_eq!(params.duration_days, 14);
        assert_eq!(params.scenario, ScenarioType::StraitClosure);
        assert_eq!(params.severity, Severity::Localized);
    }

    #[test]
    fn test_projection_for_default_duration() {
        let projection = project(&SimulationParams::default());
        assert_eq!(projection.revenue_at_risk_musd, 175.0);
        assert!((projection.inventory_burn_pct - 33.6).abs() < 1e-9);
        assert_eq!(projection.progress, 28);
        assert_eq!(projection.cascade_probability_pct, 68);
        assert_eq!(projection.revenue_label(), "$175.0M");
        assert_eq!(projection.inventory_label(), "33.6%");
    }

    #[test]
    fn test_progress_caps_at_100() {
        let projection = project(&SimulationParams::default().with_duration(90));
        assert_eq!(projection.progress, 100);
        assert_eq!(projection.revenue_at_risk_musd, 1125.0);
    }

    #[test]
    fn test_duration_is_clamped() {
        assert_eq!(SimulationParams::default().with_duration(0).duration_days, 1);
        assert_eq!(
            SimulationParams::default().with_duration(500).duration_days,
            90
        );
    }

    #[test]
    fn test_severity_does_not_change_projection() {
        let mut params = SimulationParams::default();
        let base = project(&params);
        params.severity = Severity::GlobalSystemic;
        assert_eq!(project(&params), base);
    }

    #[test]
    fn test_labels() {
        assert_eq!(ScenarioType::CyberGridDown.label(), "Cyber Grid Down");
        assert_eq!(Severity::GlobalSystemic.label(), "Global Systemic");
    }
}
