//! Configuration types

use serde::{Deserialize, Serialize};

/// Application settings (.avellon/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub session: SessionSettings,

    #[serde(default)]
    pub fixtures: FixtureSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Session settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SessionSettings {
    /// Page label to open on launch, e.g. "Insights" or "War Room"
    #[serde(default)]
    pub start_page: Option<String>,
}

/// Fixture settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FixtureSettings {
    /// Seed for the risk trend walk; unset means a fresh series every run
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Coastline detail for the operational theater map
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MapDetail {
    #[default]
    High,
    Low,
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Show the legal footer under every page
    #[serde(default = "default_true")]
    pub show_footer: bool,

    /// Event poll timeout in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    #[serde(default)]
    pub map_resolution: MapDetail,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_footer: true,
            tick_rate_ms: default_tick_rate_ms(),
            map_resolution: MapDetail::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_tick_rate_ms() -> u64 {
    50
}
