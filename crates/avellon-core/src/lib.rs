//! # avellon-core - Core Domain Types
//!
//! Foundation crate for the AVELLON console. Provides page identifiers, the
//! fixture data provider, map/graph/simulation models, error handling and
//! logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, rand, tracing).
//!
//! ## Public API
//!
//! ### Pages (`page`)
//! - [`PageId`] - Every navigable view, public and secure
//! - [`PUBLIC_MENU`], [`SECURE_MENU`] - Sidebar menu order
//!
//! ### Fixtures (`fixtures`)
//! - [`FixtureProvider`] - Fresh demo datasets on every call
//! - [`Asset`], [`IntelEvent`], [`AuditLogEntry`], [`RiskMetrics`], [`TrendPoint`]
//! - [`RiskTier`] - Shared risk classification
//!
//! ### Visual models
//! - [`MapMarker`] / [`markers_for()`] - Operational theater markers
//! - [`SupplyChainGraph`] - Critical path diagram
//! - [`SimulationParams`] / [`project()`] - Scenario modeling formula
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use avellon_core::prelude::*;
//! ```

pub mod error;
pub mod fixtures;
pub mod graph;
pub mod logging;
pub mod map;
pub mod page;
pub mod simulation;

/// Prelude for common imports used throughout all AVELLON crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use fixtures::{
    Asset, AuditLogEntry, FixtureProvider, IntelEvent, RiskMetrics, RiskTier, TrendPoint,
    TREND_DAYS, TREND_MAX, TREND_MIN,
};
pub use graph::{GraphEdge, GraphNode, SupplyChainGraph};
pub use map::{
    markers_for, MapMarker, MapViewport, MAP_CENTER, MAP_SPAN, MARKER_RADIUS, PULSE_RADIUS,
};
pub use page::{PageId, ALL_PAGES, PUBLIC_MENU, SECURE_MENU};
pub use simulation::{
    project, ScenarioType, Severity, SimulationParams, SimulationProjection,
    DEFAULT_DURATION_DAYS, MAX_DURATION_DAYS, MIN_DURATION_DAYS,
};
