//! Secure console pages

use avellon_core::{markers_for, project, FixtureProvider, SupplyChainGraph};
use rand::Rng;

use super::{AnalyticsTab, AnalyticsView, Metric, SimulationView, SystemLogsView, WarRoomView};
use crate::widget_state::SimulationInputs;

pub fn render_war_room(fixtures: &FixtureProvider) -> WarRoomView {
    let metrics = fixtures.risk_metrics();

    WarRoomView {
        metrics: vec![
            Metric::new("Global Risk Index", metrics.global_index.to_string()).with_delta("+1.2%"),
            Metric::new("Critical Assets", metrics.critical_assets.to_string())
                .with_delta("Active"),
            Metric::new("System Uptime", metrics.uptime),
            Metric::new("Last Scan", metrics.last_scan),
        ],
        markers: markers_for(&fixtures.assets()),
        feed: fixtures.intel_feed(),
    }
}

/// The trend series is regenerated on every call.
pub fn render_analytics<R: Rng + ?Sized>(
    fixtures: &FixtureProvider,
    rng: &mut R,
    selected_tab: usize,
) -> AnalyticsView {
    let graph = SupplyChainGraph::critical_path();
    let critical_caption = match graph.critical_node() {
        Some(node) => format!(
            "CRITICAL FAILURE POINT DETECTED: Node {} (Logistics Choke Point)",
            node.id
        ),
        None => String::new(),
    };

    AnalyticsView {
        title: "Strategic Analytics",
        selected_tab: AnalyticsTab::ALL[selected_tab.min(AnalyticsTab::ALL.len() - 1)],
        trend: fixtures.risk_trend(rng),
        graph,
        critical_caption,
    }
}

pub fn render_simulation(inputs: &SimulationInputs, notice: Option<&str>) -> SimulationView {
    let projection = project(&inputs.params);

    SimulationView {
        title: "Scenario Modeling",
        subtitle: "Monte Carlo Risk Simulation",
        params: inputs.params,
        focus: inputs.focus,
        impact: vec![
            Metric::new("Revenue at Risk", projection.revenue_label())
                .with_delta("High Confidence"),
            Metric::new("Inventory Burn", projection.inventory_label()).with_delta("Critical"),
        ],
        projection,
        notice: notice.map(str::to_string),
    }
}

pub fn render_system_logs(fixtures: &FixtureProvider) -> SystemLogsView {
    SystemLogsView {
        title: "System Audit Logs",
        rows: fixtures.audit_logs(),
    }
}
