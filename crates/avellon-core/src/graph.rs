//! Supply-chain dependency graph shown in Analytics

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    pub id: char,
    pub label: String,
    pub critical: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub from: char,
    pub to: char,
    pub label: Option<String>,
    pub critical: bool,
}

/// Directed graph laid out left to right.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupplyChainGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl SupplyChainGraph {
    /// The fixed five-stage critical path with the logistics choke point flagged.
    pub fn critical_path() -> Self {
        let node = |id, label: &str, critical| GraphNode {
            id,
            label: label.to_string(),
            critical,
        };
        let edge = |from, to| GraphEdge {
            from,
            to,
            label: None,
            critical: false,
        };

        Self {
            nodes: vec![
                node('A', "Rare Earth Mine (Source)", false),
                node('B', "Refining Facility (Processing)", false),
                node('C', "Choke Point (Logistics)", true),
                node('D', "Component Fab (Mfg)", false),
                node('E', "Assembly Plant (Final)", false),
            ],
            edges: vec![
                edge('A', 'B'),
                GraphEdge {
                    from: 'B',
                    to: 'C',
                    label: Some("Delay risk".to_string()),
                    critical: true,
                },
                edge('C', 'D'),
                edge('D', 'E'),
            ],
        }
    }

    pub fn node(&self, id: char) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// The node flagged as the failure point, if any.
    pub fn critical_node(&self) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.critical)
    }
}
