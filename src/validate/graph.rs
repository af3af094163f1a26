//! Graph diagnostics over extracted nodes and connections (G001–G003).

use std::collections::HashSet;

use crate::error::RenderError;
use crate::parse::graph::RenderGraph;
use crate::parse::types::{RenderConnection, RenderNode};

pub fn validate_graph(nodes: &[RenderNode], connections: &[RenderConnection]) -> Vec<RenderError> {
    let mut errors = Vec::new();
    let graph = RenderGraph::build(nodes, connections);

    g001_unique_ids(nodes, &mut errors);
    g002_no_dangling_connections(&graph, &mut errors);
    g003_no_self_loops(&graph, connections, &mut errors);

    errors
}

/// Index-derived fallback ids can collide with a declared id.
fn g001_unique_ids(nodes: &[RenderNode], errors: &mut Vec<RenderError>) {
    let mut seen = HashSet::new();
    for node in nodes {
        if !seen.insert(node.id.as_str()) {
            errors.push(RenderError::graph(
                "G001",
                format!("Duplicate node id '{}'", node.id),
                Some(node.id.clone()),
            ));
        }
    }
}

fn g002_no_dangling_connections(graph: &RenderGraph, errors: &mut Vec<RenderError>) {
    for conn in &graph.dangling {
        for endpoint in [&conn.from, &conn.to] {
            if graph.resolve(endpoint).is_none() {
                errors.push(RenderError::graph(
                    "G002",
                    format!(
                        "Connection '{}' -> '{}' references unknown node '{}'",
                        conn.from, conn.to, endpoint
                    ),
                    None,
                ));
            }
        }
    }
}

fn g003_no_self_loops(
    graph: &RenderGraph,
    connections: &[RenderConnection],
    errors: &mut Vec<RenderError>,
) {
    for conn in connections {
        let (Some(from), Some(to)) = (graph.resolve(&conn.from), graph.resolve(&conn.to)) else {
            continue;
        };
        if from == to {
            errors.push(RenderError::graph(
                "G003",
                format!("Node '{}' connects to itself", graph.graph[from]),
                Some(graph.graph[from].clone()),
            ));
        }
    }
}
