//! petgraph-based directed graph over extracted render nodes and edges.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};

use super::types::{RenderConnection, RenderNode};

/// Connections address nodes by id in the flat shape and by name in the
/// adjacency shape, so endpoints resolve against ids first, then names.
pub struct RenderGraph {
    pub graph: DiGraph<String, ()>,
    pub node_indices: HashMap<String, NodeIndex>,
    name_indices: HashMap<String, NodeIndex>,
    /// Connections with at least one endpoint that matches no node.
    pub dangling: Vec<RenderConnection>,
}

impl RenderGraph {
    pub fn build(nodes: &[RenderNode], connections: &[RenderConnection]) -> Self {
        let mut graph = DiGraph::new();
        let mut node_indices = HashMap::new();
        let mut name_indices = HashMap::new();

        // First occurrence wins for duplicate ids and names
        for node in nodes {
            let idx = graph.add_node(node.id.clone());
            node_indices.entry(node.id.clone()).or_insert(idx);
            name_indices.entry(node.name.clone()).or_insert(idx);
        }

        let mut render_graph = RenderGraph {
            graph,
            node_indices,
            name_indices,
            dangling: Vec::new(),
        };

        for conn in connections {
            match (render_graph.resolve(&conn.from), render_graph.resolve(&conn.to)) {
                (Some(s), Some(t)) => {
                    render_graph.graph.add_edge(s, t, ());
                }
                _ => {
                    tracing::debug!("dangling connection '{}' -> '{}'", conn.from, conn.to);
                    render_graph.dangling.push(conn.clone());
                }
            }
        }

        render_graph
    }

    /// Resolve a connection endpoint to a node, by id then by name.
    pub fn resolve(&self, endpoint: &str) -> Option<NodeIndex> {
        self.node_indices
            .get(endpoint)
            .or_else(|| self.name_indices.get(endpoint))
            .copied()
    }

    pub fn successors(&self, endpoint: &str) -> Vec<&str> {
        self.neighbors(endpoint, petgraph::Direction::Outgoing)
    }

    pub fn predecessors(&self, endpoint: &str) -> Vec<&str> {
        self.neighbors(endpoint, petgraph::Direction::Incoming)
    }

    pub fn incoming_count(&self, endpoint: &str) -> usize {
        self.predecessors(endpoint).len()
    }

    pub fn outgoing_count(&self, endpoint: &str) -> usize {
        self.successors(endpoint).len()
    }

    /// Node ids with no incoming edge, in node order.
    pub fn roots(&self) -> Vec<&str> {
        self.graph
            .node_indices()
            .filter(|&idx| {
                self.graph
                    .neighbors_directed(idx, petgraph::Direction::Incoming)
                    .next()
                    .is_none()
            })
            .map(|idx| self.graph[idx].as_str())
            .collect()
    }

    fn neighbors(&self, endpoint: &str, direction: petgraph::Direction) -> Vec<&str> {
        let Some(idx) = self.resolve(endpoint) else {
            return vec![];
        };
        self.graph
            .neighbors_directed(idx, direction)
            .map(|n| self.graph[n].as_str())
            .collect()
    }
}
