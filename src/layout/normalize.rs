//! Re-basing node positions onto the padded canvas origin.

use crate::config::RenderConfig;
use crate::parse::types::{Position, RenderNode};

/// Shift every node so the smallest x and y land on `config.padding`.
/// Returns new nodes; the input is left untouched.
pub fn normalize(nodes: &[RenderNode], config: &RenderConfig) -> Vec<RenderNode> {
    if nodes.is_empty() {
        return vec![];
    }

    let min_x = nodes.iter().map(|n| n.position.x).fold(f64::INFINITY, f64::min);
    let min_y = nodes.iter().map(|n| n.position.y).fold(f64::INFINITY, f64::min);

    nodes
        .iter()
        .map(|node| RenderNode {
            position: Position {
                x: node.position.x - min_x + config.padding,
                y: node.position.y - min_y + config.padding,
            },
            ..node.clone()
        })
        .collect()
}
