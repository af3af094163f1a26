//! Bounding box and minimum canvas size for a set of render nodes.

use crate::config::RenderConfig;
use crate::parse::types::{CanvasBounds, RenderNode};

impl CanvasBounds {
    /// The default viewport, used when there is nothing to bound.
    pub fn viewport(config: &RenderConfig) -> Self {
        CanvasBounds {
            min_x: 0.0,
            min_y: 0.0,
            max_x: config.viewport_width,
            max_y: config.viewport_height,
        }
    }

    /// Canvas `(width, height)`: the box plus margin, never smaller than the viewport.
    pub fn canvas_size(&self, config: &RenderConfig) -> (f64, f64) {
        let width = (self.max_x - self.min_x + config.canvas_margin).max(config.viewport_width);
        let height = (self.max_y - self.min_y + config.canvas_margin).max(config.viewport_height);
        (width, height)
    }
}

/// Tightest box around every node's `(x, y, x + width, y + height)` rectangle.
/// Overlapping nodes are allowed.
pub fn compute_bounds(nodes: &[RenderNode], config: &RenderConfig) -> CanvasBounds {
    let Some(first) = nodes.first() else {
        return CanvasBounds::viewport(config);
    };

    let seed = CanvasBounds {
        min_x: first.position.x,
        min_y: first.position.y,
        max_x: first.position.x + first.width,
        max_y: first.position.y + first.height,
    };

    nodes[1..].iter().fold(seed, |b, node| CanvasBounds {
        min_x: b.min_x.min(node.position.x),
        min_y: b.min_y.min(node.position.y),
        max_x: b.max_x.max(node.position.x + node.width),
        max_y: b.max_y.max(node.position.y + node.height),
    })
}
