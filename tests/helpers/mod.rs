#![allow(dead_code)]

use renderer::config::RenderConfig;
use renderer::parse::{Position, RenderNode, RenderViewModel, WorkflowEntity};
use renderer::render;
use serde_json::Value;

// =============================================================================
// Entity + node builders
// =============================================================================

/// Entity whose `jsonData` is the raw JSON string, as stored by the catalog.
pub fn entity_from_str(json: &str) -> WorkflowEntity {
    WorkflowEntity::from_json_data(Value::String(json.to_string()))
}

/// Entity whose `jsonData` is already decoded.
pub fn entity_from_value(json: Value) -> WorkflowEntity {
    WorkflowEntity::from_json_data(json)
}

pub fn render_str(json: &str) -> RenderViewModel {
    render::render(Some(&entity_from_str(json)), &RenderConfig::default())
}

pub fn render_value(json: Value) -> RenderViewModel {
    render::render(Some(&entity_from_value(json)), &RenderConfig::default())
}

/// A default-sized node at `(x, y)`.
pub fn node_at(id: &str, x: f64, y: f64) -> RenderNode {
    sized_node_at(id, x, y, 200.0, 100.0)
}

pub fn sized_node_at(id: &str, x: f64, y: f64, width: f64, height: f64) -> RenderNode {
    RenderNode {
        id: id.into(),
        name: id.into(),
        node_type: "unknown".into(),
        description: None,
        parameters: None,
        position: Position::new(x, y),
        width,
        height,
        output_count: 1.0,
        type_label: None,
    }
}

pub fn find<'a>(model: &'a RenderViewModel, name: &str) -> &'a RenderNode {
    model
        .nodes
        .iter()
        .find(|n| n.name == name)
        .unwrap_or_else(|| panic!("node '{}' not rendered", name))
}
