//! Types shared by the parse, extract, layout, and render phases.
//!
//! Input types (`WorkflowDocument`, `WorkflowEntity`) are deliberately loose:
//! the workflow JSON follows a third-party schema that this crate only reads
//! through per-field narrowing. Output types are strict and serialize with the
//! camelCase keys the canvas frontend expects.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// INPUT
// =============================================================================

/// A decoded workflow document: always a JSON object.
///
/// Borrows the caller's object when it was already decoded and owns it when
/// it had to be parsed from a string.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowDocument<'a>(Cow<'a, Map<String, Value>>);

impl<'a> WorkflowDocument<'a> {
    pub fn borrowed(map: &'a Map<String, Value>) -> Self {
        WorkflowDocument(Cow::Borrowed(map))
    }

    pub fn owned(map: Map<String, Value>) -> WorkflowDocument<'static> {
        WorkflowDocument(Cow::Owned(map))
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0.into_owned()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The raw node list: `nodes` when it is an array, else `workflow.nodes`
    /// when that is an array, else empty.
    pub fn node_entries(&self) -> &[Value] {
        if let Some(Value::Array(nodes)) = self.get("nodes") {
            return nodes;
        }
        match self.get("workflow").and_then(|w| w.get("nodes")) {
            Some(Value::Array(nodes)) => nodes,
            _ => &[],
        }
    }

    pub fn connections(&self) -> Option<&Value> {
        self.get("connections")
    }
}

/// A catalog workflow record as delivered by the API.
///
/// Only `jsonData` matters for rendering; the remaining fields are carried
/// so the record can be deserialized straight from an API response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowEntity {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    /// Either a JSON-encoded string or an already decoded object.
    #[serde(default)]
    pub json_data: Value,
}

impl WorkflowEntity {
    pub fn from_json_data(json_data: Value) -> Self {
        WorkflowEntity {
            json_data,
            ..Default::default()
        }
    }
}

// =============================================================================
// OUTPUT
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Position { x, y }
    }
}

/// One visual node on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Map<String, Value>>,
    pub position: Position,
    pub width: f64,
    pub height: f64,
    pub output_count: f64,
    /// Display label for `node_type`, filled in by the render facade.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_label: Option<String>,
}

/// A directed edge between two node identifiers. Both ends are non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RenderConnection {
    pub from: String,
    pub to: String,
}

impl RenderConnection {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        RenderConnection {
            from: from.into(),
            to: to.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasBounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

/// Everything the canvas needs to draw one workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderViewModel {
    pub nodes: Vec<RenderNode>,
    pub connections: Vec<RenderConnection>,
    pub is_valid_workflow: bool,
    pub canvas_bounds: CanvasBounds,
    pub canvas_width: f64,
    pub canvas_height: f64,
}
