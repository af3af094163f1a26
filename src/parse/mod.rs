//! Parse phase: raw payload → `WorkflowDocument`.

pub mod coerce;
pub mod graph;
pub mod types;

pub use graph::RenderGraph;
pub use types::*;

use serde_json::Value;

use crate::error::RenderError;

/// Accept a workflow payload that is either a JSON-encoded string or an
/// already decoded object. Returns `None` for anything that does not yield a
/// JSON object.
pub fn parse(raw: &Value) -> Option<WorkflowDocument<'_>> {
    match raw {
        Value::String(text) => parse_str(text),
        Value::Object(map) => Some(WorkflowDocument::borrowed(map)),
        _ => None,
    }
}

/// Decode a JSON string into a document. Returns `None` on decode failure or
/// when the top level is not an object.
pub fn parse_str(json: &str) -> Option<WorkflowDocument<'static>> {
    match serde_json::from_str::<Value>(json) {
        Ok(Value::Object(map)) => Some(WorkflowDocument::owned(map)),
        Ok(other) => {
            tracing::debug!("workflow payload is not an object: {}", kind_of(&other));
            None
        }
        Err(e) => {
            tracing::debug!("workflow payload failed to decode: {}", e);
            None
        }
    }
}

/// Like `parse_str`, but reports why the payload was rejected.
pub fn parse_strict(json: &str) -> Result<WorkflowDocument<'static>, Vec<RenderError>> {
    let value = serde_json::from_str::<Value>(json).map_err(|e| {
        vec![RenderError::parse(
            "P001",
            format!("Failed to parse workflow JSON: {}", e),
        )]
    })?;
    match value {
        Value::Object(map) => Ok(WorkflowDocument::owned(map)),
        other => Err(vec![RenderError::parse(
            "P002",
            format!("Workflow JSON must be an object, found {}", kind_of(&other)),
        )]),
    }
}

pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
