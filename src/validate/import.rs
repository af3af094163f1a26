//! Upload gate for workflow payloads (I001–I003).

use serde_json::Value;

use crate::error::RenderError;
use crate::parse;

/// Checks that a payload looks like an exported workflow: an object with a
/// `nodes` array and a `connections` key. String payloads are decoded first.
pub fn validate_import(raw: &Value) -> Vec<RenderError> {
    let mut errors = Vec::new();

    let Some(doc) = parse::parse(raw) else {
        let found = match raw {
            Value::String(_) => "a string that does not decode to an object",
            other => parse::kind_of(other),
        };
        errors.push(RenderError::import(
            "I001",
            format!("Workflow JSON must be an object, found {}", found),
        ));
        return errors;
    };

    i002_nodes_array(doc.get("nodes"), &mut errors);
    i003_connections_present(doc.get("connections"), &mut errors);

    errors
}

fn i002_nodes_array(nodes: Option<&Value>, errors: &mut Vec<RenderError>) {
    match nodes {
        Some(Value::Array(_)) => {}
        None => errors.push(RenderError::import("I002", "Workflow is missing `nodes`")),
        Some(other) => errors.push(RenderError::import(
            "I002",
            format!("`nodes` must be an array, found {}", parse::kind_of(other)),
        )),
    }
}

fn i003_connections_present(connections: Option<&Value>, errors: &mut Vec<RenderError>) {
    if connections.is_none() {
        errors.push(RenderError::import(
            "I003",
            "Workflow is missing `connections`",
        ));
    }
}
