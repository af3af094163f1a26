//! Validation phase.
//!
//! Import rules (I001–I003) gate workflow uploads in the admin console.
//! Graph diagnostics (G001–G003) describe oddities in an extracted workflow;
//! rendering tolerates all of them.

pub mod graph;
pub mod import;

pub use graph::validate_graph;
pub use import::validate_import;

use serde_json::Value;

use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::extract::{extract_connections, extract_nodes};
use crate::parse;

/// Import rules, then graph diagnostics when the payload is importable.
pub fn validate_workflow(raw: &Value, config: &RenderConfig) -> Vec<RenderError> {
    let errors = validate_import(raw);
    if !errors.is_empty() {
        return errors;
    }

    let Some(doc) = parse::parse(raw) else {
        return errors;
    };
    let nodes = extract_nodes(&doc, config);
    let connections = extract_connections(&doc);
    validate_graph(&nodes, &connections)
}
