//! WASM entry points for browser use.

use serde_json::Value;
use wasm_bindgen::prelude::*;

use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::icons::{FallbackIcons, node_badges as summarize_badges};
use crate::parse::{RenderViewModel, WorkflowEntity};

/// Render a workflow payload (the entity's `jsonData`, JSON-encoded) into a
/// view model. Undecodable input renders as the empty, invalid model.
#[wasm_bindgen]
pub fn render_workflow(json: &str) -> JsValue {
    let result = render_workflow_inner(json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn render_workflow_inner(json: &str) -> RenderViewModel {
    let entity = WorkflowEntity::from_json_data(Value::String(json.to_string()));
    crate::render::render(Some(&entity), &RenderConfig::default())
}

/// Import rules + graph diagnostics.
/// Returns a JSON array of error objects (empty when the workflow is clean).
#[wasm_bindgen]
pub fn validate_workflow(json: &str) -> JsValue {
    let result = validate_workflow_inner(json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn validate_workflow_inner(json: &str) -> Vec<ErrorDto> {
    let doc = match crate::parse::parse_strict(json) {
        Ok(doc) => doc,
        Err(errors) => return errors.into_iter().map(ErrorDto::from).collect(),
    };

    let raw = Value::Object(doc.into_map());
    crate::validate::validate_workflow(&raw, &RenderConfig::default())
        .into_iter()
        .map(ErrorDto::from)
        .collect()
}

/// Distinct node-type badges for the embed widget. `max == 0` uses the
/// configured default.
#[wasm_bindgen]
pub fn node_badges(json: &str, max: usize) -> JsValue {
    let max = if max == 0 {
        RenderConfig::default().max_badges
    } else {
        max
    };
    let raw = Value::String(json.to_string());
    let result = summarize_badges(&raw, &FallbackIcons, max);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(serde::Serialize, serde::Deserialize)]
struct ErrorDto {
    code: String,
    phase: String,
    message: String,
    node_id: Option<String>,
}

impl From<RenderError> for ErrorDto {
    fn from(e: RenderError) -> Self {
        ErrorDto {
            code: e.code,
            phase: e.phase.to_string(),
            message: e.message,
            node_id: e.node_id,
        }
    }
}
