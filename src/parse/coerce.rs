//! Field narrowing helpers for loosely typed workflow JSON.

use serde_json::{Map, Value};

use super::types::Position;

/// Look up `key`, treating an explicit `null` the same as a missing key.
pub fn present<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    map.get(key).filter(|v| !v.is_null())
}

/// The value at `key` if it is a JSON number.
pub fn number(map: &Map<String, Value>, key: &str) -> Option<f64> {
    map.get(key).and_then(Value::as_f64)
}

/// The value at `key` if it is a JSON string.
pub fn string<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    map.get(key).and_then(Value::as_str)
}

/// Render any JSON value as display text, the way the workflow editor does
/// when it interpolates a field into a label.
///
/// Strings pass through, integral numbers print without a fraction, arrays
/// join their elements with `,`, and objects collapse to `[object Object]`.
pub fn display_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            (_, _, Some(f)) => float_string(f),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(display_string)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Float formatting with the editor's thresholds: exponent form at or above
/// 1e21 and below 1e-6, positional otherwise (std's Display already drops
/// the `.0` of integral values).
fn float_string(f: f64) -> String {
    let magnitude = f.abs();
    if magnitude == 0.0 || (1e-6..1e21).contains(&magnitude) {
        return format!("{}", f);
    }
    let exp = format!("{:e}", f);
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
        _ => exp,
    }
}

/// Position parsing policy: `[x, y]` or `{x, y}`; each non-numeric axis
/// defaults to 0 on its own, any other shape yields the origin.
pub fn position(value: Option<&Value>) -> Position {
    match value {
        Some(Value::Array(items)) => Position {
            x: items.first().and_then(Value::as_f64).unwrap_or(0.0),
            y: items.get(1).and_then(Value::as_f64).unwrap_or(0.0),
        },
        Some(Value::Object(map)) => Position {
            x: number(map, "x").unwrap_or(0.0),
            y: number(map, "y").unwrap_or(0.0),
        },
        _ => Position::default(),
    }
}
