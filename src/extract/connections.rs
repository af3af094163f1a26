//! Connection extraction across the two shapes a workflow may use.
//!
//! Flat list:
//! ```json
//! [{"from": "A", "to": "B"}]
//! ```
//! Adjacency map (source node name → output channel → output index → targets):
//! ```json
//! {"A": {"main": [[{"node": "B", "type": "main", "index": 0}]]}}
//! ```

use serde_json::{Map, Value};

use crate::parse::coerce;
use crate::parse::types::{RenderConnection, WorkflowDocument};

/// The `connections` payload, classified by its runtime shape. The format
/// carries no version tag, so inspection is the only discriminator.
#[derive(Debug, Clone, Copy)]
pub enum ConnectionSource<'a> {
    Flat(&'a [Value]),
    Adjacency(&'a Map<String, Value>),
}

impl<'a> ConnectionSource<'a> {
    pub fn classify(value: &'a Value) -> Option<Self> {
        match value {
            Value::Array(entries) => Some(ConnectionSource::Flat(entries)),
            Value::Object(map) => Some(ConnectionSource::Adjacency(map)),
            _ => None,
        }
    }
}

pub fn extract_connections(doc: &WorkflowDocument<'_>) -> Vec<RenderConnection> {
    match doc.connections().and_then(ConnectionSource::classify) {
        Some(ConnectionSource::Flat(entries)) => extract_flat(entries),
        Some(ConnectionSource::Adjacency(map)) => extract_adjacency(map),
        None => vec![],
    }
}

fn extract_flat(entries: &[Value]) -> Vec<RenderConnection> {
    entries
        .iter()
        .filter_map(Value::as_object)
        .map(|entry| {
            RenderConnection::new(endpoint(entry, "from"), endpoint(entry, "to"))
        })
        .filter(|conn| {
            let keep = !conn.from.is_empty() && !conn.to.is_empty();
            if !keep {
                tracing::debug!("dropping connection with empty endpoint: {:?}", conn);
            }
            keep
        })
        .collect()
}

fn endpoint(entry: &Map<String, Value>, key: &str) -> String {
    coerce::present(entry, key)
        .map(coerce::display_string)
        .unwrap_or_default()
}

fn extract_adjacency(map: &Map<String, Value>) -> Vec<RenderConnection> {
    let mut connections = Vec::new();

    for (source, channels) in map {
        for outputs in members(channels) {
            let Value::Array(outputs) = outputs else { continue };
            for branch in outputs {
                let Value::Array(branch) = branch else { continue };
                for target in branch {
                    match target.get("node").and_then(Value::as_str) {
                        Some(node) if !node.is_empty() => {
                            connections.push(RenderConnection::new(source.as_str(), node));
                        }
                        _ => {
                            tracing::debug!("skipping target without node from '{}'", source);
                        }
                    }
                }
            }
        }
    }

    connections
}

/// Values of an object or elements of an array; nothing for scalars.
fn members(value: &Value) -> Box<dyn Iterator<Item = &Value> + '_> {
    match value {
        Value::Object(map) => Box::new(map.values()),
        Value::Array(items) => Box::new(items.iter()),
        _ => Box::new(std::iter::empty()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::parse;

    fn connections_of(value: Value) -> Vec<RenderConnection> {
        let doc = parse::parse(&value).expect("object");
        extract_connections(&doc)
    }

    #[test]
    fn adjacency_multiple_channels_and_branches() {
        let conns = connections_of(json!({
            "connections": {
                "If": {
                    "main": [
                        [{"node": "Yes", "type": "main", "index": 0}],
                        [{"node": "No", "type": "main", "index": 0}, {"node": "Audit"}]
                    ]
                },
                "Model": {"ai_languageModel": [[{"node": "Agent"}]]}
            }
        }));
        assert_eq!(
            conns,
            vec![
                RenderConnection::new("If", "Yes"),
                RenderConnection::new("If", "No"),
                RenderConnection::new("If", "Audit"),
                RenderConnection::new("Model", "Agent"),
            ]
        );
    }

    #[test]
    fn adjacency_malformed_levels_skip_only_themselves() {
        let conns = connections_of(json!({
            "connections": {
                "A": null,
                "B": {"main": "oops"},
                "C": {"main": [null, {"node": "X"}, [{"node": "D"}, 5, {"node": 9}, {"node": ""}]]},
                "E": {"main": [[{"node": "F"}]]}
            }
        }));
        assert_eq!(
            conns,
            vec![RenderConnection::new("C", "D"), RenderConnection::new("E", "F")]
        );
    }

    #[test]
    fn flat_stringifies_and_drops_empty() {
        let conns = connections_of(json!({
            "connections": [
                {"from": 1, "to": "b"},
                {"from": "a"},
                {"from": null, "to": "c"},
                "not an edge",
                {"from": "x", "to": "y"}
            ]
        }));
        assert_eq!(
            conns,
            vec![RenderConnection::new("1", "b"), RenderConnection::new("x", "y")]
        );
    }

    #[test]
    fn scalar_or_missing_connections_yield_nothing() {
        assert!(connections_of(json!({})).is_empty());
        assert!(connections_of(json!({"connections": "A->B"})).is_empty());
        assert!(connections_of(json!({"connections": 0})).is_empty());
    }
}
