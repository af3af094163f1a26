//! Node extraction with per-field defaulting.

use serde_json::{Map, Value};

use crate::config::RenderConfig;
use crate::parse::coerce;
use crate::parse::types::{RenderNode, WorkflowDocument};

/// Build one `RenderNode` per object entry of the document's node list.
///
/// Non-object entries are skipped. Fallbacks that depend on position in the
/// list (`id`, `name`) use the entry's index in the source list, so skipped
/// entries still count.
pub fn extract_nodes(doc: &WorkflowDocument<'_>, config: &RenderConfig) -> Vec<RenderNode> {
    doc.node_entries()
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| match entry {
            Value::Object(node) => Some(extract_node(node, index, config)),
            other => {
                tracing::debug!(
                    "skipping node entry {}: expected object, found {}",
                    index,
                    crate::parse::kind_of(other)
                );
                None
            }
        })
        .collect()
}

fn extract_node(node: &Map<String, Value>, index: usize, config: &RenderConfig) -> RenderNode {
    let name = coerce::present(node, "name");

    RenderNode {
        id: resolve_id(node, index),
        name: name
            .map(coerce::display_string)
            .unwrap_or_else(|| format!("Node {}", index + 1)),
        node_type: coerce::present(node, "type")
            .map(coerce::display_string)
            .unwrap_or_else(|| "unknown".to_string()),
        description: coerce::string(node, "description")
            .or_else(|| coerce::string(node, "notesInFlow"))
            .map(str::to_string),
        parameters: match node.get("parameters") {
            Some(Value::Object(params)) => Some(params.clone()),
            _ => None,
        },
        position: coerce::position(node.get("position")),
        width: coerce::number(node, "width").unwrap_or(config.node_width),
        height: coerce::number(node, "height").unwrap_or(config.node_height),
        output_count: coerce::number(node, "outputCount")
            .or_else(|| coerce::number(node, "outputs"))
            .unwrap_or(1.0),
        type_label: None,
    }
}

/// `id`, then `name`, then the entry index. Empty strings fall through so
/// the resolved id is never empty.
fn resolve_id(node: &Map<String, Value>, index: usize) -> String {
    ["id", "name"]
        .iter()
        .filter_map(|key| coerce::present(node, key))
        .map(coerce::display_string)
        .find(|id| !id.is_empty())
        .unwrap_or_else(|| index.to_string())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::parse;
    use crate::parse::types::Position;

    fn nodes_of(value: serde_json::Value) -> Vec<RenderNode> {
        let doc = parse::parse(&value).expect("object");
        extract_nodes(&doc, &RenderConfig::default())
    }

    #[test]
    fn id_prefers_id_then_name_then_index() {
        let nodes = nodes_of(json!({
            "nodes": [
                {"id": "a1", "name": "Alpha"},
                {"name": "Beta"},
                {},
                {"id": 42},
                {"id": "", "name": ""}
            ]
        }));
        let ids: Vec<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["a1", "Beta", "2", "42", "4"]);
    }

    #[test]
    fn fallback_uses_source_index_after_skips() {
        let nodes = nodes_of(json!({"nodes": [null, 7, {}]}));
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].id, "2");
        assert_eq!(nodes[0].name, "Node 3");
    }

    #[test]
    fn defaults_for_bare_node() {
        let nodes = nodes_of(json!({"nodes": [{}]}));
        let node = &nodes[0];
        assert_eq!(node.node_type, "unknown");
        assert_eq!(node.description, None);
        assert_eq!(node.parameters, None);
        assert_eq!(node.position, Position::default());
        assert_eq!((node.width, node.height), (200.0, 100.0));
        assert_eq!(node.output_count, 1.0);
    }

    #[test]
    fn description_falls_back_to_notes_in_flow() {
        let nodes = nodes_of(json!({
            "nodes": [
                {"description": 5, "notesInFlow": "note"},
                {"description": "desc", "notesInFlow": "note"}
            ]
        }));
        assert_eq!(nodes[0].description.as_deref(), Some("note"));
        assert_eq!(nodes[1].description.as_deref(), Some("desc"));
    }

    #[test]
    fn parameters_only_when_object() {
        let nodes = nodes_of(json!({
            "nodes": [{"parameters": {"url": "x"}}, {"parameters": [1]}, {"parameters": "p"}]
        }));
        assert_eq!(nodes[0].parameters.as_ref().map(|p| p.len()), Some(1));
        assert!(nodes[1].parameters.is_none());
        assert!(nodes[2].parameters.is_none());
    }

    #[test]
    fn size_and_output_count_narrowing() {
        let nodes = nodes_of(json!({
            "nodes": [
                {"width": "wide", "height": 40, "outputCount": "2", "outputs": 3},
                {"outputCount": 2, "outputs": 5},
                {"outputs": null}
            ]
        }));
        assert_eq!((nodes[0].width, nodes[0].height), (200.0, 40.0));
        assert_eq!(nodes[0].output_count, 3.0);
        assert_eq!(nodes[1].output_count, 2.0);
        assert_eq!(nodes[2].output_count, 1.0);
    }

    #[test]
    fn output_count_keeps_any_number() {
        let nodes = nodes_of(json!({
            "nodes": [
                {"outputCount": -1, "outputs": 3},
                {"outputCount": 2.5},
                {"outputs": 0.5},
                {"outputCount": 0, "outputs": 4}
            ]
        }));
        let counts: Vec<f64> = nodes.iter().map(|n| n.output_count).collect();
        assert_eq!(counts, vec![-1.0, 2.5, 0.5, 0.0]);
    }

    #[test]
    fn nested_workflow_nodes() {
        let nodes = nodes_of(json!({"workflow": {"nodes": [{"name": "Inner"}]}}));
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].name, "Inner");
    }

    #[test]
    fn top_level_nodes_win_over_nested() {
        let nodes = nodes_of(json!({
            "nodes": [{"name": "Outer"}],
            "workflow": {"nodes": [{"name": "Inner"}]}
        }));
        assert_eq!(nodes[0].name, "Outer");
    }

    #[test]
    fn configured_default_size() {
        let config = RenderConfig {
            node_width: 120.0,
            node_height: 80.0,
            ..RenderConfig::default()
        };
        let value = json!({"nodes": [{}]});
        let doc = parse::parse(&value).unwrap();
        let nodes = extract_nodes(&doc, &config);
        assert_eq!((nodes[0].width, nodes[0].height), (120.0, 80.0));
    }
}
