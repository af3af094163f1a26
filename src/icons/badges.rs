//! Distinct node-type badges for the embed widget.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::IconResolver;
use crate::parse;

/// Annotation nodes that never show up as a badge.
const STICKY_NOTE_TYPE: &str = "n8n-nodes-base.stickyNote";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeBadge {
    #[serde(rename = "type")]
    pub node_type: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeSummary {
    pub badges: Vec<NodeBadge>,
    /// Distinct types beyond `max`, shown as "+N".
    pub overflow: usize,
}

/// Distinct node types of a workflow payload in first-seen order, at most
/// `max` of them. Sticky notes and untyped nodes are ignored.
pub fn node_badges(raw: &Value, resolver: &dyn IconResolver, max: usize) -> BadgeSummary {
    let Some(doc) = parse::parse(raw) else {
        return BadgeSummary::default();
    };

    let workflow = match doc.get("workflow") {
        Some(Value::Object(inner)) => inner,
        _ => doc.as_map(),
    };
    let Some(Value::Array(nodes)) = workflow.get("nodes") else {
        return BadgeSummary::default();
    };

    let mut seen = HashSet::new();
    let distinct: Vec<&str> = nodes
        .iter()
        .filter_map(|node| node.get("type").and_then(Value::as_str))
        .filter(|t| !t.is_empty() && *t != STICKY_NOTE_TYPE)
        .filter(|t| seen.insert(*t))
        .collect();

    let overflow = distinct.len().saturating_sub(max);
    let badges = distinct
        .into_iter()
        .take(max)
        .map(|node_type| NodeBadge {
            node_type: node_type.to_string(),
            label: resolver.resolve(node_type).label,
        })
        .collect();

    BadgeSummary { badges, overflow }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::icons::FallbackIcons;

    #[test]
    fn dedupes_and_skips_sticky_notes() {
        let raw = json!({
            "nodes": [
                {"type": "n8n-nodes-base.webhook"},
                {"type": "n8n-nodes-base.stickyNote"},
                {"type": "n8n-nodes-base.webhook"},
                {"name": "untyped"},
                {"type": "n8n-nodes-base.set"}
            ]
        });
        let summary = node_badges(&raw, &FallbackIcons, 6);
        let types: Vec<&str> = summary.badges.iter().map(|b| b.node_type.as_str()).collect();
        assert_eq!(types, vec!["n8n-nodes-base.webhook", "n8n-nodes-base.set"]);
        assert_eq!(summary.badges[0].label, "Webhook");
        assert_eq!(summary.overflow, 0);
    }

    #[test]
    fn overflow_counts_hidden_types() {
        let raw = json!({
            "nodes": (0..9).map(|i| json!({"type": format!("t.type{}", i)})).collect::<Vec<_>>()
        });
        let summary = node_badges(&raw, &FallbackIcons, 6);
        assert_eq!(summary.badges.len(), 6);
        assert_eq!(summary.overflow, 3);
    }

    #[test]
    fn reads_nested_workflow_and_strings() {
        let raw = json!(r#"{"workflow": {"nodes": [{"type": "a.code"}]}}"#);
        let summary = node_badges(&raw, &FallbackIcons, 6);
        assert_eq!(summary.badges.len(), 1);
        assert_eq!(summary.badges[0].label, "Code");
    }

    #[test]
    fn non_workflow_payload_is_empty() {
        assert_eq!(node_badges(&json!(12), &FallbackIcons, 6), BadgeSummary::default());
        assert_eq!(node_badges(&json!({"nodes": {}}), &FallbackIcons, 6), BadgeSummary::default());
    }
}
