//! Node-type icon collaborator.
//!
//! The catalog ships its own brand/icon table; the renderer only needs a
//! label per node type. `IconResolver` is that seam. `FallbackIcons` derives
//! a deterministic label and glyph from the type string itself, and
//! `IconTable` layers explicit entries on top of it.

pub mod badges;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub use badges::{BadgeSummary, NodeBadge, node_badges};

/// Neutral color for icons synthesized from the type name.
pub const FALLBACK_COLOR: &str = "#94A3B8";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeIcon {
    pub label: String,
    pub glyph: char,
    pub color: String,
}

impl NodeIcon {
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        let label = label.into();
        NodeIcon {
            glyph: glyph_for(&label),
            label,
            color: color.into(),
        }
    }
}

pub trait IconResolver {
    fn resolve(&self, node_type: &str) -> NodeIcon;
}

/// Synthesizes an icon from the node type: the last `.` segment, split on
/// camelCase humps and capitalized (`n8n-nodes-base.httpRequest` → `Http Request`).
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackIcons;

impl IconResolver for FallbackIcons {
    fn resolve(&self, node_type: &str) -> NodeIcon {
        NodeIcon::new(humanize_type(node_type), FALLBACK_COLOR)
    }
}

/// Explicit type → icon entries, falling back to `FallbackIcons` on a miss.
#[derive(Debug, Clone, Default)]
pub struct IconTable {
    entries: HashMap<String, NodeIcon>,
}

impl IconTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, node_type: impl Into<String>, icon: NodeIcon) -> &mut Self {
        self.entries.insert(node_type.into(), icon);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IconResolver for IconTable {
    fn resolve(&self, node_type: &str) -> NodeIcon {
        match self.entries.get(node_type) {
            Some(icon) => icon.clone(),
            None => FallbackIcons.resolve(node_type),
        }
    }
}

pub fn humanize_type(node_type: &str) -> String {
    let raw = node_type.rsplit('.').next().unwrap_or_default();

    let mut spaced = String::with_capacity(raw.len() + 4);
    for ch in raw.chars() {
        if ch.is_ascii_uppercase() {
            spaced.push(' ');
        }
        spaced.push(ch);
    }

    let mut chars = spaced.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => "Unknown".to_string(),
    }
}

fn glyph_for(label: &str) -> char {
    label
        .chars()
        .next()
        .and_then(|c| c.to_uppercase().next())
        .unwrap_or('?')
}
