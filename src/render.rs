//! Rendering facade: workflow entity → `RenderViewModel`.
//!
//! `render` is a total function: malformed payloads degrade to an empty,
//! invalid view model and never produce an error. `WorkflowRenderer` wraps
//! it with a single-entry memo keyed by a hash of the payload.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use serde_json::Value;

use crate::config::RenderConfig;
use crate::extract::{extract_connections, extract_nodes};
use crate::icons::{FallbackIcons, IconResolver};
use crate::layout::{compute_bounds, normalize};
use crate::parse::{self, CanvasBounds, RenderViewModel, WorkflowEntity};

/// Render with the fallback icon resolver.
pub fn render(entity: Option<&WorkflowEntity>, config: &RenderConfig) -> RenderViewModel {
    render_with_icons(entity, config, &FallbackIcons)
}

pub fn render_with_icons(
    entity: Option<&WorkflowEntity>,
    config: &RenderConfig,
    icons: &dyn IconResolver,
) -> RenderViewModel {
    let doc = entity.and_then(|e| parse::parse(&e.json_data));

    let (mut nodes, connections) = match &doc {
        Some(doc) => (
            normalize(&extract_nodes(doc, config), config),
            extract_connections(doc),
        ),
        None => (vec![], vec![]),
    };

    for node in &mut nodes {
        node.type_label = Some(icons.resolve(&node.node_type).label);
    }

    let canvas_bounds = compute_bounds(&nodes, config);
    let (canvas_width, canvas_height) = canvas_bounds.canvas_size(config);

    RenderViewModel {
        is_valid_workflow: entity.is_some() && !nodes.is_empty(),
        nodes,
        connections,
        canvas_bounds,
        canvas_width,
        canvas_height,
    }
}

impl RenderViewModel {
    /// The view model for "nothing to render".
    pub fn empty(config: &RenderConfig) -> Self {
        let canvas_bounds = CanvasBounds::viewport(config);
        let (canvas_width, canvas_height) = canvas_bounds.canvas_size(config);
        RenderViewModel {
            nodes: vec![],
            connections: vec![],
            is_valid_workflow: false,
            canvas_bounds,
            canvas_width,
            canvas_height,
        }
    }
}

/// Memoizing renderer. Re-rendering a payload identical to the previous one
/// returns the cached view model.
pub struct WorkflowRenderer<R: IconResolver = FallbackIcons> {
    config: RenderConfig,
    icons: R,
    cached: Option<(u64, RenderViewModel)>,
    renders: usize,
}

impl WorkflowRenderer<FallbackIcons> {
    pub fn new(config: RenderConfig) -> Self {
        Self::with_icons(config, FallbackIcons)
    }
}

impl Default for WorkflowRenderer<FallbackIcons> {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

impl<R: IconResolver> WorkflowRenderer<R> {
    pub fn with_icons(config: RenderConfig, icons: R) -> Self {
        WorkflowRenderer {
            config,
            icons,
            cached: None,
            renders: 0,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Number of times the view model was actually recomputed.
    pub fn render_count(&self) -> usize {
        self.renders
    }

    pub fn render(&mut self, entity: Option<&WorkflowEntity>) -> &RenderViewModel {
        let key = payload_key(entity);

        if matches!(&self.cached, Some((cached_key, _)) if *cached_key == key) {
            tracing::trace!("render cache hit for payload {:016x}", key);
        } else {
            self.cached = None;
        }

        let (_, model) = self.cached.get_or_insert_with(|| {
            self.renders += 1;
            (key, render_with_icons(entity, &self.config, &self.icons))
        });
        model
    }

    /// Drop the memoized view model, e.g. after swapping icon tables.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}

/// Hash of the entity's payload. A missing entity and a `null` payload hash
/// differently, since only the former is "no workflow".
fn payload_key(entity: Option<&WorkflowEntity>) -> u64 {
    let mut hasher = DefaultHasher::new();
    match entity {
        None => 0u8.hash(&mut hasher),
        Some(e) => {
            1u8.hash(&mut hasher);
            hash_value(&e.json_data, &mut hasher);
        }
    }
    hasher.finish()
}

fn hash_value(value: &Value, hasher: &mut DefaultHasher) {
    match value {
        Value::Null => 0u8.hash(hasher),
        Value::Bool(b) => {
            1u8.hash(hasher);
            b.hash(hasher);
        }
        Value::Number(n) => {
            2u8.hash(hasher);
            n.to_string().hash(hasher);
        }
        Value::String(s) => {
            3u8.hash(hasher);
            s.hash(hasher);
        }
        Value::Array(items) => {
            4u8.hash(hasher);
            items.len().hash(hasher);
            for item in items {
                hash_value(item, hasher);
            }
        }
        Value::Object(map) => {
            5u8.hash(hasher);
            map.len().hash(hasher);
            for (k, v) in map {
                k.hash(hasher);
                hash_value(v, hasher);
            }
        }
    }
}
