//! Extraction phase: `WorkflowDocument` → render nodes and connections.
//!
//! Every field is narrowed on its own; a malformed entry or level is
//! skipped and never fails the whole document.

pub mod connections;
pub mod nodes;

pub use connections::{ConnectionSource, extract_connections};
pub use nodes::extract_nodes;
