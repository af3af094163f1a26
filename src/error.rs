//! Error types for the validation and configuration paths.
//!
//! Rendering itself never fails; these types only surface from
//! `parse::parse_strict`, `validate`, and `config`.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Parse,
    Import,
    Graph,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Parse => write!(f, "Parse"),
            Phase::Import => write!(f, "Import"),
            Phase::Graph => write!(f, "Graph"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderError {
    pub code: String,
    pub phase: Phase,
    pub message: String,
    pub node_id: Option<String>,
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.node_id {
            Some(id) => write!(
                f,
                "[{}:{}] {} (node '{}')",
                self.phase, self.code, self.message, id
            ),
            None => write!(f, "[{}:{}] {}", self.phase, self.code, self.message),
        }
    }
}

impl std::error::Error for RenderError {}

impl RenderError {
    pub fn parse(code: &str, message: impl Into<String>) -> Self {
        RenderError {
            code: code.into(),
            phase: Phase::Parse,
            message: message.into(),
            node_id: None,
        }
    }

    pub fn import(code: &str, message: impl Into<String>) -> Self {
        RenderError {
            code: code.into(),
            phase: Phase::Import,
            message: message.into(),
            node_id: None,
        }
    }

    pub fn graph(code: &str, message: impl Into<String>, node_id: Option<String>) -> Self {
        RenderError {
            code: code.into(),
            phase: Phase::Graph,
            message: message.into(),
            node_id,
        }
    }
}

/// Rejected render configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse render config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("`{field}` must be a finite, non-negative number, got {value}")]
    InvalidDimension { field: &'static str, value: f64 },
}
