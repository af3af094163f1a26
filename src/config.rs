//! Layout constants for the canvas renderer.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Render configuration. Every field has a default, so a partial JSON
/// object (or `{}`) is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderConfig {
    /// Distance between the canvas origin and the top-left-most node after normalization.
    pub padding: f64,
    /// Width used when a node does not declare a numeric `width`.
    pub node_width: f64,
    /// Height used when a node does not declare a numeric `height`.
    pub node_height: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
    /// Extra room added beyond the tightest bounding box.
    pub canvas_margin: f64,
    /// Badges shown by the embed widget before collapsing into "+N".
    pub max_badges: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            padding: 60.0,
            node_width: 200.0,
            node_height: 100.0,
            viewport_width: 800.0,
            viewport_height: 600.0,
            canvas_margin: 100.0,
            max_badges: 6,
        }
    }
}

impl RenderConfig {
    /// Deserialize and validate a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: RenderConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let dimensions = [
            ("padding", self.padding),
            ("nodeWidth", self.node_width),
            ("nodeHeight", self.node_height),
            ("viewportWidth", self.viewport_width),
            ("viewportHeight", self.viewport_height),
            ("canvasMargin", self.canvas_margin),
        ];
        for (field, value) in dimensions {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidDimension { field, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = RenderConfig::from_json("{}").unwrap();
        assert_eq!(config, RenderConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = RenderConfig::from_json(r#"{"padding": 20, "maxBadges": 3}"#).unwrap();
        assert_eq!(config.padding, 20.0);
        assert_eq!(config.max_badges, 3);
        assert_eq!(config.node_width, 200.0);
        assert_eq!(config.viewport_height, 600.0);
    }

    #[test]
    fn negative_dimension_rejected() {
        let err = RenderConfig::from_json(r#"{"canvasMargin": -1}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidDimension { field: "canvasMargin", .. }
        ));
    }

    #[test]
    fn malformed_json_rejected() {
        let err = RenderConfig::from_json("{padding").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
