use egui::{Color32, Vec2};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::color::parse_color;
use crate::error::ConfigError;
use crate::tool_state::{ToolState, validate_brush_size};

/// Startup settings for a sketchpad.
///
/// Every field is optional in the JSON file; missing fields take the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub background: String,
    pub brush_color: String,
    pub brush_size: f32,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            canvas_width: 256.0,
            canvas_height: 256.0,
            background: "white".to_owned(),
            brush_color: "black".to_owned(),
            brush_size: 1.0,
        }
    }
}

impl SketchConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.canvas_size()?;
        self.background_color()?;
        self.tool_state()?;
        Ok(())
    }

    pub fn canvas_size(&self) -> Result<Vec2, ConfigError> {
        let (width, height) = (self.canvas_width, self.canvas_height);
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidCanvasSize { width, height });
        }
        Ok(Vec2::new(width, height))
    }

    pub fn background_color(&self) -> Result<Color32, ConfigError> {
        parse_color(&self.background).map_err(|source| ConfigError::InvalidColor {
            field: "background",
            source,
        })
    }

    /// Initial brush settings.
    pub fn tool_state(&self) -> Result<ToolState, ConfigError> {
        let color = parse_color(&self.brush_color).map_err(|source| ConfigError::InvalidColor {
            field: "brush_color",
            source,
        })?;
        let size = validate_brush_size(self.brush_size)?;
        Ok(ToolState::new(color, size)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ColorError;

    #[test]
    fn test_empty_json_gives_defaults() {
        let config = SketchConfig::from_json_str("{}").unwrap();
        assert_eq!(config, SketchConfig::default());
        assert_eq!(config.canvas_size().unwrap(), Vec2::splat(256.0));
        assert_eq!(config.background_color().unwrap(), Color32::WHITE);
    }

    #[test]
    fn test_partial_json_overrides_fields() {
        let config =
            SketchConfig::from_json_str(r##"{"brush_color": "#ff0000", "brush_size": 9}"##)
                .unwrap();
        let tool = config.tool_state().unwrap();
        assert_eq!(tool.color(), Color32::from_rgb(255, 0, 0));
        // Same clamping rule as the size field
        assert_eq!(tool.size(), 5.0);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = SketchConfig::from_json_str(r#"{"background": "plaid"}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidColor {
                field: "background",
                source: ColorError::Unknown(_)
            }
        ));

        let err = SketchConfig::from_json_str(r#"{"canvas_width": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCanvasSize { .. }));

        let err = SketchConfig::from_json_str(r#"{"brush_size": 0.5}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBrushSize(_)));

        let err = SketchConfig::from_json_str("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = SketchConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
