use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{ConfigError, ConfigResult};
use crate::tools::{Mode, Shape, StrokeWidth, ToolSettings, WidthSelection};

/// Environment variable naming a JSON configuration file
pub const CONFIG_ENV_VAR: &str = "SHAPE_PAINT_CONFIG";

/// Startup configuration: window, initial tool settings and DPI override.
///
/// Missing fields take their default values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaintConfig {
    pub window_title: String,
    pub window_size: [f32; 2],
    pub brush_color: Color,
    /// Color the color chooser opens with
    pub chooser_color: Color,
    pub stroke_width: StrokeWidth,
    pub mode: Mode,
    pub shape: Shape,
    /// Overrides the scale reported by the window system
    pub dpi_scale: Option<f32>,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            window_title: "Paint".to_string(),
            window_size: [1024.0, 768.0],
            brush_color: Color::YELLOW,
            chooser_color: Color::RED,
            stroke_width: StrokeWidth::default(),
            mode: Mode::Draw,
            shape: Shape::Ellipse,
            dpi_scale: None,
        }
    }
}

impl PaintConfig {
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        log::info!("Loading config from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load the file named by [`CONFIG_ENV_VAR`], or use the defaults when it is unset
    pub fn from_env() -> ConfigResult<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn tool_settings(&self) -> ToolSettings {
        ToolSettings {
            mode: self.mode,
            shape: self.shape,
            brush_color: self.brush_color,
            width: WidthSelection::new(self.stroke_width),
        }
    }

    fn validate(&self) -> ConfigResult<()> {
        if let Some(scale) = self.dpi_scale {
            if !(scale.is_finite() && scale > 0.0) {
                return Err(ConfigError::Invalid(format!("dpi_scale must be positive, got {}", scale)));
            }
        }
        if self.window_size.iter().any(|side| !(side.is_finite() && *side > 0.0)) {
            return Err(ConfigError::Invalid(format!(
                "window_size must be positive, got {:?}",
                self.window_size
            )));
        }
        for (name, color) in [("brush_color", self.brush_color), ("chooser_color", self.chooser_color)] {
            let channels = [color.r, color.g, color.b, color.a];
            if channels.iter().any(|c| !(0.0..=1.0).contains(c)) {
                return Err(ConfigError::Invalid(format!("{} channels must be within 0..=1", name)));
            }
        }
        Ok(())
    }
}
