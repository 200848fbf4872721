//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::input::Tool;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Canvas surface settings.
///
/// Controls the initial backing store. The surface grows on its own when the
/// host viewport exceeds it, so these only matter until the first resize.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Initial surface width in pixels (valid range: 1 - 16384)
    #[serde(default = "default_initial_width")]
    pub initial_width: u32,

    /// Initial surface height in pixels (valid range: 1 - 16384)
    #[serde(default = "default_initial_height")]
    pub initial_height: u32,

    /// Background color, also used by the eraser
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            initial_width: default_initial_width(),
            initial_height: default_initial_height(),
            background: default_background(),
        }
    }
}

/// Drawing-related settings.
///
/// Controls the stroke style the engine starts with.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default pen color - either a named color or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default base stroke width in pixels (valid range: 0.5 - 100.0)
    #[serde(default = "default_width")]
    pub default_width: f64,

    /// Tool selected at startup ("pen" or "eraser")
    #[serde(default)]
    pub default_tool: Tool,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_width: default_width(),
            default_tool: Tool::default(),
        }
    }
}

/// Where the replay host writes finished sketches.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct OutputConfig {
    /// Filename template (supports chrono format specifiers), without extension
    #[serde(default = "default_filename_template")]
    pub filename_template: String,

    /// Output directory; the current directory when unset
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            filename_template: default_filename_template(),
            directory: None,
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_initial_width() -> u32 {
    800
}

fn default_initial_height() -> u32 {
    600
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_width() -> f64 {
    3.0
}

fn default_filename_template() -> String {
    "sketch_%Y-%m-%d_%H%M%S".to_string()
}
