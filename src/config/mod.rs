//! Configuration file support for sketchpad.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/sketchpad/config.toml`. Settings include the initial canvas
//! size and background, the starting stroke style, and where finished sketches are written.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, DrawingConfig, OutputConfig};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// initial_width = 800
/// initial_height = 600
/// background = "white"
///
/// [drawing]
/// default_color = "black"
/// default_width = 3.0
/// default_tool = "pen"
///
/// [output]
/// filename_template = "sketch_%Y-%m-%d_%H%M%S"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Canvas surface defaults (size, background)
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Stroke style defaults (color, width, tool)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Output location for rendered sketches
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_width`: 0.5 - 100.0
    /// - `initial_width` / `initial_height`: 1 - 16384
    fn validate_and_clamp(&mut self) {
        if !(0.5..=100.0).contains(&self.drawing.default_width) {
            warn!(
                "Invalid default_width {:.1}, clamping to 0.5-100.0 range",
                self.drawing.default_width
            );
            // NaN survives clamp, so fall back to the default explicitly
            self.drawing.default_width = if self.drawing.default_width.is_nan() {
                DrawingConfig::default().default_width
            } else {
                self.drawing.default_width.clamp(0.5, 100.0)
            };
        }

        if !(1..=16384).contains(&self.canvas.initial_width) {
            warn!(
                "Invalid initial_width {}, clamping to 1-16384 range",
                self.canvas.initial_width
            );
            self.canvas.initial_width = self.canvas.initial_width.clamp(1, 16384);
        }

        if !(1..=16384).contains(&self.canvas.initial_height) {
            warn!(
                "Invalid initial_height {}, clamping to 1-16384 range",
                self.canvas.initial_height
            );
            self.canvas.initial_height = self.canvas.initial_height.clamp(1, 16384);
        }

        if self.output.filename_template.trim().is_empty() {
            warn!("Empty output filename_template, falling back to the default");
            self.output.filename_template = OutputConfig::default().filename_template;
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/sketchpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses configuration from TOML text and clamps it to valid ranges.
    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(config_str)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
