//! Configuration file support for magic-paint.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/magic-paint/config.toml`. Settings include drawing defaults,
//! canvas size, performance tuning, UI preferences, and keybindings.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod keybindings;
pub mod types;

// Re-export commonly used types at module level
pub use enums::{ColorSpec, StatusPosition};
pub use keybindings::{Action, KeyBinding, KeybindingError, KeybindingsConfig};
pub use types::{
    CanvasConfig, DrawingConfig, HelpOverlayStyle, PerformanceConfig, StatusBarStyle, UiConfig,
};

use crate::draw::Color;
use crate::input::{MAX_STROKE_WIDTH, MIN_STROKE_WIDTH};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::{JsonSchema, Schema};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Smallest accepted canvas edge in pixels.
pub const MIN_CANVAS_SIZE: u32 = 200;
/// Largest accepted canvas edge in pixels.
pub const MAX_CANVAS_SIZE: u32 = 8192;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "purple"
/// default_thickness = 5.0
/// default_tool = "pencil"
///
/// [canvas]
/// width = 1024
/// height = 768
///
/// [ui]
/// show_status_bar = true
/// status_bar_position = "bottom-left"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Drawing defaults (color, stroke width, tool)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Window size and background
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Performance tuning options
    #[serde(default)]
    pub performance: PerformanceConfig,

    /// UI display preferences
    #[serde(default)]
    pub ui: UiConfig,

    /// Keyboard shortcuts
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_thickness`: 0.0 - 15.0
    /// - `canvas.width` / `canvas.height`: 200 - 8192
    /// - `canvas.background_color`: 0.0 - 1.0 per channel
    /// - `buffer_count`: 2 - 4
    pub fn validate_and_clamp(&mut self) {
        let thickness = self.drawing.default_thickness;
        if !thickness.is_finite() || !(MIN_STROKE_WIDTH..=MAX_STROKE_WIDTH).contains(&thickness) {
            warn!(
                "Invalid default_thickness {:.1}, clamping to {:.1}-{:.1} range",
                thickness, MIN_STROKE_WIDTH, MAX_STROKE_WIDTH
            );
            self.drawing.default_thickness = if thickness.is_nan() {
                MIN_STROKE_WIDTH
            } else {
                thickness.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH)
            };
        }

        let size_range = MIN_CANVAS_SIZE..=MAX_CANVAS_SIZE;
        if !size_range.contains(&self.canvas.width) {
            warn!(
                "Invalid canvas width {}, clamping to {}-{} range",
                self.canvas.width, MIN_CANVAS_SIZE, MAX_CANVAS_SIZE
            );
            self.canvas.width = self.canvas.width.clamp(MIN_CANVAS_SIZE, MAX_CANVAS_SIZE);
        }
        if !size_range.contains(&self.canvas.height) {
            warn!(
                "Invalid canvas height {}, clamping to {}-{} range",
                self.canvas.height, MIN_CANVAS_SIZE, MAX_CANVAS_SIZE
            );
            self.canvas.height = self.canvas.height.clamp(MIN_CANVAS_SIZE, MAX_CANVAS_SIZE);
        }

        for (i, channel) in self.canvas.background_color.iter_mut().enumerate() {
            if !(0.0..=1.0).contains(&*channel) {
                warn!(
                    "Invalid background_color[{}] = {:.3}, clamping to 0.0-1.0",
                    i, channel
                );
                *channel = channel.clamp(0.0, 1.0);
            }
        }

        if !(2..=4).contains(&self.performance.buffer_count) {
            warn!(
                "Invalid buffer_count {}, clamping to 2-4 range",
                self.performance.buffer_count
            );
            self.performance.buffer_count = self.performance.buffer_count.clamp(2, 4);
        }
    }

    /// Background color of the canvas as an opaque [`Color`].
    pub fn background_color(&self) -> Color {
        let [r, g, b] = self.canvas.background_color;
        Color::new(r, g, b, 1.0)
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/magic-paint/config.toml`
    /// (or under `$XDG_CONFIG_HOME` when set).
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("magic-paint");

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
        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path, or returns defaults if it does not exist.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the bundled `config.example.toml` to the user's config directory
    /// and returns the path written.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }

        fs::write(&config_path, Self::example_toml())
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// The documented example configuration shipped with the binary.
    pub fn example_toml() -> &'static str {
        include_str!("../../config.example.toml")
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> Schema {
        schemars::schema_for!(Config)
    }
}
