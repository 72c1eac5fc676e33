//! Configuration file support for inkpad.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/inkpad/config.toml`. Settings cover
//! pen appearance, device handling, surface geometry, and key bindings.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod keybindings;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use keybindings::{Action, KeyBinding, KeybindingsConfig};
pub use types::{InputConfig, PenConfig, SurfaceConfig};

use crate::draw::{Color, LinearWidth, color::WHITE};
use crate::input::SurfaceGeometry;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const MAX_WIDTH_LIMIT: f64 = 64.0;
const MAX_SURFACE_EDGE: f64 = 16384.0;

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [pen]
/// color = "black"
/// min_width = 0.0
/// max_width = 8.0
/// strategy = "smooth"
///
/// [input]
/// mouse_force = 0.2
///
/// [surface]
/// width = 800
/// height = 600
/// pixel_ratio = 2.0
///
/// [keybindings]
/// undo = ["Meta+Z"]
/// redo = ["Meta+Shift+Z"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Pen appearance and brush feel
    #[serde(default)]
    pub pen: PenConfig,

    /// Device handling options
    #[serde(default)]
    pub input: InputConfig,

    /// Surface geometry and background
    #[serde(default)]
    pub surface: SurfaceConfig,

    /// Undo/redo key bindings
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is
    /// logged. Validated ranges:
    /// - `pen.min_width` / `pen.max_width`: 0.0 - 64.0, with min <= max
    /// - `input.mouse_force`: 0.0 - 1.0
    /// - `surface.width` / `surface.height`: 1 - 16384
    /// - `surface.pixel_ratio`: 0.25 - 8.0
    pub fn validate_and_clamp(&mut self) {
        clamp_field("pen.min_width", &mut self.pen.min_width, 0.0, MAX_WIDTH_LIMIT);
        clamp_field("pen.max_width", &mut self.pen.max_width, 0.0, MAX_WIDTH_LIMIT);
        if self.pen.min_width > self.pen.max_width {
            warn!(
                "pen.min_width {:.1} exceeds pen.max_width {:.1}; swapping",
                self.pen.min_width, self.pen.max_width
            );
            std::mem::swap(&mut self.pen.min_width, &mut self.pen.max_width);
        }

        clamp_field("input.mouse_force", &mut self.input.mouse_force, 0.0, 1.0);

        clamp_field("surface.width", &mut self.surface.width, 1.0, MAX_SURFACE_EDGE);
        clamp_field("surface.height", &mut self.surface.height, 1.0, MAX_SURFACE_EDGE);
        clamp_field("surface.pixel_ratio", &mut self.surface.pixel_ratio, 0.25, 8.0);
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("inkpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if the file
    /// does not exist. All loaded values are validated and clamped.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or contains
    /// invalid TOML.
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

    /// Writes this configuration as TOML to `config_path`, creating parent
    /// directories. Refuses to overwrite an existing file.
    pub fn write_new(&self, config_path: &Path) -> Result<()> {
        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created config at {}", config_path.display());
        Ok(())
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Surface geometry at the configured size, anchored at the client origin.
    pub fn geometry(&self) -> SurfaceGeometry {
        SurfaceGeometry::new(
            self.surface.width,
            self.surface.height,
            self.surface.pixel_ratio,
        )
    }

    pub fn width_fn(&self) -> LinearWidth {
        LinearWidth::new(self.pen.min_width, self.pen.max_width)
    }

    pub fn pen_color(&self) -> Color {
        self.pen.color.to_color()
    }

    pub fn background(&self) -> Color {
        self.surface.background.to_color_or(WHITE)
    }
}

fn clamp_field(name: &str, value: &mut f64, min: f64, max: f64) {
    if value.is_nan() {
        warn!("Invalid {name} (NaN), using {min}");
        *value = min;
    } else if !(min..=max).contains(value) {
        warn!("Invalid {name} {value:.2}, clamping to {min}-{max} range");
        *value = value.clamp(min, max);
    }
}
