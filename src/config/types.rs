//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::StrategyKind;
use crate::draw::pen::{DEFAULT_MAX_WIDTH, DEFAULT_MIN_WIDTH};
use crate::input::MOUSE_FORCE;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Pen appearance and brush feel.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PenConfig {
    /// Ink color - a named color (red, green, blue, white, black) or an RGB
    /// array like `[0, 0, 0]`
    #[serde(default = "default_pen_color")]
    pub color: ColorSpec,

    /// Line width at zero force, in physical pixels (valid range: 0.0 - 64.0)
    #[serde(default = "default_min_width")]
    pub min_width: f64,

    /// Line width at full force, in physical pixels (valid range: 0.0 - 64.0)
    #[serde(default = "default_max_width")]
    pub max_width: f64,

    /// Segment strategy: "smooth" (midpoint quadratic curves) or "simple"
    /// (straight segments)
    #[serde(default)]
    pub strategy: StrategyKind,
}

impl Default for PenConfig {
    fn default() -> Self {
        Self {
            color: default_pen_color(),
            min_width: default_min_width(),
            max_width: default_max_width(),
            strategy: StrategyKind::default(),
        }
    }
}

/// Device handling options.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct InputConfig {
    /// Synthetic force reported by mouse-class devices (valid range: 0.0 - 1.0)
    #[serde(default = "default_mouse_force")]
    pub mouse_force: f64,

    /// Accept pointing-device (mouse) input
    #[serde(default = "default_true")]
    pub enable_mouse: bool,

    /// Accept multi-touch input (stylus drawing and finger gestures)
    #[serde(default = "default_true")]
    pub enable_touch: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            mouse_force: default_mouse_force(),
            enable_mouse: true,
            enable_touch: true,
        }
    }
}

/// Drawing surface geometry and background.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SurfaceConfig {
    /// Displayed width in logical pixels (valid range: 1 - 16384)
    #[serde(default = "default_surface_width")]
    pub width: f64,

    /// Displayed height in logical pixels (valid range: 1 - 16384)
    #[serde(default = "default_surface_height")]
    pub height: f64,

    /// Physical-to-logical pixel ratio (valid range: 0.25 - 8.0)
    #[serde(default = "default_pixel_ratio")]
    pub pixel_ratio: f64,

    /// Paper color the surface clears to
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: default_surface_width(),
            height: default_surface_height(),
            pixel_ratio: default_pixel_ratio(),
            background: default_background(),
        }
    }
}

fn default_pen_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_min_width() -> f64 {
    DEFAULT_MIN_WIDTH
}

fn default_max_width() -> f64 {
    DEFAULT_MAX_WIDTH
}

fn default_mouse_force() -> f64 {
    MOUSE_FORCE
}

fn default_true() -> bool {
    true
}

fn default_surface_width() -> f64 {
    800.0
}

fn default_surface_height() -> f64 {
    600.0
}

fn default_pixel_ratio() -> f64 {
    1.0
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}
