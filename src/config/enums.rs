//! Configuration enum types.

use crate::draw::{Color, color::BLACK};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// color = "black"
///
/// # Custom RGB color (0-255 per component)
/// color = [32, 64, 160]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: red, green, blue, white, black, transparent
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`].
    ///
    /// Unknown color names fall back to `fallback` with a warning.
    pub fn to_color_or(&self, fallback: Color) -> Color {
        match self {
            ColorSpec::Name(name) => crate::util::name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using fallback", name);
                fallback
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }

    /// Converts to a [`Color`], defaulting unknown names to black ink.
    pub fn to_color(&self) -> Color {
        self.to_color_or(BLACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{RED, WHITE};

    #[test]
    fn named_and_rgb_colors() {
        assert_eq!(ColorSpec::Name("Red".into()).to_color(), RED);
        assert_eq!(
            ColorSpec::Rgb([255, 255, 255]).to_color(),
            WHITE
        );
    }

    #[test]
    fn unknown_name_uses_fallback() {
        assert_eq!(ColorSpec::Name("mauve".into()).to_color_or(WHITE), WHITE);
    }
}
