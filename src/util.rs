//! Color name lookup shared by the config layer and the CLI.

use crate::draw::{Color, color::*};

/// Maps color name strings to Color values.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "white", "black", "transparent"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.trim().to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        "transparent" | "none" => Some(TRANSPARENT),
        _ => None,
    }
}
