//! Keyboard modifier state tracking.

use serde::{Deserialize, Serialize};

/// Keyboard modifier state.
///
/// Tracks which modifier keys (Shift, Ctrl, Alt, Meta) are held for a key
/// event. `meta` is the Command/Super key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    /// Shift key pressed
    pub shift: bool,
    /// Ctrl key pressed
    pub ctrl: bool,
    /// Alt key pressed
    pub alt: bool,
    /// Meta/Command/Super key pressed
    pub meta: bool,
}

impl Modifiers {
    /// Creates a new Modifiers instance with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn meta() -> Self {
        Self {
            meta: true,
            ..Self::default()
        }
    }

    pub fn meta_shift() -> Self {
        Self {
            meta: true,
            shift: true,
            ..Self::default()
        }
    }
}
