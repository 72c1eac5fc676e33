//! Canonical pen events and the raw device vocabulary they are built from.

use super::modifiers::Modifiers;
use serde::{Deserialize, Serialize};

/// Device-independent event consumed by the controller.
///
/// Coordinates are surface-relative physical pixels. This is the only thing
/// that crosses from the input normalizers into the controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PenEvent {
    PenDown { x: f64, y: f64 },
    PenMove { x: f64, y: f64, force: f64 },
    PenUp,
    Undo,
    Redo,
}

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    /// Primary drawing button
    Left,
    Right,
    Middle,
}

/// Raw pointing-device signal in client (viewport) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MouseEvent {
    Down {
        button: MouseButton,
        client_x: f64,
        client_y: f64,
    },
    Up {
        button: MouseButton,
    },
    Move {
        client_x: f64,
        client_y: f64,
    },
    /// Pointer left the surface.
    Leave,
}

/// What touched the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    /// Pressure-capable pen tip.
    Stylus,
    /// Finger or any other plain contact.
    #[default]
    Direct,
}

/// One active touch point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub client_x: f64,
    pub client_y: f64,
    /// Reported pressure, nominally in `[0, 1]`.
    #[serde(default)]
    pub force: f64,
    #[serde(default)]
    pub kind: ContactKind,
}

impl Contact {
    pub fn finger(client_x: f64, client_y: f64) -> Self {
        Self {
            client_x,
            client_y,
            force: 0.0,
            kind: ContactKind::Direct,
        }
    }

    pub fn stylus(client_x: f64, client_y: f64, force: f64) -> Self {
        Self {
            client_x,
            client_y,
            force,
            kind: ContactKind::Stylus,
        }
    }

    pub fn is_stylus(&self) -> bool {
        self.kind == ContactKind::Stylus
    }
}

/// Lifecycle phase of a multi-touch signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// Raw multi-touch signal. `touches` lists every contact still on the
/// surface when the signal fired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    #[serde(default)]
    pub touches: Vec<Contact>,
}

impl TouchEvent {
    pub fn new(phase: TouchPhase, touches: Vec<Contact>) -> Self {
        Self { phase, touches }
    }

    pub fn stylus(&self) -> Option<&Contact> {
        self.touches.iter().find(|contact| contact.is_stylus())
    }
}

/// Surface-scoped device signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "device", content = "event", rename_all = "snake_case")]
pub enum DeviceEvent {
    Mouse(MouseEvent),
    Touch(TouchEvent),
}

/// Generic key representation for cross-backend compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    Escape,
    Return,
    Backspace,
    Tab,
    Space,
    /// Unmapped or unrecognized key
    Unknown,
}

impl Key {
    /// Name used when matching against configured key bindings.
    pub fn binding_name(&self) -> Option<String> {
        match self {
            Key::Char(c) => Some(c.to_string()),
            Key::Escape => Some("Escape".to_string()),
            Key::Return => Some("Return".to_string()),
            Key::Backspace => Some("Backspace".to_string()),
            Key::Tab => Some("Tab".to_string()),
            Key::Space => Some("Space".to_string()),
            Key::Unknown => None,
        }
    }
}

/// Global key press together with the modifiers held at the time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: Key,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }
}
