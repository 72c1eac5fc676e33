//! Device input normalization.
//!
//! Mouse, touch and keyboard signals are translated into one canonical
//! [`PenEvent`] stream. Device quirks (fixed mouse force, stylus-versus-finger
//! contacts, gesture taps, global key bindings) stay inside this module.

pub mod events;
pub mod geometry;
pub mod keyboard;
pub mod modifiers;
pub mod mouse;
pub mod normalizer;
pub mod touch;

// Re-export commonly used types at module level
pub use events::{
    Contact, ContactKind, DeviceEvent, Key, KeyEvent, MouseButton, MouseEvent, PenEvent,
    TouchEvent, TouchPhase,
};
pub use geometry::SurfaceGeometry;
pub use keyboard::KeyboardInput;
pub use modifiers::Modifiers;
pub use mouse::{MOUSE_FORCE, MouseInput};
pub use normalizer::InputNormalizer;
pub use touch::TouchInput;
