//! Surface controller and the registry that routes global input to it.

mod core;
mod pen_events;
mod registry;

pub use self::core::{DrawingState, Notepad};
pub use registry::{SurfaceId, SurfaceRegistry};
