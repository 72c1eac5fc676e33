//! Library exports for the inkpad drawing surface.
//!
//! Exposes the stroke model, renderer, input normalizers and the surface
//! controller so that hosts can embed a drawing surface and feed it device
//! events from whatever windowing layer they use.

pub mod config;
pub mod draw;
pub mod input;
pub mod notepad;
pub mod script;
pub mod seed;
pub mod util;

pub use config::Config;
pub use notepad::{Notepad, SurfaceRegistry};
