//! Stroke model and rendering.
//!
//! This module defines the drawing vocabulary and the machinery that turns it
//! into pixels:
//! - [`Point`] / [`Stroke`] / [`ImageData`]: sampled pen data
//! - [`StrokeHistory`]: committed strokes with undo/redo
//! - [`PenState`] and [`WidthFn`]: the drawing cursor and brush feel
//! - [`Renderer`]: incremental drawing and full replay through a [`DrawStrategy`]
//! - [`DrawSurface`]: the raster seam, with Cairo and recording implementations

pub mod cairo_surface;
pub mod color;
pub mod history;
pub mod pen;
pub mod point;
pub mod render;
pub mod stroke;
pub mod surface;

// Re-export commonly used types at module level
pub use cairo_surface::{CairoSurface, SurfaceError};
pub use color::Color;
pub use history::StrokeHistory;
pub use pen::{LinearWidth, PenState, WidthFn};
pub use point::{Point, Position};
pub use render::{DrawStrategy, Renderer, SimpleStrategy, SmoothStrategy, StrategyKind};
pub use stroke::{ImageData, Stroke};
pub use surface::{DrawSurface, RecordingSurface, Segment, SurfaceOp};

pub use color::{BLACK, BLUE, GREEN, RED, TRANSPARENT, WHITE};
