//! Cairo-backed raster surface.

use super::color::Color;
use super::point::Position;
use super::surface::{DrawSurface, Segment};
use std::fs::File;
use std::path::Path;
use thiserror::Error;

/// Failures of the raster collaborator (the core itself never fails).
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("invalid surface size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },

    #[error("failed to create cairo surface: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("failed to encode PNG: {0}")]
    Png(#[from] cairo::IoError),

    #[error("failed to open output file: {0}")]
    Io(#[from] std::io::Error),
}

/// ARGB32 image surface sized in physical pixels.
pub struct CairoSurface {
    surface: cairo::ImageSurface,
    ctx: cairo::Context,
    background: Color,
}

impl CairoSurface {
    /// Creates a pixel buffer of `width`x`height` physical pixels, cleared to
    /// `background`.
    pub fn new(width: i32, height: i32, background: Color) -> Result<Self, SurfaceError> {
        if width <= 0 || height <= 0 {
            return Err(SurfaceError::InvalidSize { width, height });
        }
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        let ctx = cairo::Context::new(&surface)?;
        ctx.set_line_cap(cairo::LineCap::Round);
        ctx.set_line_join(cairo::LineJoin::Round);

        let mut this = Self {
            surface,
            ctx,
            background,
        };
        this.clear();
        Ok(this)
    }

    pub fn width(&self) -> i32 {
        self.surface.width()
    }

    pub fn height(&self) -> i32 {
        self.surface.height()
    }

    /// Encodes the current pixels as PNG at `path`.
    pub fn write_png(&self, path: &Path) -> Result<(), SurfaceError> {
        self.surface.flush();
        let mut file = File::create(path)?;
        self.surface.write_to_png(&mut file)?;
        Ok(())
    }

    /// Releases the drawing context and hands back the pixel buffer.
    pub fn into_image_surface(self) -> cairo::ImageSurface {
        let Self { surface, ctx, .. } = self;
        drop(ctx);
        surface.flush();
        surface
    }
}

impl DrawSurface for CairoSurface {
    fn clear(&mut self) {
        let bg = self.background;
        let _ = self.ctx.save();
        self.ctx.set_operator(cairo::Operator::Source);
        self.ctx.set_source_rgba(bg.r, bg.g, bg.b, bg.a);
        let _ = self.ctx.paint(); // a failed paint leaves the old pixels
        let _ = self.ctx.restore();
    }

    fn stroke_segment(&mut self, segment: &Segment, color: Color) {
        self.ctx.set_source_rgba(color.r, color.g, color.b, color.a);
        self.ctx.set_line_width(segment.width());

        match *segment {
            Segment::Line { from, to, .. } => {
                self.ctx.move_to(from.x, from.y);
                self.ctx.line_to(to.x, to.y);
            }
            Segment::Quadratic {
                from, control, to, ..
            } => {
                let (c1, c2) = quadratic_to_cubic(from, control, to);
                self.ctx.move_to(from.x, from.y);
                self.ctx.curve_to(c1.x, c1.y, c2.x, c2.y, to.x, to.y);
            }
        }

        let _ = self.ctx.stroke();
    }
}

/// Cubic control points describing the same curve as a quadratic.
fn quadratic_to_cubic(from: Position, control: Position, to: Position) -> (Position, Position) {
    const TWO_THIRDS: f64 = 2.0 / 3.0;
    let c1 = Position::new(
        from.x + TWO_THIRDS * (control.x - from.x),
        from.y + TWO_THIRDS * (control.y - from.y),
    );
    let c2 = Position::new(
        to.x + TWO_THIRDS * (control.x - to.x),
        to.y + TWO_THIRDS * (control.y - to.y),
    );
    (c1, c2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_quadratic_stays_on_line() {
        let (c1, c2) = quadratic_to_cubic(
            Position::new(0.0, 0.0),
            Position::new(3.0, 0.0),
            Position::new(6.0, 0.0),
        );
        assert_eq!(c1, Position::new(2.0, 0.0));
        assert_eq!(c2, Position::new(4.0, 0.0));
    }

    #[test]
    fn rejects_empty_size() {
        assert!(matches!(
            CairoSurface::new(0, 10, Color::default()),
            Err(SurfaceError::InvalidSize { .. })
        ));
    }
}
