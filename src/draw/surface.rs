//! Drawing surface abstraction.
//!
//! The renderer only needs two primitives from a surface: wipe everything, and
//! stroke one path segment with a given width and color. [`CairoSurface`]
//! rasterizes them; [`RecordingSurface`] keeps them as data so replays can be
//! compared exactly.
//!
//! [`CairoSurface`]: super::CairoSurface

use super::color::Color;
use super::point::Position;

/// One stroked piece of a pen path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    /// Straight line between two points.
    Line {
        from: Position,
        to: Position,
        width: f64,
    },
    /// Quadratic Bézier from `from` to `to`, bent towards `control`.
    Quadratic {
        from: Position,
        control: Position,
        to: Position,
        width: f64,
    },
}

impl Segment {
    pub fn width(&self) -> f64 {
        match self {
            Segment::Line { width, .. } | Segment::Quadratic { width, .. } => *width,
        }
    }

    pub fn start(&self) -> Position {
        match self {
            Segment::Line { from, .. } | Segment::Quadratic { from, .. } => *from,
        }
    }

    pub fn end(&self) -> Position {
        match self {
            Segment::Line { to, .. } | Segment::Quadratic { to, .. } => *to,
        }
    }
}

/// Target the renderer draws onto.
pub trait DrawSurface {
    /// Erases the whole surface back to its background.
    fn clear(&mut self);

    /// Strokes a single segment.
    fn stroke_segment(&mut self, segment: &Segment, color: Color);
}

/// Operation captured by [`RecordingSurface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceOp {
    Clear,
    Stroke { segment: Segment, color: Color },
}

/// Surface that records every operation instead of rasterizing.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every operation since construction, in order.
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Segments stroked since the most recent clear.
    pub fn segments(&self) -> Vec<Segment> {
        let start = self
            .ops
            .iter()
            .rposition(|op| matches!(op, SurfaceOp::Clear))
            .map_or(0, |idx| idx + 1);
        self.ops[start..]
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::Stroke { segment, .. } => Some(*segment),
                SurfaceOp::Clear => None,
            })
            .collect()
    }

    pub fn clear_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::Clear))
            .count()
    }

    pub fn reset(&mut self) {
        self.ops.clear();
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.push(SurfaceOp::Clear);
    }

    fn stroke_segment(&mut self, segment: &Segment, color: Color) {
        self.ops.push(SurfaceOp::Stroke {
            segment: *segment,
            color,
        });
    }
}
