//! Incremental and replay rendering of pen strokes.
//!
//! The geometry of each segment comes from a [`DrawStrategy`] chosen when the
//! [`Renderer`] is built; the renderer itself only forwards segments to its
//! [`DrawSurface`].

use super::color::Color;
use super::pen::PenState;
use super::point::{Point, Position};
use super::stroke::Stroke;
use super::surface::{DrawSurface, Segment};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Turns the next pen sample into a segment and advances the pen.
pub trait DrawStrategy {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Computes the segment ending at (or near) `point` and updates `pen`.
    fn next_segment(&self, pen: &mut PenState, point: &Point) -> Segment;
}

/// Midpoint quadratic smoothing.
///
/// Each raw sample becomes the control point of the following curve, and the
/// curve ends halfway between the previous control point and the new sample.
/// The drawn path trails the samples by half a segment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmoothStrategy;

impl DrawStrategy for SmoothStrategy {
    fn name(&self) -> &'static str {
        "smooth"
    }

    fn next_segment(&self, pen: &mut PenState, point: &Point) -> Segment {
        let sample = point.position();
        let mid = sample.midpoint(pen.control);
        let segment = Segment::Quadratic {
            from: pen.position,
            control: pen.control,
            to: mid,
            width: pen.width(point.force),
        };
        pen.control = sample;
        pen.position = mid;
        segment
    }
}

/// One straight segment per consecutive sample pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleStrategy;

impl DrawStrategy for SimpleStrategy {
    fn name(&self) -> &'static str {
        "simple"
    }

    fn next_segment(&self, pen: &mut PenState, point: &Point) -> Segment {
        let sample = point.position();
        let segment = Segment::Line {
            from: pen.position,
            to: sample,
            width: pen.width(point.force),
        };
        pen.position = sample;
        segment
    }
}

/// Strategy selector used by configuration and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    #[default]
    Smooth,
    Simple,
}

impl StrategyKind {
    pub fn build(self) -> Box<dyn DrawStrategy> {
        match self {
            StrategyKind::Smooth => Box::new(SmoothStrategy),
            StrategyKind::Simple => Box::new(SimpleStrategy),
        }
    }
}

impl std::str::FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "smooth" => Ok(StrategyKind::Smooth),
            "simple" => Ok(StrategyKind::Simple),
            other => Err(format!("unknown draw strategy '{other}' (expected smooth or simple)")),
        }
    }
}

/// Draws pen input onto a surface.
///
/// Holds no stroke data of its own: the pen cursor is borrowed from the
/// controller on every call, and replays take the stroke list as an argument.
pub struct Renderer<S: DrawSurface> {
    surface: S,
    strategy: Box<dyn DrawStrategy>,
    color: Color,
}

impl<S: DrawSurface> Renderer<S> {
    pub fn new(surface: S, strategy: Box<dyn DrawStrategy>, color: Color) -> Self {
        log::debug!("Renderer using {} strategy", strategy.name());
        Self {
            surface,
            strategy,
            color,
        }
    }

    pub fn with_kind(surface: S, kind: StrategyKind, color: Color) -> Self {
        Self::new(surface, kind.build(), color)
    }

    /// Anchors a new stroke at `at` without drawing anything.
    pub fn begin_stroke(&mut self, pen: &mut PenState, at: Position) {
        pen.reset_to(at);
    }

    /// Extends the current stroke to `point`.
    pub fn draw_to(&mut self, pen: &mut PenState, point: &Point) {
        let segment = self.strategy.next_segment(pen, point);
        self.surface.stroke_segment(&segment, self.color);
    }

    /// Replays one complete stroke. Strokes under two points leave no mark.
    pub fn draw_stroke(&mut self, pen: &mut PenState, stroke: &Stroke) {
        let Some((first, rest)) = stroke.points().split_first() else {
            return;
        };
        if rest.is_empty() {
            return;
        }

        self.begin_stroke(pen, first.position());
        for point in rest {
            self.draw_to(pen, point);
        }
    }

    /// Clears the surface and redraws `strokes` in order.
    pub fn refresh(&mut self, pen: &mut PenState, strokes: &[Stroke]) {
        self.clear();
        for stroke in strokes {
            self.draw_stroke(pen, stroke);
        }
    }

    pub fn clear(&mut self) {
        self.surface.clear();
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
