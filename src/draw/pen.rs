//! Pen cursor state and force-to-width mapping.

use super::point::Position;
use std::fmt;

/// Default thinnest line, at zero force.
pub const DEFAULT_MIN_WIDTH: f64 = 0.0;
/// Default widest line, at full force.
pub const DEFAULT_MAX_WIDTH: f64 = 8.0;

/// Maps normalized force to a line width in physical pixels.
///
/// Implementations define the brush feel; the renderer only ever asks for a
/// width. Closures `Fn(f64) -> f64` work directly.
pub trait WidthFn {
    fn width(&self, force: f64) -> f64;
}

impl<F> WidthFn for F
where
    F: Fn(f64) -> f64,
{
    fn width(&self, force: f64) -> f64 {
        self(force)
    }
}

/// Linear interpolation between `min` and `max` ("fountain pen").
///
/// Force is not clamped here; callers hand in normalized values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearWidth {
    pub min: f64,
    pub max: f64,
}

impl LinearWidth {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl Default for LinearWidth {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_WIDTH, DEFAULT_MAX_WIDTH)
    }
}

impl WidthFn for LinearWidth {
    fn width(&self, force: f64) -> f64 {
        self.min + force * (self.max - self.min)
    }
}

/// Mutable drawing cursor owned by one controller.
///
/// `position` is where the next segment starts and `control` is the pending
/// control point for the smoothed strategy. Both are reset by every
/// `begin_stroke`.
pub struct PenState {
    pub position: Position,
    pub control: Position,
    pub drawing: bool,
    width: Box<dyn WidthFn>,
}

impl PenState {
    pub fn new(width: impl WidthFn + 'static) -> Self {
        Self {
            position: Position::default(),
            control: Position::default(),
            drawing: false,
            width: Box::new(width),
        }
    }

    /// Line width for a sample with the given force.
    pub fn width(&self, force: f64) -> f64 {
        self.width.width(force)
    }

    /// Swaps the brush feel without touching position state.
    pub fn set_width_fn(&mut self, width: impl WidthFn + 'static) {
        self.width = Box::new(width);
    }

    /// Moves both the position and the control point to `at`.
    pub fn reset_to(&mut self, at: Position) {
        self.position = at;
        self.control = at;
    }
}

impl Default for PenState {
    fn default() -> Self {
        Self::new(LinearWidth::default())
    }
}

impl fmt::Debug for PenState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PenState")
            .field("position", &self.position)
            .field("control", &self.control)
            .field("drawing", &self.drawing)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_width_hits_bounds() {
        let width = LinearWidth::default();
        assert_eq!(width.width(0.0), DEFAULT_MIN_WIDTH);
        assert_eq!(width.width(1.0), DEFAULT_MAX_WIDTH);
        assert_eq!(width.width(0.5), 4.0);
    }

    #[test]
    fn linear_width_is_monotonic() {
        let width = LinearWidth::new(1.0, 9.0);
        let samples: Vec<f64> = (0..=20).map(|i| width.width(i as f64 / 20.0)).collect();
        assert!(samples.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn force_is_not_clamped() {
        let width = LinearWidth::default();
        assert_eq!(width.width(2.0), 16.0);
    }

    #[test]
    fn closure_width_fn_plugs_in() {
        let mut pen = PenState::default();
        pen.set_width_fn(|force: f64| 2.0 + force * force);
        assert_eq!(pen.width(1.0), 3.0);
    }

    #[test]
    fn reset_moves_position_and_control() {
        let mut pen = PenState::default();
        pen.reset_to(Position::new(4.0, 5.0));
        assert_eq!(pen.position, Position::new(4.0, 5.0));
        assert_eq!(pen.control, Position::new(4.0, 5.0));
    }
}
