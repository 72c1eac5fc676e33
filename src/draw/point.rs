//! Sampled pen points.

use serde::{Deserialize, Serialize};

/// A plain 2D location on the drawing surface, in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Halfway point between `self` and `other`.
    pub fn midpoint(self, other: Position) -> Position {
        Position {
            x: 0.5 * (self.x + other.x),
            y: 0.5 * (self.y + other.y),
        }
    }
}

/// One pen sample: surface coordinates plus normalized force.
///
/// `force` is in `[0, 1]` for move samples. The pen-down sample that opens a
/// stroke carries `0.0`; nothing reads it, since the first point only anchors
/// the curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub force: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64, force: f64) -> Self {
        Self { x, y, force }
    }

    /// Pen-down anchor without a meaningful force.
    pub const fn anchor(x: f64, y: f64) -> Self {
        Self { x, y, force: 0.0 }
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

impl From<Point> for Position {
    fn from(point: Point) -> Self {
        point.position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_is_halfway() {
        let mid = Position::new(0.0, 10.0).midpoint(Position::new(20.0, 30.0));
        assert_eq!(mid, Position::new(10.0, 20.0));
    }

    #[test]
    fn missing_force_deserializes_as_zero() {
        let point: Point = serde_json::from_str(r#"{"x": 1.5, "y": 2}"#).unwrap();
        assert_eq!(point, Point::anchor(1.5, 2.0));
    }
}
