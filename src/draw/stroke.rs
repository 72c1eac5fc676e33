//! Strokes and the seed/output document that carries them.

use super::point::Point;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// One continuous path from pen-down to pen-up, in sample order.
///
/// A stroke is only appended to while it is the controller's in-progress
/// stroke. Once committed to [`StrokeHistory`](super::StrokeHistory) it is
/// never mutated again.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stroke {
    points: Vec<Point>,
}

impl Stroke {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether a replay of this stroke leaves a mark (needs two samples).
    pub fn is_drawable(&self) -> bool {
        self.points.len() > 1
    }
}

impl From<Vec<Point>> for Stroke {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl FromIterator<Point> for Stroke {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

/// Stroke document exchanged with the outside world.
///
/// ```json
/// { "strokes": [[{"x": 10, "y": 10, "force": 0}, {"x": 20, "y": 10, "force": 0.5}]] }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImageData {
    #[serde(default)]
    pub strokes: Vec<Stroke>,
}

impl ImageData {
    pub fn new(strokes: Vec<Stroke>) -> Self {
        Self { strokes }
    }

    /// Parses seed data, falling back to an empty document when the input is
    /// absent or malformed.
    pub fn parse_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            debug!("No seed stroke data supplied; starting empty");
            return Self::default();
        };

        match serde_json::from_str(raw) {
            Ok(data) => data,
            Err(err) => {
                warn!("Ignoring malformed seed stroke data: {err}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_document() {
        let data = ImageData::parse_or_default(Some(
            r#"{"strokes": [[{"x": 1, "y": 2, "force": 0.3}, {"x": 3, "y": 4, "force": 0.6}], []]}"#,
        ));
        assert_eq!(data.strokes.len(), 2);
        assert_eq!(data.strokes[0].points()[1], Point::new(3.0, 4.0, 0.6));
        assert!(data.strokes[1].is_empty());
    }

    #[test]
    fn malformed_or_absent_seed_is_empty() {
        assert!(ImageData::parse_or_default(None).strokes.is_empty());
        assert!(ImageData::parse_or_default(Some("not json")).strokes.is_empty());
        assert!(
            ImageData::parse_or_default(Some(r#"{"strokes": [[{"x": "a"}]]}"#))
                .strokes
                .is_empty()
        );
    }

    #[test]
    fn missing_strokes_key_is_empty() {
        assert!(ImageData::parse_or_default(Some("{}")).strokes.is_empty());
    }

    #[test]
    fn drawable_needs_two_points() {
        let mut stroke = Stroke::new();
        assert!(!stroke.is_drawable());
        stroke.push(Point::anchor(0.0, 0.0));
        assert!(!stroke.is_drawable());
        stroke.push(Point::new(1.0, 1.0, 0.2));
        assert!(stroke.is_drawable());
    }
}
