//! Mapping between client coordinates and surface pixels.

use serde::{Deserialize, Serialize};

/// Where the drawing surface sits and how dense its pixels are.
///
/// `origin_*` is the surface's top-left corner in client coordinates,
/// `width`/`height` its displayed (logical) size, and `pixel_ratio` the
/// physical-to-logical pixel ratio of the display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceGeometry {
    pub origin_x: f64,
    pub origin_y: f64,
    pub width: f64,
    pub height: f64,
    pub pixel_ratio: f64,
}

impl SurfaceGeometry {
    pub fn new(width: f64, height: f64, pixel_ratio: f64) -> Self {
        Self {
            origin_x: 0.0,
            origin_y: 0.0,
            width,
            height,
            pixel_ratio,
        }
    }

    pub fn with_origin(mut self, origin_x: f64, origin_y: f64) -> Self {
        self.origin_x = origin_x;
        self.origin_y = origin_y;
        self
    }

    /// Converts a client position to surface pixels: relative to the
    /// top-left corner, scaled so one unit is one physical pixel.
    ///
    /// Returns `None` for non-finite input.
    pub fn to_surface(&self, client_x: f64, client_y: f64) -> Option<(f64, f64)> {
        if !client_x.is_finite() || !client_y.is_finite() {
            return None;
        }
        Some((
            self.pixel_ratio * (client_x - self.origin_x),
            self.pixel_ratio * (client_y - self.origin_y),
        ))
    }

    /// Pixel buffer size: displayed size times the pixel ratio.
    ///
    /// Fractional pixels are dropped; the result is at least 1x1.
    pub fn buffer_size(&self) -> (i32, i32) {
        let scale = |logical: f64| -> i32 {
            let physical = (self.pixel_ratio * logical).floor();
            if physical.is_finite() {
                physical.clamp(1.0, i32::MAX as f64) as i32
            } else {
                1
            }
        };
        (scale(self.width), scale(self.height))
    }
}

impl Default for SurfaceGeometry {
    fn default() -> Self {
        Self::new(800.0, 600.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_coordinates_are_relative_and_scaled() {
        let geometry = SurfaceGeometry::new(400.0, 300.0, 2.0).with_origin(50.0, 20.0);
        assert_eq!(geometry.to_surface(60.0, 25.0), Some((20.0, 10.0)));
        assert_eq!(geometry.to_surface(50.0, 20.0), Some((0.0, 0.0)));
    }

    #[test]
    fn non_finite_input_is_rejected() {
        let geometry = SurfaceGeometry::default();
        assert_eq!(geometry.to_surface(f64::NAN, 1.0), None);
        assert_eq!(geometry.to_surface(1.0, f64::INFINITY), None);
    }

    #[test]
    fn buffer_size_scales_with_ratio() {
        assert_eq!(SurfaceGeometry::new(400.0, 300.0, 2.0).buffer_size(), (800, 600));
        assert_eq!(SurfaceGeometry::new(101.0, 51.0, 1.5).buffer_size(), (151, 76));
        assert_eq!(SurfaceGeometry::new(0.0, 10.0, 1.0).buffer_size(), (1, 10));
    }
}
