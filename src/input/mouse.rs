//! Pointing-device normalization.

use super::events::{MouseButton, MouseEvent, PenEvent};
use super::geometry::SurfaceGeometry;
use log::trace;

/// Force reported for every mouse move; mice have no pressure sensor.
pub const MOUSE_FORCE: f64 = 0.2;

/// Translates mouse signals into pen events.
///
/// Only the left button draws. Moves are reported only while it is held, and
/// leaving the surface lifts the pen.
#[derive(Debug, Clone)]
pub struct MouseInput {
    force: f64,
    pressed: bool,
}

impl Default for MouseInput {
    fn default() -> Self {
        Self::new(MOUSE_FORCE)
    }
}

impl MouseInput {
    pub fn new(force: f64) -> Self {
        Self {
            force,
            pressed: false,
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Returns the pen event for `event`, if any. `Some` means the signal was
    /// consumed and the platform default should be suppressed.
    pub fn on_event(&mut self, geometry: &SurfaceGeometry, event: &MouseEvent) -> Option<PenEvent> {
        match *event {
            MouseEvent::Down {
                button: MouseButton::Left,
                client_x,
                client_y,
            } => {
                let (x, y) = geometry.to_surface(client_x, client_y)?;
                self.pressed = true;
                Some(PenEvent::PenDown { x, y })
            }
            MouseEvent::Move { client_x, client_y } if self.pressed => {
                let (x, y) = geometry.to_surface(client_x, client_y)?;
                Some(PenEvent::PenMove {
                    x,
                    y,
                    force: self.force,
                })
            }
            MouseEvent::Up {
                button: MouseButton::Left,
            }
            | MouseEvent::Leave
                if self.pressed =>
            {
                self.pressed = false;
                Some(PenEvent::PenUp)
            }
            _ => {
                trace!("Ignoring mouse signal {event:?}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn down(x: f64, y: f64) -> MouseEvent {
        MouseEvent::Down {
            button: MouseButton::Left,
            client_x: x,
            client_y: y,
        }
    }

    fn motion(x: f64, y: f64) -> MouseEvent {
        MouseEvent::Move {
            client_x: x,
            client_y: y,
        }
    }

    #[test]
    fn press_drag_release() {
        let geometry = SurfaceGeometry::new(100.0, 100.0, 2.0).with_origin(10.0, 10.0);
        let mut mouse = MouseInput::default();

        assert_eq!(
            mouse.on_event(&geometry, &down(15.0, 20.0)),
            Some(PenEvent::PenDown { x: 10.0, y: 20.0 })
        );
        assert_eq!(
            mouse.on_event(&geometry, &motion(20.0, 20.0)),
            Some(PenEvent::PenMove {
                x: 20.0,
                y: 20.0,
                force: MOUSE_FORCE
            })
        );
        assert_eq!(
            mouse.on_event(
                &geometry,
                &MouseEvent::Up {
                    button: MouseButton::Left
                }
            ),
            Some(PenEvent::PenUp)
        );
        assert!(!mouse.is_pressed());
    }

    #[test]
    fn hover_does_not_move_pen() {
        let geometry = SurfaceGeometry::default();
        let mut mouse = MouseInput::default();
        assert_eq!(mouse.on_event(&geometry, &motion(5.0, 5.0)), None);
        assert_eq!(mouse.on_event(&geometry, &MouseEvent::Leave), None);
    }

    #[test]
    fn force_is_constant_for_every_move() {
        let geometry = SurfaceGeometry::default();
        let mut mouse = MouseInput::default();
        mouse.on_event(&geometry, &down(0.0, 0.0));

        for i in 0..50 {
            // Vary both distance and direction between samples.
            let step = (i * i) as f64;
            match mouse.on_event(&geometry, &motion(step, 400.0 - step)) {
                Some(PenEvent::PenMove { force, .. }) => assert_eq!(force, 0.2),
                other => panic!("expected PenMove, got {other:?}"),
            }
        }
    }

    #[test]
    fn leaving_surface_lifts_pen() {
        let geometry = SurfaceGeometry::default();
        let mut mouse = MouseInput::default();
        mouse.on_event(&geometry, &down(1.0, 1.0));
        assert_eq!(
            mouse.on_event(&geometry, &MouseEvent::Leave),
            Some(PenEvent::PenUp)
        );
        assert_eq!(mouse.on_event(&geometry, &motion(2.0, 2.0)), None);
    }

    #[test]
    fn other_buttons_are_ignored() {
        let geometry = SurfaceGeometry::default();
        let mut mouse = MouseInput::default();
        let right = MouseEvent::Down {
            button: MouseButton::Right,
            client_x: 1.0,
            client_y: 1.0,
        };
        assert_eq!(mouse.on_event(&geometry, &right), None);
        assert!(!mouse.is_pressed());
    }
}
