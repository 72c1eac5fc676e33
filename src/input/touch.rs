//! Multi-touch normalization.
//!
//! Only a stylus contact draws. Plain contacts act as gesture triggers when
//! they land: two fingers undo, three fingers redo.

use super::events::{PenEvent, TouchEvent, TouchPhase};
use super::geometry::SurfaceGeometry;
use log::{debug, trace};

/// Contacts at touch start that trigger undo.
pub const UNDO_CONTACTS: usize = 2;
/// Contacts at touch start that trigger redo.
pub const REDO_CONTACTS: usize = 3;

/// Translates touch signals into pen events.
#[derive(Debug, Clone, Default)]
pub struct TouchInput;

impl TouchInput {
    pub fn new() -> Self {
        Self
    }

    /// Returns the pen event for `event`, if any. `Some` means the signal was
    /// consumed and the platform default (scroll, zoom) should be suppressed.
    pub fn on_event(&mut self, geometry: &SurfaceGeometry, event: &TouchEvent) -> Option<PenEvent> {
        match event.phase {
            TouchPhase::Start => match event.stylus() {
                Some(stylus) => {
                    let (x, y) = geometry.to_surface(stylus.client_x, stylus.client_y)?;
                    Some(PenEvent::PenDown { x, y })
                }
                None => gesture_for(event.touches.len()),
            },
            TouchPhase::Move => {
                let Some(stylus) = event.stylus() else {
                    trace!("Touch move without a stylus contact; ignoring");
                    return None;
                };
                let (x, y) = geometry.to_surface(stylus.client_x, stylus.client_y)?;
                Some(PenEvent::PenMove {
                    x,
                    y,
                    force: normalize_force(stylus.force),
                })
            }
            TouchPhase::End | TouchPhase::Cancel => Some(PenEvent::PenUp),
        }
    }
}

fn gesture_for(contacts: usize) -> Option<PenEvent> {
    match contacts {
        UNDO_CONTACTS => {
            debug!("Two-finger tap: undo");
            Some(PenEvent::Undo)
        }
        REDO_CONTACTS => {
            debug!("Three-finger tap: redo");
            Some(PenEvent::Redo)
        }
        _ => None,
    }
}

/// Stylus force should already be in `[0, 1]`; out-of-range or NaN readings
/// are pinned to the nearest valid value.
fn normalize_force(force: f64) -> f64 {
    if force.is_nan() {
        0.0
    } else {
        force.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::events::Contact;

    fn fingers(count: usize) -> Vec<Contact> {
        (0..count)
            .map(|i| Contact::finger(10.0 * i as f64, 10.0))
            .collect()
    }

    fn start(touches: Vec<Contact>) -> TouchEvent {
        TouchEvent::new(TouchPhase::Start, touches)
    }

    #[test]
    fn gesture_thresholds() {
        let geometry = SurfaceGeometry::default();
        let mut touch = TouchInput::new();

        assert_eq!(touch.on_event(&geometry, &start(fingers(1))), None);
        assert_eq!(
            touch.on_event(&geometry, &start(fingers(2))),
            Some(PenEvent::Undo)
        );
        assert_eq!(
            touch.on_event(&geometry, &start(fingers(3))),
            Some(PenEvent::Redo)
        );
        assert_eq!(touch.on_event(&geometry, &start(fingers(4))), None);
        assert_eq!(touch.on_event(&geometry, &start(fingers(5))), None);
    }

    #[test]
    fn stylus_start_is_pen_down_not_gesture() {
        let geometry = SurfaceGeometry::new(100.0, 100.0, 2.0);
        let mut touch = TouchInput::new();
        let touches = vec![Contact::finger(1.0, 1.0), Contact::stylus(5.0, 6.0, 0.7)];

        assert_eq!(
            touch.on_event(&geometry, &start(touches)),
            Some(PenEvent::PenDown { x: 10.0, y: 12.0 })
        );
    }

    #[test]
    fn only_stylus_moves_the_pen() {
        let geometry = SurfaceGeometry::default();
        let mut touch = TouchInput::new();

        let finger_only = TouchEvent::new(TouchPhase::Move, vec![Contact::finger(3.0, 3.0)]);
        assert_eq!(touch.on_event(&geometry, &finger_only), None);

        let mixed = TouchEvent::new(
            TouchPhase::Move,
            vec![Contact::finger(3.0, 3.0), Contact::stylus(7.0, 8.0, 0.35)],
        );
        assert_eq!(
            touch.on_event(&geometry, &mixed),
            Some(PenEvent::PenMove {
                x: 7.0,
                y: 8.0,
                force: 0.35
            })
        );
    }

    #[test]
    fn end_and_cancel_lift_the_pen() {
        let geometry = SurfaceGeometry::default();
        let mut touch = TouchInput::new();
        for phase in [TouchPhase::End, TouchPhase::Cancel] {
            assert_eq!(
                touch.on_event(&geometry, &TouchEvent::new(phase, Vec::new())),
                Some(PenEvent::PenUp)
            );
        }
    }

    #[test]
    fn stylus_force_is_kept_in_range() {
        assert_eq!(normalize_force(0.4), 0.4);
        assert_eq!(normalize_force(1.7), 1.0);
        assert_eq!(normalize_force(-0.1), 0.0);
        assert_eq!(normalize_force(f64::NAN), 0.0);
    }
}
