//! Canonical event handling (the controller state machine).

use crate::draw::{DrawSurface, Point, Position, Stroke};
use crate::input::{DeviceEvent, PenEvent};
use log::debug;

use super::{DrawingState, Notepad};

impl<S: DrawSurface> Notepad<S> {
    /// Feeds a raw surface-scoped device signal through the normalizer.
    ///
    /// Returns `true` when the signal produced a canonical event, meaning the
    /// caller should suppress the platform's default handling of it.
    pub fn handle_device(&mut self, event: &DeviceEvent) -> bool {
        match self.normalizer.on_device(event) {
            Some(pen_event) => {
                self.handle(pen_event);
                true
            }
            None => false,
        }
    }

    /// Processes one canonical event to completion.
    pub fn handle(&mut self, event: PenEvent) {
        match event {
            PenEvent::PenDown { x, y } => self.pen_down(x, y),
            PenEvent::PenMove { x, y, force } => self.pen_move(Point::new(x, y, force)),
            PenEvent::PenUp => self.pen_up(),
            PenEvent::Undo => {
                self.history.undo();
                self.replay();
            }
            PenEvent::Redo => {
                self.history.redo();
                self.replay();
            }
        }
    }

    fn pen_down(&mut self, x: f64, y: f64) {
        if self.is_drawing() {
            // A second down without an up: close the open stroke first.
            debug!("PenDown while drawing; committing the open stroke");
            self.pen_up();
        }

        let mut stroke = Stroke::new();
        stroke.push(Point::anchor(x, y));
        self.pen.drawing = true;
        self.renderer.begin_stroke(&mut self.pen, Position::new(x, y));
        self.state = DrawingState::Drawing { stroke };
    }

    fn pen_move(&mut self, point: Point) {
        let DrawingState::Drawing { stroke } = &mut self.state else {
            return;
        };
        stroke.push(point);
        self.renderer.draw_to(&mut self.pen, &point);
    }

    fn pen_up(&mut self) {
        let DrawingState::Drawing { stroke } = std::mem::take(&mut self.state) else {
            return;
        };
        self.pen.drawing = false;
        debug!("Committing stroke with {} point(s)", stroke.len());
        self.history.commit(stroke);
    }

    /// Redraws the visible history. A stroke still in progress is drawn on
    /// top so it survives an undo/redo issued mid-stroke.
    fn replay(&mut self) {
        let (position, control) = (self.pen.position, self.pen.control);
        self.renderer.refresh(&mut self.pen, self.history.visible());
        if let DrawingState::Drawing { stroke } = &self.state {
            self.renderer.draw_stroke(&mut self.pen, stroke);
        }
        self.pen.position = position;
        self.pen.control = control;
    }
}
