//! Per-surface input normalization.

use super::events::{DeviceEvent, PenEvent};
use super::geometry::SurfaceGeometry;
use super::mouse::MouseInput;
use super::touch::TouchInput;
use crate::config::InputConfig;
use log::debug;

/// Combines the surface-scoped device normalizers for one surface.
#[derive(Debug, Clone)]
pub struct InputNormalizer {
    geometry: SurfaceGeometry,
    mouse: Option<MouseInput>,
    touch: Option<TouchInput>,
}

impl InputNormalizer {
    /// Normalizer with every device class enabled and default settings.
    pub fn new(geometry: SurfaceGeometry) -> Self {
        Self {
            geometry,
            mouse: Some(MouseInput::default()),
            touch: Some(TouchInput::new()),
        }
    }

    pub fn with_config(geometry: SurfaceGeometry, config: &InputConfig) -> Self {
        Self {
            geometry,
            mouse: config.enable_mouse.then(|| MouseInput::new(config.mouse_force)),
            touch: config.enable_touch.then(TouchInput::new),
        }
    }

    pub fn geometry(&self) -> &SurfaceGeometry {
        &self.geometry
    }

    /// Translates a raw device signal. `Some` means the caller should
    /// suppress the platform's default handling of the signal.
    pub fn on_device(&mut self, event: &DeviceEvent) -> Option<PenEvent> {
        let pen_event = match event {
            DeviceEvent::Mouse(mouse_event) => self
                .mouse
                .as_mut()?
                .on_event(&self.geometry, mouse_event),
            DeviceEvent::Touch(touch_event) => self
                .touch
                .as_mut()?
                .on_event(&self.geometry, touch_event),
        };
        if let Some(pen_event) = &pen_event {
            debug!("Normalized {event:?} -> {pen_event:?}");
        }
        pen_event
    }
}
