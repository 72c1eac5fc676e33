//! Routing of global keyboard input to registered surfaces.

use super::Notepad;
use crate::draw::DrawSurface;
use crate::input::{DeviceEvent, KeyEvent, KeyboardInput};
use log::{debug, warn};
use std::collections::BTreeMap;

/// Handle for a surface registered with a [`SurfaceRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SurfaceId(u64);

impl std::fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "surface-{}", self.0)
    }
}

/// Owns every live notepad and the single global keyboard normalizer.
///
/// Key presses are not scoped to a surface, so they are delivered to the
/// focused one: the surface most recently focused explicitly or the last one
/// that consumed a pointer or touch signal.
pub struct SurfaceRegistry<S: DrawSurface> {
    surfaces: BTreeMap<SurfaceId, Notepad<S>>,
    keyboard: KeyboardInput,
    focused: Option<SurfaceId>,
    next_id: u64,
}

impl<S: DrawSurface> SurfaceRegistry<S> {
    pub fn new(keyboard: KeyboardInput) -> Self {
        Self {
            surfaces: BTreeMap::new(),
            keyboard,
            focused: None,
            next_id: 0,
        }
    }

    /// Adds a notepad. The first registered surface starts focused.
    pub fn register(&mut self, notepad: Notepad<S>) -> SurfaceId {
        let id = SurfaceId(self.next_id);
        self.next_id += 1;
        self.surfaces.insert(id, notepad);
        if self.focused.is_none() {
            self.focused = Some(id);
        }
        debug!("Registered {id}");
        id
    }

    /// Removes a notepad, handing it back to the caller.
    pub fn unregister(&mut self, id: SurfaceId) -> Option<Notepad<S>> {
        let removed = self.surfaces.remove(&id);
        if self.focused == Some(id) {
            self.focused = self.surfaces.keys().next().copied();
        }
        removed
    }

    /// Makes `id` the keyboard target. Returns `false` for unknown ids.
    pub fn focus(&mut self, id: SurfaceId) -> bool {
        if self.surfaces.contains_key(&id) {
            self.focused = Some(id);
            true
        } else {
            warn!("Cannot focus unknown {id}");
            false
        }
    }

    pub fn focused(&self) -> Option<SurfaceId> {
        self.focused
    }

    pub fn get(&self, id: SurfaceId) -> Option<&Notepad<S>> {
        self.surfaces.get(&id)
    }

    pub fn get_mut(&mut self, id: SurfaceId) -> Option<&mut Notepad<S>> {
        self.surfaces.get_mut(&id)
    }

    pub fn ids(&self) -> impl Iterator<Item = SurfaceId> + '_ {
        self.surfaces.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Delivers a surface-scoped signal. A consumed signal also moves
    /// keyboard focus to that surface.
    ///
    /// Returns `true` when the platform default should be suppressed.
    pub fn dispatch_device(&mut self, id: SurfaceId, event: &DeviceEvent) -> bool {
        let Some(notepad) = self.surfaces.get_mut(&id) else {
            debug!("Dropping device signal for unknown {id}");
            return false;
        };
        let consumed = notepad.handle_device(event);
        if consumed {
            self.focused = Some(id);
        }
        consumed
    }

    /// Delivers a global key press to the focused surface.
    ///
    /// Returns `true` when the press was bound to a command.
    pub fn dispatch_key(&mut self, event: &KeyEvent) -> bool {
        let Some(pen_event) = self.keyboard.on_key(event) else {
            return false;
        };
        let Some(notepad) = self.focused.and_then(|id| self.surfaces.get_mut(&id)) else {
            debug!("No focused surface for {pen_event:?}");
            return false;
        };
        notepad.handle(pen_event);
        true
    }

    pub fn into_surfaces(self) -> BTreeMap<SurfaceId, Notepad<S>> {
        self.surfaces
    }
}

impl<S: DrawSurface> Default for SurfaceRegistry<S> {
    fn default() -> Self {
        Self::new(KeyboardInput::default())
    }
}
