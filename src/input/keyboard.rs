//! Keyboard command normalization.
//!
//! Keyboard input is global rather than surface-scoped, so a single
//! [`KeyboardInput`] lives in the surface registry and its events are routed
//! to one target surface there.

use super::events::{KeyEvent, PenEvent};
use crate::config::{Action, KeyBinding, KeybindingsConfig};
use std::collections::HashMap;

/// Maps bound key presses to undo/redo events. Never produces pen strokes.
#[derive(Debug, Clone)]
pub struct KeyboardInput {
    action_map: HashMap<KeyBinding, Action>,
}

impl KeyboardInput {
    pub fn new(action_map: HashMap<KeyBinding, Action>) -> Self {
        Self { action_map }
    }

    pub fn from_config(config: &KeybindingsConfig) -> Result<Self, String> {
        Ok(Self::new(config.build_action_map()?))
    }

    /// Looks up the action bound to `event`.
    pub fn find_action(&self, event: &KeyEvent) -> Option<Action> {
        let key = event.key.binding_name()?;
        let mods = event.modifiers;
        self.action_map
            .iter()
            .find(|(binding, _)| binding.matches(&key, mods.ctrl, mods.shift, mods.alt, mods.meta))
            .map(|(_, action)| *action)
    }

    /// Returns the command for `event`, if bound.
    pub fn on_key(&self, event: &KeyEvent) -> Option<PenEvent> {
        self.find_action(event).map(|action| match action {
            Action::Undo => PenEvent::Undo,
            Action::Redo => PenEvent::Redo,
        })
    }
}

impl Default for KeyboardInput {
    fn default() -> Self {
        let action_map = KeybindingsConfig::default()
            .build_action_map()
            .unwrap_or_default();
        Self::new(action_map)
    }
}
