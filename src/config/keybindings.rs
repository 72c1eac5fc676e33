//! Keybinding configuration types and parsing.
//!
//! Undo and redo are the only keyboard commands a surface understands; this
//! module lets users rebind them.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// All actions that can be bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Undo,
    Redo,
}

/// A single keybinding: a key with optional modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub meta: bool,
}

impl KeyBinding {
    /// Parse a keybinding string like "Meta+Shift+Z" or "Ctrl+Z".
    /// Modifiers can appear in any order and spaces around '+' are allowed.
    /// `Meta`, `Cmd`, `Command` and `Super` all name the meta modifier.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty keybinding string".to_string());
        }

        // Normalize by removing spaces around '+'
        let s_normalized = s.replace(" + ", "+").replace("+ ", "+").replace(" +", "+");

        let mut ctrl = false;
        let mut shift = false;
        let mut alt = false;
        let mut meta = false;
        let mut key_parts = Vec::new();

        for part in s_normalized.split('+') {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => ctrl = true,
                "shift" => shift = true,
                "alt" => alt = true,
                "meta" | "cmd" | "command" | "super" => meta = true,
                _ => key_parts.push(part),
            }
        }

        if key_parts.is_empty() {
            return Err(format!("No key specified in: {}", s));
        }

        // "Meta++" splits into trailing empty parts; the key is '+' itself
        let key = key_parts.join("+");
        let key = if key.is_empty() { "+".to_string() } else { key };

        Ok(Self {
            key: key.to_lowercase(),
            ctrl,
            shift,
            alt,
            meta,
        })
    }

    /// Check if this keybinding matches a key press. Modifiers must match
    /// exactly, so "Meta+Z" does not fire while Shift is held.
    pub fn matches(&self, key: &str, ctrl: bool, shift: bool, alt: bool, meta: bool) -> bool {
        self.key.eq_ignore_ascii_case(key)
            && self.ctrl == ctrl
            && self.shift == shift
            && self.alt == alt
            && self.meta == meta
    }
}

/// Configuration for all keybindings.
///
/// ```toml
/// [keybindings]
/// undo = ["Meta+Z", "Ctrl+Z"]
/// redo = ["Meta+Shift+Z", "Ctrl+Y"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KeybindingsConfig {
    #[serde(default = "default_undo")]
    pub undo: Vec<String>,

    #[serde(default = "default_redo")]
    pub redo: Vec<String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            undo: default_undo(),
            redo: default_redo(),
        }
    }
}

impl KeybindingsConfig {
    /// Build a lookup map from keybindings to actions.
    /// Returns an error if any keybinding string is invalid or if duplicates are detected.
    pub fn build_action_map(&self) -> Result<HashMap<KeyBinding, Action>, String> {
        let mut map = HashMap::new();

        let mut insert_binding = |binding_str: &str, action: Action| -> Result<(), String> {
            let binding = KeyBinding::parse(binding_str)?;
            if let Some(existing_action) = map.insert(binding, action) {
                return Err(format!(
                    "Duplicate keybinding '{}' assigned to both {:?} and {:?}",
                    binding_str, existing_action, action
                ));
            }
            Ok(())
        };

        for binding_str in &self.undo {
            insert_binding(binding_str, Action::Undo)?;
        }

        for binding_str in &self.redo {
            insert_binding(binding_str, Action::Redo)?;
        }

        Ok(map)
    }
}

fn default_undo() -> Vec<String> {
    vec!["Meta+Z".to_string()]
}

fn default_redo() -> Vec<String> {
    vec!["Meta+Shift+Z".to_string()]
}
