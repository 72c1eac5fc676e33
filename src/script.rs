//! Scripted input traces.
//!
//! A trace is a JSON-lines file where each line is one input signal, in
//! arrival order. Blank lines and lines starting with `#` are skipped.
//!
//! ```text
//! {"mouse": {"kind": "down", "button": "left", "client_x": 10, "client_y": 10}}
//! {"mouse": {"kind": "move", "client_x": 20, "client_y": 10}}
//! {"mouse": {"kind": "up", "button": "left"}}
//! {"touch": {"phase": "start", "touches": [{"client_x": 1, "client_y": 1}, {"client_x": 5, "client_y": 1}]}}
//! {"key": {"key": {"char": "z"}, "modifiers": {"meta": true, "shift": true}}}
//! {"pen": {"type": "pen_down", "x": 3, "y": 4}}
//! ```

use crate::draw::DrawSurface;
use crate::input::{DeviceEvent, KeyEvent, MouseEvent, PenEvent, TouchEvent};
use crate::notepad::{SurfaceId, SurfaceRegistry};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One line of a trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptInput {
    Mouse(MouseEvent),
    Touch(TouchEvent),
    Key(KeyEvent),
    /// Already-normalized event, delivered straight to the controller.
    Pen(PenEvent),
}

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Parses a whole trace. Fails on the first malformed line.
pub fn parse_script(text: &str) -> Result<Vec<ScriptInput>, ScriptError> {
    text.lines()
        .enumerate()
        .filter(|(_, raw)| {
            let trimmed = raw.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .map(|(idx, raw)| {
            serde_json::from_str(raw).map_err(|source| ScriptError::Parse {
                line: idx + 1,
                source,
            })
        })
        .collect()
}

/// Outcome counters for [`run_script`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptStats {
    pub delivered: usize,
    pub consumed: usize,
}

/// Plays `inputs` into the registry. Surface-scoped signals go to `target`;
/// key presses follow registry focus.
pub fn run_script<S: DrawSurface>(
    registry: &mut SurfaceRegistry<S>,
    target: SurfaceId,
    inputs: &[ScriptInput],
) -> ScriptStats {
    let mut stats = ScriptStats::default();
    for input in inputs {
        stats.delivered += 1;
        let consumed = match input {
            ScriptInput::Mouse(event) => {
                registry.dispatch_device(target, &DeviceEvent::Mouse(*event))
            }
            ScriptInput::Touch(event) => {
                registry.dispatch_device(target, &DeviceEvent::Touch(event.clone()))
            }
            ScriptInput::Key(event) => registry.dispatch_key(event),
            ScriptInput::Pen(event) => match registry.get_mut(target) {
                Some(notepad) => {
                    notepad.handle(*event);
                    true
                }
                None => {
                    warn!("Trace targets unknown {target}");
                    false
                }
            },
        };
        if consumed {
            stats.consumed += 1;
        }
    }
    debug!(
        "Trace delivered {} input(s), {} consumed",
        stats.delivered, stats.consumed
    );
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{ImageData, RecordingSurface};
    use crate::input::{Key, Modifiers, MouseButton, SurfaceGeometry};
    use crate::notepad::Notepad;

    const TRACE: &str = r#"
# draw one stroke, undo it, redo it
{"mouse": {"kind": "down", "button": "left", "client_x": 10, "client_y": 10}}
{"mouse": {"kind": "move", "client_x": 20, "client_y": 10}}
{"mouse": {"kind": "move", "client_x": 30, "client_y": 15}}
{"mouse": {"kind": "up", "button": "left"}}
{"mouse": {"kind": "move", "client_x": 40, "client_y": 15}}
{"key": {"key": {"char": "z"}, "modifiers": {"meta": true}}}
{"touch": {"phase": "start", "touches": [{"client_x": 1, "client_y": 1}, {"client_x": 2, "client_y": 1}, {"client_x": 3, "client_y": 1}]}}
"#;

    #[test]
    fn parses_all_input_kinds() {
        let inputs = parse_script(TRACE).unwrap();
        assert_eq!(inputs.len(), 7);
        assert_eq!(
            inputs[0],
            ScriptInput::Mouse(MouseEvent::Down {
                button: MouseButton::Left,
                client_x: 10.0,
                client_y: 10.0
            })
        );
        assert_eq!(
            inputs[5],
            ScriptInput::Key(KeyEvent::new(Key::Char('z'), Modifiers::meta()))
        );

        let pen = parse_script(r#"{"pen": {"type": "pen_move", "x": 1, "y": 2, "force": 0.5}}"#)
            .unwrap();
        assert_eq!(
            pen,
            vec![ScriptInput::Pen(PenEvent::PenMove {
                x: 1.0,
                y: 2.0,
                force: 0.5
            })]
        );
    }

    #[test]
    fn reports_line_of_bad_input() {
        let err = parse_script("\n{\"mouse\": {\"kind\": \"leave\"}}\n{\"mouse\": 5}\n").unwrap_err();
        let ScriptError::Parse { line, .. } = err;
        assert_eq!(line, 3);
    }

    #[test]
    fn run_script_drives_registry() {
        let mut registry = SurfaceRegistry::default();
        let id = registry.register(Notepad::new(
            crate::draw::Renderer::with_kind(
                RecordingSurface::new(),
                crate::draw::StrategyKind::Smooth,
                crate::draw::BLACK,
            ),
            crate::draw::PenState::default(),
            crate::input::InputNormalizer::new(SurfaceGeometry::default()),
            ImageData::default(),
        ));

        let stats = run_script(&mut registry, id, &parse_script(TRACE).unwrap());
        assert_eq!(stats.delivered, 7);
        // The hover move after release is the only unconsumed input.
        assert_eq!(stats.consumed, 6);

        let notepad = registry.get(id).unwrap();
        assert_eq!(notepad.history().cursor(), 1);
        assert_eq!(notepad.visible_strokes()[0].len(), 3);
    }
}
