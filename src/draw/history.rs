//! Linear undo/redo log of committed strokes.

use super::stroke::Stroke;
use log::debug;

/// Committed strokes plus a visibility cursor.
///
/// `entries[..cursor]` are the visible strokes, in draw order. Anything past
/// the cursor has been undone and can be redone until the next commit, which
/// discards it for good. Always `cursor <= entries.len()`.
#[derive(Debug, Clone, Default)]
pub struct StrokeHistory {
    entries: Vec<Stroke>,
    cursor: usize,
}

impl StrokeHistory {
    /// Creates a history seeded with restored strokes, all of them visible.
    pub fn new(seed: Vec<Stroke>) -> Self {
        let cursor = seed.len();
        Self {
            entries: seed,
            cursor,
        }
    }

    /// Drops the redo tail and appends `stroke` as the newest visible entry.
    ///
    /// Empty strokes are accepted; they just never draw anything.
    pub fn commit(&mut self, stroke: Stroke) {
        let discarded = self.entries.len() - self.cursor;
        if discarded > 0 {
            debug!("Commit discards {discarded} redoable stroke(s)");
        }
        self.entries.truncate(self.cursor);
        self.entries.push(stroke);
        self.cursor = self.entries.len();
    }

    /// Hides the newest visible stroke. No-op when nothing is visible.
    ///
    /// Returns whether the cursor moved.
    pub fn undo(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Restores the most recently undone stroke. No-op at the top.
    ///
    /// Returns whether the cursor moved.
    pub fn redo(&mut self) -> bool {
        if self.cursor < self.entries.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Strokes a full replay must draw, oldest first.
    pub fn visible(&self) -> &[Stroke] {
        &self.entries[..self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Total retained strokes, including redoable ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor < self.entries.len()
    }
}
