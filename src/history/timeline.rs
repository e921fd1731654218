use crate::history::stroke::Stroke;

/// Ordered stroke history with a linear undo/redo cursor.
///
/// Strokes `[0, active)` are part of the current mask; the remainder only exists so `redo` can
/// bring it back, and is dropped as soon as a new stroke is appended.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    strokes: Vec<Stroke>,
    active: usize,
}

impl Timeline {
    /// Empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit `stroke` after the cursor, discarding any redoable tail.
    pub fn append(&mut self, stroke: Stroke) {
        let dropped = self.strokes.len() - self.active;
        self.strokes.truncate(self.active);
        self.strokes.push(stroke);
        self.active = self.strokes.len();
        tracing::debug!(len = self.strokes.len(), dropped, "stroke appended");
    }

    /// Step the cursor back. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        if self.active == 0 {
            return false;
        }
        self.active -= 1;
        tracing::debug!(active = self.active, "undo");
        true
    }

    /// Step the cursor forward. Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        if self.active >= self.strokes.len() {
            return false;
        }
        self.active += 1;
        tracing::debug!(active = self.active, "redo");
        true
    }

    /// Drop every stroke and reset the cursor.
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.active = 0;
        tracing::debug!("history cleared");
    }

    /// `true` while at least one stroke is active.
    pub fn has_mask(&self) -> bool {
        self.active > 0
    }

    /// Index of the last active stroke, `None` when the mask is empty.
    pub fn cursor(&self) -> Option<usize> {
        self.active.checked_sub(1)
    }

    /// `true` when `undo` would move the cursor.
    pub fn can_undo(&self) -> bool {
        self.active > 0
    }

    /// `true` when `redo` would move the cursor.
    pub fn can_redo(&self) -> bool {
        self.active < self.strokes.len()
    }

    /// Strokes that make up the current mask, in draw order.
    pub fn active(&self) -> &[Stroke] {
        &self.strokes[..self.active]
    }

    /// Strokes up to and including `upto`, clamped to what is stored.
    pub fn upto(&self, upto: Option<usize>) -> &[Stroke] {
        match upto {
            None => &[],
            Some(i) => &self.strokes[..i.saturating_add(1).min(self.strokes.len())],
        }
    }

    /// Total stored strokes, including the redoable tail.
    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    /// `true` when nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/history/timeline.rs"]
mod tests;
