/// A key press with its modifier state.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct KeyChord {
    /// Logical key as reported by the platform (`"z"`, `"Z"`, `"y"`, ...).
    pub key: String,
    /// Control held.
    #[serde(default)]
    pub ctrl: bool,
    /// Command / meta held.
    #[serde(default)]
    pub meta: bool,
    /// Shift held.
    #[serde(default)]
    pub shift: bool,
}

impl KeyChord {
    /// Chord for `key` with control held.
    pub fn ctrl(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ctrl: true,
            ..Self::default()
        }
    }

    /// Chord for `key` with meta held.
    pub fn meta(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            meta: true,
            ..Self::default()
        }
    }

    /// Same chord with shift held.
    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }
}

/// Where keyboard focus sits when the chord arrives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusTarget {
    /// Anywhere in the editor except a text input.
    #[default]
    Editor,
    /// A text-entry field; history chords belong to the field.
    TextField,
}

/// History action bound to a key chord.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryCommand {
    /// Step back one stroke.
    Undo,
    /// Step forward one stroke.
    Redo,
}

/// Resolve `chord` to a history command.
///
/// `Ctrl/Cmd+Z` undoes, `Ctrl/Cmd+Shift+Z` and `Ctrl/Cmd+Y` redo. Nothing resolves while a text
/// field has focus.
pub fn resolve(chord: &KeyChord, focus: FocusTarget) -> Option<HistoryCommand> {
    if focus == FocusTarget::TextField || !(chord.ctrl || chord.meta) {
        return None;
    }
    if chord.key.eq_ignore_ascii_case("z") {
        return Some(if chord.shift {
            HistoryCommand::Redo
        } else {
            HistoryCommand::Undo
        });
    }
    if chord.key.eq_ignore_ascii_case("y") {
        return Some(HistoryCommand::Redo);
    }
    None
}

#[cfg(test)]
#[path = "../../tests/unit/input/shortcuts.rs"]
mod tests;
