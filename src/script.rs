use serde::{Deserialize, Serialize};

use crate::foundation::core::{DisplayRect, Point};
use crate::foundation::error::{MaskError, MaskResult};
use crate::input::shortcuts::{FocusTarget, KeyChord};
use crate::instruction::state::EditSessionState;
use crate::session::editor::EditorSession;

/// A recorded editing session: where the surface was shown, the edit settings, and the input
/// events in arrival order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GestureScript {
    /// On-screen rect of the drawing surface; event coordinates are client coordinates in it.
    pub display: DisplayRect,
    /// Edit settings applied before any event.
    #[serde(default)]
    pub edit: Option<EditSessionState>,
    /// Input events.
    #[serde(default)]
    pub events: Vec<GestureEvent>,
}

/// One input event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GestureEvent {
    /// Brush slider moved.
    Brush {
        /// New diameter in backing-store pixels.
        size: f64,
    },
    /// Pointer pressed.
    Down {
        /// Client x.
        x: f64,
        /// Client y.
        y: f64,
    },
    /// Pointer moved.
    Move {
        /// Client x.
        x: f64,
        /// Client y.
        y: f64,
    },
    /// Pointer released.
    Up,
    /// Pointer left the surface.
    Leave,
    /// Undo button.
    Undo,
    /// Redo button.
    Redo,
    /// Clear button.
    Clear,
    /// Key press.
    Key {
        /// Logical key.
        key: String,
        /// Control held.
        #[serde(default)]
        ctrl: bool,
        /// Command / meta held.
        #[serde(default)]
        meta: bool,
        /// Shift held.
        #[serde(default)]
        shift: bool,
        /// Focus was in a text field.
        #[serde(default)]
        in_text_field: bool,
    },
}

impl GestureScript {
    /// Reject non-finite input and a display rect with no area.
    pub fn validate(&self) -> MaskResult<()> {
        let d = self.display;
        if ![d.left, d.top, d.width, d.height]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(MaskError::validation("display rect must be finite"));
        }
        if d.width <= 0.0 || d.height <= 0.0 {
            return Err(MaskError::validation("display width/height must be > 0"));
        }

        for (i, ev) in self.events.iter().enumerate() {
            match ev {
                GestureEvent::Brush { size } if !size.is_finite() => {
                    return Err(MaskError::validation(format!(
                        "event {i}: brush size must be finite"
                    )));
                }
                GestureEvent::Down { x, y } | GestureEvent::Move { x, y }
                    if !(x.is_finite() && y.is_finite()) =>
                {
                    return Err(MaskError::validation(format!(
                        "event {i}: coordinates must be finite"
                    )));
                }
                GestureEvent::Key { key, .. } if key.is_empty() => {
                    return Err(MaskError::validation(format!("event {i}: empty key")));
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Apply the edit settings, then every event, to `session`.
    #[tracing::instrument(skip_all, fields(events = self.events.len()))]
    pub fn replay(&self, session: &mut EditorSession) -> MaskResult<()> {
        self.validate()?;
        if let Some(edit) = &self.edit {
            session.set_state(edit.clone());
        }

        let rect = self.display;
        for ev in &self.events {
            match ev {
                GestureEvent::Brush { size } => {
                    session.set_brush_size(*size);
                }
                GestureEvent::Down { x, y } => {
                    session.pointer_down(Point::new(*x, *y), rect);
                }
                GestureEvent::Move { x, y } => {
                    session.pointer_move(Point::new(*x, *y), rect)?;
                }
                GestureEvent::Up => {
                    session.pointer_up()?;
                }
                GestureEvent::Leave => {
                    session.pointer_leave()?;
                }
                GestureEvent::Undo => {
                    session.undo()?;
                }
                GestureEvent::Redo => {
                    session.redo()?;
                }
                GestureEvent::Clear => {
                    session.clear()?;
                }
                GestureEvent::Key {
                    key,
                    ctrl,
                    meta,
                    shift,
                    in_text_field,
                } => {
                    let chord = KeyChord {
                        key: key.clone(),
                        ctrl: *ctrl,
                        meta: *meta,
                        shift: *shift,
                    };
                    let focus = if *in_text_field {
                        FocusTarget::TextField
                    } else {
                        FocusTarget::Editor
                    };
                    session.key_down(&chord, focus)?;
                }
            }
        }

        tracing::debug!(
            strokes = session.timeline().len(),
            has_mask = session.has_mask(),
            "script replayed"
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/script.rs"]
mod tests;
