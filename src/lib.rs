//! Thumbmask is the mask-authoring core of a thumbnail editor.
//!
//! A user paints an approximate region over a generated image; the crate keeps the stroke
//! history, re-renders the highlighted surface deterministically and turns the result into a
//! flattened JPEG plus a natural-language edit instruction:
//!
//! - Open an [`EditorSession`] on a source image
//! - Feed it pointer, key and control events (or replay a [`GestureScript`])
//! - Hand the [`EditPayload`] to an [`EditorHost`] or a [`GenerationService`]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod foundation;

/// JPEG handoff encoding.
pub mod encode;
/// Stroke model and undo/redo history.
pub mod history;
/// Pointer mapping, gesture recording and keyboard shortcuts.
pub mod input;
/// Edit settings and instruction synthesis.
pub mod instruction;
/// Raster compositing of the highlighted surface.
pub mod render;
/// Replayable recorded input.
pub mod script;
/// Session-oriented editing API.
pub mod session;

pub use crate::foundation::color::TextColor;
pub use crate::foundation::core::{BrushSize, Canvas, DisplayRect, Point, Rgba8Premul};
pub use crate::foundation::error::{MaskError, MaskResult};

pub use crate::history::stroke::{SamplePoint, Segment, Stroke};
pub use crate::history::timeline::Timeline;
pub use crate::input::shortcuts::{FocusTarget, HistoryCommand, KeyChord};
pub use crate::instruction::state::{EditSessionState, EditType, FontSize, TextAlignment};
pub use crate::instruction::synth::EditPayload;
pub use crate::render::compositor::Compositor;
pub use crate::script::{GestureEvent, GestureScript};
pub use crate::session::editor::EditorSession;
pub use crate::session::host::{EditorHost, GenerationService, ServiceError};
pub use crate::session::opts::EditorOpts;
