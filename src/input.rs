/// Display-to-backing-store coordinate mapping.
pub mod mapper;
/// Gesture state machine producing strokes.
pub mod recorder;
/// Undo/redo key chord resolution.
pub mod shortcuts;
