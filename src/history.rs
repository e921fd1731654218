/// Finalized strokes and their sample points.
pub mod stroke;
/// Undo/redo timeline over strokes.
pub mod timeline;
