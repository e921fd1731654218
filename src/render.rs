//! Raster side of the editor: the owned backing buffer and how strokes land on it.

pub(crate) mod composite;
/// Deterministic re-rendering of source image + strokes.
pub mod compositor;
/// Source image decoding and base-layer preparation.
pub mod source;
