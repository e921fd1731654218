//! Handoff encoding of the flattened buffer.

/// JPEG + base64 encoding.
pub mod jpeg;
