use crate::foundation::error::{MaskError, MaskResult};

pub use kurbo::Point;

/// Fixed backing-store resolution of the drawing surface, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// The thumbnail resolution the editor works at.
    pub const THUMBNAIL: Canvas = Canvas {
        width: 1280,
        height: 720,
    };

    /// Create a validated canvas. Both sides must be non-zero and fit the rasterizer's `u16`
    /// surface limit.
    pub fn new(width: u32, height: u32) -> MaskResult<Self> {
        if width == 0 || height == 0 {
            return Err(MaskError::validation("canvas dimensions must be > 0"));
        }
        if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
            return Err(MaskError::validation("canvas dimensions must fit in u16"));
        }
        Ok(Self { width, height })
    }

    /// Number of bytes in a tightly packed RGBA8 buffer of this size.
    pub fn rgba_len(self) -> usize {
        (self.width as usize)
            .saturating_mul(self.height as usize)
            .saturating_mul(4)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::THUMBNAIL
    }
}

/// On-screen bounding rectangle of the drawing surface in client (display) units.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DisplayRect {
    /// Client-space x of the left edge.
    pub left: f64,
    /// Client-space y of the top edge.
    pub top: f64,
    /// Displayed width.
    pub width: f64,
    /// Displayed height.
    pub height: f64,
}

impl DisplayRect {
    /// A rect anchored at the client origin.
    pub fn sized(width: f64, height: f64) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width,
            height,
        }
    }
}

/// Brush diameter in backing-store pixels, clamped to the slider range.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct BrushSize(f64);

impl BrushSize {
    /// Smallest selectable diameter.
    pub const MIN: f64 = 10.0;
    /// Largest selectable diameter.
    pub const MAX: f64 = 150.0;
    /// Diameter a fresh editor (and every mode switch) starts with.
    pub const DEFAULT: BrushSize = BrushSize(40.0);

    /// Clamp `px` into `[MIN, MAX]`. Non-finite input falls back to the default.
    pub fn new(px: f64) -> Self {
        if !px.is_finite() {
            return Self::DEFAULT;
        }
        Self(px.clamp(Self::MIN, Self::MAX))
    }

    /// Diameter in pixels.
    pub fn px(self) -> f64 {
        self.0
    }
}

impl Default for BrushSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    /// Red channel premultiplied by alpha.
    pub r: u8,
    /// Green channel premultiplied by alpha.
    pub g: u8,
    /// Blue channel premultiplied by alpha.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8Premul {
    /// Bytes in `[r, g, b, a]` order.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
