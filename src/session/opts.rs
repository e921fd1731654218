use crate::encode::jpeg::DEFAULT_JPEG_QUALITY;
use crate::foundation::core::{BrushSize, Canvas};

/// Editor configuration.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EditorOpts {
    /// Backing-store resolution of the drawing surface.
    pub canvas: Canvas,
    /// JPEG quality (1..=100) of the handoff image.
    pub jpeg_quality: u8,
    /// Brush diameter on open and after every edit-type switch.
    pub default_brush: BrushSize,
}

impl Default for EditorOpts {
    fn default() -> Self {
        Self {
            canvas: Canvas::THUMBNAIL,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            default_brush: BrushSize::DEFAULT,
        }
    }
}

impl EditorOpts {
    /// Defaults, overridden by `THUMBMASK_BACKING_WIDTH`, `THUMBMASK_BACKING_HEIGHT` and
    /// `THUMBMASK_JPEG_QUALITY` when they hold usable values.
    pub fn from_env() -> Self {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut opts = Self::default();

        let width = lookup("THUMBMASK_BACKING_WIDTH")
            .and_then(|v| v.trim().parse::<u32>().ok())
            .unwrap_or(opts.canvas.width);
        let height = lookup("THUMBMASK_BACKING_HEIGHT")
            .and_then(|v| v.trim().parse::<u32>().ok())
            .unwrap_or(opts.canvas.height);
        if let Ok(canvas) = Canvas::new(width, height) {
            opts.canvas = canvas;
        }

        opts.jpeg_quality = lookup("THUMBMASK_JPEG_QUALITY")
            .and_then(|v| v.trim().parse::<u8>().ok())
            .filter(|q| (1..=100).contains(q))
            .unwrap_or(opts.jpeg_quality);

        opts
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/opts.rs"]
mod tests;
