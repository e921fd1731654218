use image::{DynamicImage, imageops::FilterType};

use crate::foundation::core::Canvas;
use crate::foundation::error::{MaskError, MaskResult};
use crate::foundation::math::premultiply_rgba8_in_place;

/// Decode an encoded source image (PNG, JPEG, WebP, ...).
pub fn decode_source(bytes: &[u8]) -> MaskResult<DynamicImage> {
    image::load_from_memory(bytes)
        .map_err(|e| MaskError::decode(format!("decode source image: {e}")))
}

/// Scale `source` to exactly fill `canvas` and return it as premultiplied RGBA8.
///
/// The aspect ratio is not preserved: the drawing surface always shows the whole image stretched
/// to the backing store, matching what the user paints over.
pub(crate) fn prepare_base_layer(source: &DynamicImage, canvas: Canvas) -> MaskResult<Vec<u8>> {
    if source.width() == 0 || source.height() == 0 {
        return Err(MaskError::decode("source image has zero size"));
    }

    let rgba = source.to_rgba8();
    let scaled = if rgba.dimensions() == (canvas.width, canvas.height) {
        rgba
    } else {
        image::imageops::resize(&rgba, canvas.width, canvas.height, FilterType::Triangle)
    };

    let mut bytes = scaled.into_raw();
    premultiply_rgba8_in_place(&mut bytes);
    Ok(bytes)
}

#[cfg(test)]
#[path = "../../tests/unit/render/source.rs"]
mod tests;
