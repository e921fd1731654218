use base64::Engine as _;
use image::codecs::jpeg::JpegEncoder;

use crate::foundation::core::Canvas;
use crate::foundation::error::{MaskError, MaskResult};
use crate::foundation::math::unpremultiply_rgba8_in_place;

/// Quality factor used for the handoff image unless configured otherwise.
pub const DEFAULT_JPEG_QUALITY: u8 = 80;

/// Encode a premultiplied RGBA8 buffer of `canvas` size as a baseline JPEG.
///
/// JPEG has no alpha channel; transparent regions come out black.
#[tracing::instrument(skip(rgba8_premul), fields(bytes = rgba8_premul.len()))]
pub fn encode_jpeg(rgba8_premul: &[u8], canvas: Canvas, quality: u8) -> MaskResult<Vec<u8>> {
    if rgba8_premul.len() != canvas.rgba_len() {
        return Err(MaskError::encode("rgba8 buffer length does not match canvas"));
    }

    let mut straight = rgba8_premul.to_vec();
    unpremultiply_rgba8_in_place(&mut straight);
    let rgba = image::RgbaImage::from_raw(canvas.width, canvas.height, straight)
        .ok_or_else(|| MaskError::encode("rgba8 buffer length does not match canvas"))?;
    let rgb = image::DynamicImage::ImageRgba8(rgba).to_rgb8();

    let mut out = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut out, quality.clamp(1, 100));
    rgb.write_with_encoder(encoder)
        .map_err(|e| MaskError::encode(format!("jpeg encode: {e}")))?;
    Ok(out)
}

/// Standard (padded) base64 of `bytes`, without any `data:` URL prefix.
pub fn to_base64(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/jpeg.rs"]
mod tests;
