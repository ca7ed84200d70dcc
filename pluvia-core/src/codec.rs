use anyhow::Context;

use crate::{foundation::core::Raster, foundation::error::PluviaResult};

/// Decode encoded image bytes into an RGB8 raster.
///
/// Accepts any format the `image` crate can sniff from the byte stream;
/// alpha, if present, is dropped by the RGB8 conversion.
pub fn decode_frame(bytes: &[u8]) -> PluviaResult<Raster> {
    let dyn_img = image::load_from_memory(bytes).context("decode frame from memory")?;
    let rgb = dyn_img.to_rgb8();
    let (width, height) = rgb.dimensions();
    Raster::new(width, height, rgb.into_raw())
}

/// Encode a raster as PNG bytes for export.
pub fn encode_png(raster: &Raster) -> PluviaResult<Vec<u8>> {
    let mut bytes = Vec::new();
    image::write_buffer_with_format(
        &mut std::io::Cursor::new(&mut bytes),
        raster.data(),
        raster.width(),
        raster.height(),
        image::ExtendedColorType::Rgb8,
        image::ImageFormat::Png,
    )
    .context("encode raster as png")?;
    Ok(bytes)
}

#[cfg(test)]
#[path = "../tests/unit/codec.rs"]
mod tests;
