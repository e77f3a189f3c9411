//! Raster serialization: PNG data URLs.

use crate::error::RasterError;
use crate::surface::RasterImage;
use base64::{Engine, engine::general_purpose::STANDARD};

/// Prefix of the data URLs produced by [`encode_raster`].
pub const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Encode pixels as a PNG data URL.
pub fn encode_raster(image: &RasterImage) -> Result<String, RasterError> {
    let png_data = encode_png(image)?;
    let mut url = String::with_capacity(PNG_DATA_URL_PREFIX.len() + png_data.len() * 4 / 3 + 4);
    url.push_str(PNG_DATA_URL_PREFIX);
    STANDARD.encode_string(&png_data, &mut url);
    Ok(url)
}

/// Encode pixels as PNG bytes.
pub fn encode_png(image: &RasterImage) -> Result<Vec<u8>, RasterError> {
    let mut png_data = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut png_data, image.width, image.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&image.rgba)?;
    }
    Ok(png_data)
}

/// Decode an image data URL (or bare base64) into pixels.
///
/// Any format the image decoder understands is accepted.
pub fn decode_raster(data: &str) -> Result<RasterImage, RasterError> {
    let payload = match data.trim().strip_prefix("data:") {
        Some(rest) => {
            let (header, payload) = rest
                .split_once(',')
                .ok_or_else(|| RasterError::InvalidDataUrl("missing ',' separator".to_string()))?;
            if !header.ends_with(";base64") {
                return Err(RasterError::InvalidDataUrl(format!("unsupported encoding in {header:?}")));
            }
            payload
        }
        None => data.trim(),
    };

    let bytes = STANDARD.decode(payload)?;
    decode_image_bytes(&bytes)
}

/// Decode encoded image bytes into pixels.
pub fn decode_image_bytes(bytes: &[u8]) -> Result<RasterImage, RasterError> {
    let decoded = image::load_from_memory(bytes)?.to_rgba8();
    let (width, height) = decoded.dimensions();
    RasterImage::new(width, height, decoded.into_raw())
}
