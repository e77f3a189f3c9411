//! Raster surface abstraction.

use crate::error::RasterError;
use crate::style::PaintStyle;
use kurbo::BezPath;
use peniko::Color;

/// Straight (non-premultiplied) RGBA8 pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    /// Row-major pixels, 4 bytes each.
    pub rgba: Vec<u8>,
}

impl RasterImage {
    /// Wrap a pixel buffer, checking that it matches the dimensions.
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, RasterError> {
        if rgba.len() as u64 != width as u64 * height as u64 * 4 {
            return Err(RasterError::SizeMismatch { width, height, len: rgba.len() });
        }
        Ok(Self { width, height, rgba })
    }

    /// Image filled with one color.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let count = width as usize * height as usize;
        Self {
            width,
            height,
            rgba: rgba.repeat(count),
        }
    }

    /// The pixel at (x, y), if inside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some([self.rgba[i], self.rgba[i + 1], self.rgba[i + 2], self.rgba[i + 3]])
    }
}

/// Trait for raster backends the engine draws onto.
///
/// Implementations own their pixels; the engine is the only caller.
pub trait Surface {
    /// Width and height in logical pixels.
    fn size(&self) -> (u32, u32);

    /// Replace every pixel with `background`.
    fn reset(&mut self, background: Color);

    /// Stroke an outline.
    fn stroke(&mut self, path: &BezPath, style: &PaintStyle);

    /// Cover the whole surface using the style's color and blend mode.
    fn fill(&mut self, style: &PaintStyle);

    /// Copy out the current pixels.
    fn read_pixels(&self) -> RasterImage;

    /// Draw an image at the origin over the current pixels, clipped to the surface.
    fn draw_image(&mut self, image: &RasterImage);
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_image_size_check() {
        assert!(RasterImage::new(2, 2, vec![0; 16]).is_ok());
        assert!(matches!(
            RasterImage::new(2, 2, vec![0; 15]),
            Err(RasterError::SizeMismatch { width: 2, height: 2, len: 15 })
        ));
    }

    #[test]
    fn test_pixel_lookup() {
        let mut image = RasterImage::filled(3, 2, [1, 2, 3, 4]);
        image.rgba[(3 + 2) * 4] = 99;
        assert_eq!(image.pixel(0, 0), Some([1, 2, 3, 4]));
        assert_eq!(image.pixel(2, 1), Some([99, 2, 3, 4]));
        assert_eq!(image.pixel(3, 0), None);
    }
}
