//! CPU raster surface backed by a tiny-skia pixmap.

use crate::blur;
use crate::convert::{to_paint, to_skia_color, to_skia_path, to_stroke};
use crate::renderer::{RenderResult, RendererError};
use kurbo::BezPath;
use peniko::Color;
use sketchbook_core::{PaintStyle, RasterImage, Surface};
use tiny_skia::{ColorU8, Pixmap, PixmapPaint, Rect, Transform};

/// Surface drawing into an in-memory pixmap.
///
/// Pixels are stored premultiplied; [`Surface::read_pixels`] converts back
/// to straight alpha.
pub struct PixmapSurface {
    pixmap: Pixmap,
}

impl PixmapSurface {
    /// Allocate a transparent surface.
    ///
    /// Fails for zero or oversized dimensions.
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        let pixmap = Pixmap::new(width, height)
            .ok_or_else(|| RendererError::InitFailed(format!("cannot allocate a {width}x{height} pixmap")))?;
        log::debug!("Created {width}x{height} pixmap surface");
        Ok(Self { pixmap })
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Straight-alpha RGBA of one pixel.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }
}

impl std::fmt::Debug for PixmapSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixmapSurface")
            .field("width", &self.pixmap.width())
            .field("height", &self.pixmap.height())
            .finish()
    }
}

impl Surface for PixmapSurface {
    fn size(&self) -> (u32, u32) {
        (self.pixmap.width(), self.pixmap.height())
    }

    fn reset(&mut self, background: Color) {
        self.pixmap.fill(to_skia_color(background));
    }

    fn stroke(&mut self, path: &BezPath, style: &PaintStyle) {
        let Some(path) = to_skia_path(path) else {
            return;
        };
        let paint = to_paint(style);
        let stroke = to_stroke(style);
        if style.blur > 0.0 {
            blur::stroke_glow(&mut self.pixmap, &path, &paint, &stroke, style.blur);
        }
        self.pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    fn fill(&mut self, style: &PaintStyle) {
        let Some(rect) = Rect::from_xywh(0.0, 0.0, self.pixmap.width() as f32, self.pixmap.height() as f32) else {
            return;
        };
        self.pixmap.fill_rect(rect, &to_paint(style), Transform::identity(), None);
    }

    fn read_pixels(&self) -> RasterImage {
        let mut rgba = Vec::with_capacity(self.pixmap.data().len());
        for pixel in self.pixmap.pixels() {
            let c = pixel.demultiply();
            rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        RasterImage {
            width: self.pixmap.width(),
            height: self.pixmap.height(),
            rgba,
        }
    }

    fn draw_image(&mut self, image: &RasterImage) {
        let Some(mut layer) = Pixmap::new(image.width, image.height) else {
            log::warn!("Ignoring empty {}x{} image", image.width, image.height);
            return;
        };
        for (dst, src) in layer.pixels_mut().iter_mut().zip(image.rgba.chunks_exact(4)) {
            *dst = ColorU8::from_rgba(src[0], src[1], src[2], src[3]).premultiply();
        }
        self.pixmap
            .draw_pixmap(0, 0, layer.as_ref(), &PixmapPaint::default(), Transform::identity(), None);
    }
}
