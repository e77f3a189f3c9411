//! Soft glow beneath strokes, approximating a gaussian shadow with three
//! box blur passes.

use tiny_skia::{BlendMode, Paint, Path, Pixmap, PixmapPaint, Stroke, Transform};

const PASSES: usize = 3;

/// Largest glow size drawn; matches the largest stroke size.
pub(crate) const MAX_GLOW: f64 = 50.0;

/// Box radius whose three passes approximate a gaussian of `sigma`.
pub(crate) fn box_radius(sigma: f32) -> usize {
    if sigma <= 0.0 {
        return 0;
    }
    (((4.0 * sigma * sigma + 1.0).sqrt() - 1.0) / 2.0).round() as usize
}

/// Box radius for a glow size, capped at [`MAX_GLOW`].
pub(crate) fn glow_radius(blur: f64) -> usize {
    box_radius(blur.min(MAX_GLOW) as f32 / 2.0)
}

/// Draw a blurred copy of the stroke onto `target`.
///
/// `blur` is the glow size; the gaussian sigma is half of it.
pub(crate) fn stroke_glow(target: &mut Pixmap, path: &Path, paint: &Paint, stroke: &Stroke, blur: f64) {
    let radius = glow_radius(blur);
    if radius == 0 {
        return;
    }

    // Pixels further than `reach` outside the target cannot blur into it.
    let reach = (radius * PASSES) as f32 + 1.0;
    let pad = reach + stroke.width / 2.0;
    let bounds = path.bounds();
    let left = (bounds.left() - pad).floor().max(-reach);
    let top = (bounds.top() - pad).floor().max(-reach);
    let right = (bounds.right() + pad).ceil().min(target.width() as f32 + reach);
    let bottom = (bounds.bottom() + pad).ceil().min(target.height() as f32 + reach);
    if right <= left || bottom <= top {
        return;
    }

    let Some(mut layer) = Pixmap::new((right - left) as u32, (bottom - top) as u32) else {
        log::warn!("Skipping glow: layer {}x{} too large", right - left, bottom - top);
        return;
    };
    let mut layer_paint = paint.clone();
    layer_paint.blend_mode = BlendMode::SourceOver;
    layer.stroke_path(path, &layer_paint, stroke, Transform::from_translate(-left, -top), None);

    box_blur(&mut layer, radius);

    let composite = PixmapPaint {
        blend_mode: paint.blend_mode,
        ..PixmapPaint::default()
    };
    target.draw_pixmap(
        left as i32,
        top as i32,
        layer.as_ref(),
        &composite,
        Transform::identity(),
        None,
    );
}

/// Blur premultiplied pixels in place.
pub(crate) fn box_blur(pixmap: &mut Pixmap, radius: usize) {
    if radius == 0 {
        return;
    }
    let width = pixmap.width() as usize;
    let height = pixmap.height() as usize;
    let data = pixmap.data_mut();
    let mut scratch = vec![0u8; data.len()];
    for _ in 0..PASSES {
        blur_axis(data, &mut scratch, width, height, radius, true);
        blur_axis(&scratch, data, width, height, radius, false);
    }
}

/// One sliding-window pass along rows (`horizontal`) or columns.
/// Pixels outside the image count as transparent.
fn blur_axis(src: &[u8], dst: &mut [u8], width: usize, height: usize, radius: usize, horizontal: bool) {
    let (lines, len) = if horizontal { (height, width) } else { (width, height) };
    let offset = |line: usize, i: usize| {
        if horizontal {
            (line * width + i) * 4
        } else {
            (i * width + line) * 4
        }
    };
    let window = (2 * radius + 1) as u32;

    for line in 0..lines {
        let mut sum = [0u32; 4];
        for i in 0..=radius.min(len - 1) {
            let o = offset(line, i);
            for c in 0..4 {
                sum[c] += src[o + c] as u32;
            }
        }
        for i in 0..len {
            let o = offset(line, i);
            for c in 0..4 {
                dst[o + c] = ((sum[c] + window / 2) / window) as u8;
            }
            let incoming = i + radius + 1;
            if incoming < len {
                let o = offset(line, incoming);
                for c in 0..4 {
                    sum[c] += src[o + c] as u32;
                }
            }
            if i >= radius {
                let o = offset(line, i - radius);
                for c in 0..4 {
                    sum[c] -= src[o + c] as u32;
                }
            }
        }
    }
}
