//! Conversions from kurbo/peniko types to tiny-skia.

use kurbo::{BezPath, Cap, Join, PathEl};
use peniko::{Color, Compose};
use sketchbook_core::PaintStyle;
use tiny_skia::{BlendMode, LineCap, LineJoin, Paint, Path, PathBuilder, Stroke};

/// Convert a kurbo path. Returns `None` for empty paths.
pub(crate) fn to_skia_path(path: &BezPath) -> Option<Path> {
    let mut pb = PathBuilder::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => pb.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => pb.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(p1, p2) => pb.quad_to(p1.x as f32, p1.y as f32, p2.x as f32, p2.y as f32),
            PathEl::CurveTo(p1, p2, p3) => pb.cubic_to(
                p1.x as f32,
                p1.y as f32,
                p2.x as f32,
                p2.y as f32,
                p3.x as f32,
                p3.y as f32,
            ),
            PathEl::ClosePath => pb.close(),
        }
    }
    pb.finish()
}

pub(crate) fn to_skia_cap(cap: Cap) -> LineCap {
    match cap {
        Cap::Butt => LineCap::Butt,
        Cap::Square => LineCap::Square,
        Cap::Round => LineCap::Round,
    }
}

pub(crate) fn to_skia_join(join: Join) -> LineJoin {
    match join {
        Join::Bevel => LineJoin::Bevel,
        Join::Miter => LineJoin::Miter,
        Join::Round => LineJoin::Round,
    }
}

pub(crate) fn to_skia_blend(compose: Compose) -> BlendMode {
    match compose {
        Compose::Clear => BlendMode::Clear,
        Compose::Copy => BlendMode::Source,
        Compose::Dest => BlendMode::Destination,
        Compose::SrcOver => BlendMode::SourceOver,
        Compose::DestOver => BlendMode::DestinationOver,
        Compose::SrcIn => BlendMode::SourceIn,
        Compose::DestIn => BlendMode::DestinationIn,
        Compose::SrcOut => BlendMode::SourceOut,
        Compose::DestOut => BlendMode::DestinationOut,
        Compose::SrcAtop => BlendMode::SourceAtop,
        Compose::DestAtop => BlendMode::DestinationAtop,
        Compose::Xor => BlendMode::Xor,
        Compose::Plus => BlendMode::Plus,
        _ => BlendMode::SourceOver,
    }
}

pub(crate) fn to_skia_color(color: Color) -> tiny_skia::Color {
    let rgba = color.to_rgba8();
    tiny_skia::Color::from_rgba8(rgba.r, rgba.g, rgba.b, rgba.a)
}

/// Antialiased solid paint for a style.
pub(crate) fn to_paint(style: &PaintStyle) -> Paint<'static> {
    let [r, g, b, a] = style.rgba8();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint.blend_mode = to_skia_blend(style.compose);
    paint
}

pub(crate) fn to_stroke(style: &PaintStyle) -> Stroke {
    Stroke {
        width: style.width as f32,
        line_cap: to_skia_cap(style.cap),
        line_join: to_skia_join(style.join),
        ..Stroke::default()
    }
}
