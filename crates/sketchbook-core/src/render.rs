//! Render pipeline: live segments and full replay.

use crate::path::DrawingPath;
use crate::shapes::{self, Geometry};
use crate::style::PaintStyle;
use crate::surface::Surface;
use kurbo::{BezPath, Point};
use peniko::Color;

/// Draw one live segment of a freehand stroke.
pub fn render_segment<S: Surface + ?Sized>(surface: &mut S, from: Point, to: Point, style: &PaintStyle) {
    let mut segment = BezPath::new();
    segment.move_to(from);
    segment.line_to(to);
    surface.stroke(&segment, style);
}

/// Draw a committed path in full with its own stored style.
///
/// Returns false when the path has nothing visible.
pub fn render_path<S: Surface + ?Sized>(surface: &mut S, path: &DrawingPath) -> bool {
    let Some(geometry) = shapes::synthesize(path) else {
        return false;
    };
    let style = PaintStyle::for_path(path);
    match geometry {
        Geometry::Stroke(outline) => surface.stroke(&outline, &style),
        Geometry::FillSurface => surface.fill(&style),
    }
    true
}

/// Finish a gesture on the surface.
///
/// Freehand paths were already drawn segment by segment, so only shapes and
/// fills draw here.
pub fn finalize_path<S: Surface + ?Sized>(surface: &mut S, path: &DrawingPath) {
    if !path.tool.is_freehand() {
        render_path(surface, path);
    }
}

/// Rebuild the surface from scratch: background, then every path in order.
pub fn replay<S: Surface + ?Sized>(surface: &mut S, paths: &[DrawingPath], background: Color) {
    log::debug!("Replaying {} paths", paths.len());
    surface.reset(background);
    for path in paths {
        render_path(surface, path);
    }
}
