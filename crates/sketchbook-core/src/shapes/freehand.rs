//! Freehand polyline.

use kurbo::{BezPath, Point};

/// Point-to-point polyline through every sampled point.
pub fn polyline(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();

    let Some((first, rest)) = points.split_first() else {
        return path;
    };

    path.move_to(*first);
    for point in rest {
        path.line_to(*point);
    }

    path
}
