//! Rectangle shape.

use super::ShapeTrait;
use kurbo::{BezPath, Point};

/// Axis-aligned rectangle with possibly negative extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    /// Corner where the gesture started.
    pub origin: Point,
    /// Signed width (negative when dragged left).
    pub width: f64,
    /// Signed height (negative when dragged up).
    pub height: f64,
}

impl ShapeTrait for Rectangle {
    fn from_anchors(first: Point, last: Point) -> Self {
        Self {
            origin: first,
            width: last.x - first.x,
            height: last.y - first.y,
        }
    }

    fn to_path(&self) -> BezPath {
        let Point { x, y } = self.origin;
        let mut path = BezPath::new();
        path.move_to((x, y));
        path.line_to((x + self.width, y));
        path.line_to((x + self.width, y + self.height));
        path.line_to((x, y + self.height));
        path.close_path();
        path
    }
}
