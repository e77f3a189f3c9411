//! Isosceles triangle shape.

use super::ShapeTrait;
use kurbo::{BezPath, Point};

/// Triangle with its apex centered on the top edge of the gesture box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub apex: Point,
    pub base_start: Point,
    pub base_end: Point,
}

impl ShapeTrait for Triangle {
    fn from_anchors(first: Point, last: Point) -> Self {
        let width = last.x - first.x;
        Self {
            apex: Point::new(first.x + width / 2.0, first.y),
            base_start: Point::new(first.x, last.y),
            base_end: Point::new(last.x, last.y),
        }
    }

    fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.apex);
        path.line_to(self.base_start);
        path.line_to(self.base_end);
        path.close_path();
        path
    }
}
