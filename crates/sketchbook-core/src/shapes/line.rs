//! Straight line shape.

use super::ShapeTrait;
use kurbo::{BezPath, Point};

/// Segment from gesture start to gesture end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    /// Length of the segment.
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

impl ShapeTrait for Line {
    fn from_anchors(first: Point, last: Point) -> Self {
        Self { start: first, end: last }
    }

    fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.start);
        path.line_to(self.end);
        path
    }
}
