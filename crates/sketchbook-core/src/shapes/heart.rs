//! Heart shape.

use super::ShapeTrait;
use kurbo::{BezPath, Point};

/// Heart drawn inside a box anchored at the gesture start.
///
/// The box uses the absolute drag extents, so the heart always opens
/// downward and to the right of the start point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Heart {
    /// Top-left of the bounding box.
    pub origin: Point,
    pub width: f64,
    pub height: f64,
}

impl Heart {
    /// The dip between the two lobes.
    pub fn top_dip(&self) -> Point {
        Point::new(self.origin.x + self.width / 2.0, self.origin.y + self.height / 4.0)
    }

    /// The bottom tip.
    pub fn bottom_tip(&self) -> Point {
        Point::new(self.origin.x + self.width / 2.0, self.origin.y + self.height)
    }
}

impl ShapeTrait for Heart {
    fn from_anchors(first: Point, last: Point) -> Self {
        Self {
            origin: first,
            width: (last.x - first.x).abs(),
            height: (last.y - first.y).abs(),
        }
    }

    fn to_path(&self) -> BezPath {
        let Point { x, y } = self.origin;
        let (w, h) = (self.width, self.height);
        let mut path = BezPath::new();
        path.move_to(self.top_dip());
        path.curve_to(Point::new(x, y), Point::new(x, y + h / 2.0), self.bottom_tip());
        path.curve_to(Point::new(x + w, y + h / 2.0), Point::new(x + w, y), self.top_dip());
        path
    }
}
