//! Arrow shape.

use super::ShapeTrait;
use kurbo::{BezPath, Point};
use std::f64::consts::FRAC_PI_6;

/// Length of each arrowhead barb, in logical pixels.
pub const HEAD_LENGTH: f64 = 20.0;
/// Angle between the shaft and each barb.
pub const HEAD_ANGLE: f64 = FRAC_PI_6;

/// Open arrow: shaft plus two barbs at the end point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrow {
    pub start: Point,
    /// Where the arrowhead points.
    pub end: Point,
}

impl Arrow {
    /// Direction of the shaft in radians.
    pub fn angle(&self) -> f64 {
        (self.end.y - self.start.y).atan2(self.end.x - self.start.x)
    }

    /// The two barb tips.
    pub fn head_points(&self) -> (Point, Point) {
        let angle = self.angle();
        let barb = |offset: f64| {
            Point::new(
                self.end.x - HEAD_LENGTH * (angle + offset).cos(),
                self.end.y - HEAD_LENGTH * (angle + offset).sin(),
            )
        };
        (barb(-HEAD_ANGLE), barb(HEAD_ANGLE))
    }
}

impl ShapeTrait for Arrow {
    fn from_anchors(first: Point, last: Point) -> Self {
        Self { start: first, end: last }
    }

    fn to_path(&self) -> BezPath {
        let (left, right) = self.head_points();
        let mut path = BezPath::new();
        path.move_to(self.start);
        path.line_to(self.end);
        path.line_to(left);
        path.move_to(self.end);
        path.line_to(right);
        path
    }
}
