//! Five-pointed star shape.

use super::ShapeTrait;
use kurbo::{BezPath, Point};
use std::f64::consts::{FRAC_PI_2, PI};

/// Number of outer points.
const POINTS: usize = 5;

/// Star inscribed in the gesture box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub center: Point,
    pub outer_radius: f64,
}

impl Star {
    /// Radius of the inner (concave) vertices.
    pub fn inner_radius(&self) -> f64 {
        self.outer_radius / 2.0
    }

    /// The ten vertices, alternating outer and inner, starting straight up.
    pub fn vertices(&self) -> Vec<Point> {
        (0..POINTS * 2)
            .map(|i| {
                let angle = i as f64 * PI / POINTS as f64 - FRAC_PI_2;
                let r = if i % 2 == 0 { self.outer_radius } else { self.inner_radius() };
                Point::new(self.center.x + r * angle.cos(), self.center.y + r * angle.sin())
            })
            .collect()
    }
}

impl ShapeTrait for Star {
    fn from_anchors(first: Point, last: Point) -> Self {
        let dx = (last.x - first.x).abs();
        let dy = (last.y - first.y).abs();
        Self {
            center: first.midpoint(last),
            outer_radius: dx.min(dy) / 2.0,
        }
    }

    fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        for (i, vertex) in self.vertices().into_iter().enumerate() {
            if i == 0 {
                path.move_to(vertex);
            } else {
                path.line_to(vertex);
            }
        }
        path.close_path();
        path
    }
}
