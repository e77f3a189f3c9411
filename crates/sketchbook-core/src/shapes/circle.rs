//! Circle shape.

use super::ShapeTrait;
use kurbo::{BezPath, Point, Shape as KurboShape};

/// Tolerance used when flattening the circle into curves.
const CIRCLE_TOLERANCE: f64 = 0.1;

/// Circle centered on the gesture start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    /// Distance from the start to the end of the gesture.
    pub radius: f64,
}

impl ShapeTrait for Circle {
    fn from_anchors(first: Point, last: Point) -> Self {
        Self {
            center: first,
            radius: first.distance(last),
        }
    }

    fn to_path(&self) -> BezPath {
        kurbo::Circle::new(self.center, self.radius).to_path(CIRCLE_TOLERANCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_and_radius() {
        let circle = Circle::from_anchors(Point::new(100.0, 100.0), Point::new(150.0, 100.0));
        assert_eq!(circle.center, Point::new(100.0, 100.0));
        assert!((circle.radius - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_diagonal_radius() {
        let circle = Circle::from_anchors(Point::new(0.0, 0.0), Point::new(30.0, 40.0));
        assert!((circle.radius - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_outline_bounds() {
        let circle = Circle::from_anchors(Point::new(100.0, 100.0), Point::new(150.0, 100.0));
        let bounds = circle.to_path().bounding_box();
        assert!((bounds.x0 - 50.0).abs() < 1e-6);
        assert!((bounds.x1 - 150.0).abs() < 1e-6);
        assert!((bounds.y0 - 50.0).abs() < 1e-6);
        assert!((bounds.y1 - 150.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_radius() {
        let circle = Circle::from_anchors(Point::new(5.0, 5.0), Point::new(5.0, 5.0));
        assert_eq!(circle.radius, 0.0);
        let _ = circle.to_path();
    }
}
