//! Shape synthesis: geometry for each tool from a gesture's anchor points.
//!
//! Shapes are never built while a gesture runs. They are derived from the
//! first and last recorded point once, at gesture end, and again on every
//! replay, so the same two anchors always give the same outline.

mod arrow;
mod circle;
mod freehand;
mod heart;
mod line;
mod rectangle;
mod star;
mod triangle;

pub use arrow::Arrow;
pub use circle::Circle;
pub use freehand::polyline;
pub use heart::Heart;
pub use line::Line;
pub use rectangle::Rectangle;
pub use star::Star;
pub use triangle::Triangle;

use crate::path::DrawingPath;
use crate::tools::ToolKind;
use kurbo::{BezPath, Point};

/// Common trait for synthesized shapes.
pub trait ShapeTrait {
    /// Build the shape from the first and last point of a gesture.
    fn from_anchors(first: Point, last: Point) -> Self
    where
        Self: Sized;

    /// Outline to stroke.
    fn to_path(&self) -> BezPath;
}

/// A synthesized parametric shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rectangle(Rectangle),
    Circle(Circle),
    Line(Line),
    Triangle(Triangle),
    Star(Star),
    Heart(Heart),
    Arrow(Arrow),
}

impl Shape {
    /// Synthesize the shape for a tool, or `None` for non-shape tools.
    pub fn for_tool(tool: ToolKind, first: Point, last: Point) -> Option<Self> {
        let shape = match tool {
            ToolKind::Square => Shape::Rectangle(Rectangle::from_anchors(first, last)),
            ToolKind::Circle => Shape::Circle(Circle::from_anchors(first, last)),
            ToolKind::Line => Shape::Line(Line::from_anchors(first, last)),
            ToolKind::Triangle => Shape::Triangle(Triangle::from_anchors(first, last)),
            ToolKind::Star => Shape::Star(Star::from_anchors(first, last)),
            ToolKind::Heart => Shape::Heart(Heart::from_anchors(first, last)),
            ToolKind::Arrow => Shape::Arrow(Arrow::from_anchors(first, last)),
            ToolKind::Brush | ToolKind::Eraser | ToolKind::Fill => return None,
        };
        Some(shape)
    }

    /// Outline to stroke.
    pub fn to_path(&self) -> BezPath {
        match self {
            Shape::Rectangle(s) => s.to_path(),
            Shape::Circle(s) => s.to_path(),
            Shape::Line(s) => s.to_path(),
            Shape::Triangle(s) => s.to_path(),
            Shape::Star(s) => s.to_path(),
            Shape::Heart(s) => s.to_path(),
            Shape::Arrow(s) => s.to_path(),
        }
    }
}

/// What a committed path puts on the surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Stroke this outline with the path's style.
    Stroke(BezPath),
    /// Cover the whole surface with the path's color.
    FillSurface,
}

/// Compute the full geometry of a committed path.
///
/// Returns `None` when the path has nothing visible: a freehand path with a
/// single point, or a shape gesture that never moved.
pub fn synthesize(path: &DrawingPath) -> Option<Geometry> {
    match path.tool {
        ToolKind::Brush | ToolKind::Eraser => {
            if path.points.len() < 2 {
                return None;
            }
            Some(Geometry::Stroke(polyline(&path.points)))
        }
        ToolKind::Fill => (!path.is_empty()).then_some(Geometry::FillSurface),
        tool => {
            let (first, last) = path.anchors()?;
            Shape::for_tool(tool, first, last).map(|shape| Geometry::Stroke(shape.to_path()))
        }
    }
}
