//! Committed drawing paths.

use crate::tools::{BrushType, ToolKind, ToolSettings};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One committed stroke or shape.
///
/// Only the recorder mutates a path, and only before it is committed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawingPath {
    /// Unique identifier.
    pub id: String,
    pub tool: ToolKind,
    /// Stroke color as given by the host, in CSS color syntax. Kept verbatim;
    /// strings that do not parse render black.
    pub color: String,
    /// Stroke width. Recorded paths are in `[1, 50]`; imported values are
    /// kept as-is and clamped when drawn.
    pub size: f64,
    /// Brush variant; only meaningful for freehand tools.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brush_type: Option<BrushType>,
    /// Sampled points in arrival order.
    pub points: Vec<Point>,
}

impl DrawingPath {
    /// Start a path from the current settings with a single initial point.
    pub fn start(settings: &ToolSettings, point: Point) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            tool: settings.tool(),
            color: settings.color().to_string(),
            size: settings.size(),
            brush_type: Some(settings.brush_type()),
            points: vec![point],
        }
    }

    /// The first and last recorded point, if the gesture moved at all.
    pub fn anchors(&self) -> Option<(Point, Point)> {
        if self.points.len() < 2 {
            return None;
        }
        Some((self.points[0], self.points[self.points.len() - 1]))
    }

    /// The brush variant that applies when rendering, if any.
    pub fn effective_brush(&self) -> BrushType {
        if self.tool.is_freehand() {
            self.brush_type.unwrap_or_default()
        } else {
            BrushType::Round
        }
    }

    /// Get the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the path has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
