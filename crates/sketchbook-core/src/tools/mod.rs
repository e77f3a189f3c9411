//! Tool system for the drawing engine.

use serde::{Deserialize, Serialize};

/// Smallest stroke width a path can carry.
pub const MIN_SIZE: f64 = 1.0;
/// Largest stroke width a path can carry.
pub const MAX_SIZE: f64 = 50.0;

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    #[default]
    Brush,
    Eraser,
    Fill,
    /// Axis-aligned rectangle.
    Square,
    Circle,
    Line,
    Triangle,
    Star,
    Heart,
    Arrow,
}

impl ToolKind {
    /// Freehand tools record every point and render while the gesture runs.
    pub fn is_freehand(self) -> bool {
        matches!(self, ToolKind::Brush | ToolKind::Eraser)
    }

    /// Shape tools only use the first and last point of a gesture.
    pub fn is_shape(self) -> bool {
        !self.is_freehand() && self != ToolKind::Fill
    }

    /// Get the wire name of this tool.
    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Brush => "brush",
            ToolKind::Eraser => "eraser",
            ToolKind::Fill => "fill",
            ToolKind::Square => "square",
            ToolKind::Circle => "circle",
            ToolKind::Line => "line",
            ToolKind::Triangle => "triangle",
            ToolKind::Star => "star",
            ToolKind::Heart => "heart",
            ToolKind::Arrow => "arrow",
        }
    }
}

/// Visual variant of the freehand brush.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BrushType {
    #[default]
    Round,
    /// Glow sized to half the stroke width.
    Soft,
    /// Square caps, no glow.
    Pencil,
    /// Reduced opacity.
    Marker,
    /// Glow sized to the full stroke width.
    Airbrush,
}

/// Clamp a stroke width into the accepted range.
///
/// Non-finite input falls back to the minimum.
pub fn clamp_size(size: f64) -> f64 {
    if size.is_nan() {
        return MIN_SIZE;
    }
    size.clamp(MIN_SIZE, MAX_SIZE)
}

/// Transient tool configuration, read when a gesture starts.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolSettings {
    tool: ToolKind,
    color: String,
    size: f64,
    brush_type: BrushType,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            tool: ToolKind::default(),
            color: "#000000".to_string(),
            size: 5.0,
            brush_type: BrushType::default(),
        }
    }
}

impl ToolSettings {
    /// Create settings with the default brush.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn brush_type(&self) -> BrushType {
        self.brush_type
    }

    pub fn set_tool(&mut self, tool: ToolKind) {
        self.tool = tool;
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    /// Set the stroke width, clamped to `[1, 50]`.
    pub fn set_size(&mut self, size: f64) {
        self.size = clamp_size(size);
    }

    pub fn set_brush_type(&mut self, brush_type: BrushType) {
        self.brush_type = brush_type;
    }
}
