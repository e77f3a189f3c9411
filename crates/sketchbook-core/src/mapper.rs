//! Mapping from client (viewport) coordinates to surface logical pixels.

use kurbo::{Point, Size};

/// Where the surface is currently displayed, in client coordinates.
///
/// Hosts pass this with every event; layout can change between events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl DisplayRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// A display rect at the origin showing the surface at 1:1.
    pub fn unscaled(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }
}

/// A raw pointer position together with the display it was observed against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawPosition {
    pub client: Point,
    pub display: DisplayRect,
}

impl RawPosition {
    pub fn new(client: Point, display: DisplayRect) -> Self {
        Self { client, display }
    }

    /// Convert to logical coordinates of a surface of `logical` size.
    pub fn to_logical(self, logical: Size) -> Point {
        map_to_logical(self.client, self.display, logical)
    }
}

/// Convert a client point to surface logical pixels.
///
/// The scale compensates for the displayed size differing from the backing
/// store. A zero-sized display maps with scale 1 rather than producing
/// infinities.
pub fn map_to_logical(client: Point, display: DisplayRect, logical: Size) -> Point {
    let scale_x = axis_scale(logical.width, display.width);
    let scale_y = axis_scale(logical.height, display.height);
    Point::new(
        (client.x - display.left) * scale_x,
        (client.y - display.top) * scale_y,
    )
}

fn axis_scale(logical: f64, displayed: f64) -> f64 {
    if displayed.abs() < f64::EPSILON {
        1.0
    } else {
        logical / displayed
    }
}
