//! Stroke recorder: the Idle/Recording gesture state machine.

use crate::path::DrawingPath;
use crate::tools::ToolSettings;
use kurbo::Point;

/// Accumulates the points of the gesture in progress.
///
/// `None` is Idle, `Some` is Recording.
#[derive(Debug, Clone, Default)]
pub struct StrokeRecorder {
    active: Option<DrawingPath>,
}

impl StrokeRecorder {
    /// Create an idle recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a gesture is being recorded.
    pub fn is_recording(&self) -> bool {
        self.active.is_some()
    }

    /// The path in progress, if any.
    pub fn active(&self) -> Option<&DrawingPath> {
        self.active.as_ref()
    }

    /// Start recording with the current settings.
    ///
    /// Returns the new path, or `None` if a gesture is already running.
    pub fn begin(&mut self, settings: &ToolSettings, point: Point) -> Option<&DrawingPath> {
        if self.active.is_some() {
            log::trace!("Ignoring gesture start while recording");
            return None;
        }
        self.active = Some(DrawingPath::start(settings, point));
        self.active.as_ref()
    }

    /// Append a point.
    ///
    /// Returns the segment from the previous point to the new one, or
    /// `None` when idle.
    pub fn extend(&mut self, point: Point) -> Option<(Point, Point)> {
        let path = self.active.as_mut()?;
        let previous = path.points.last().copied().unwrap_or(point);
        path.points.push(point);
        Some((previous, point))
    }

    /// Stop recording and hand back the finished path.
    ///
    /// Returns `None` when idle or when nothing was recorded.
    pub fn finish(&mut self) -> Option<DrawingPath> {
        self.active.take().filter(|path| !path.is_empty())
    }

    /// Stop recording and drop the path.
    pub fn discard(&mut self) -> Option<DrawingPath> {
        self.active.take()
    }
}
