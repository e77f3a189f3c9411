//! The drawing engine: single owner of the surface and the drawing state.

use crate::error::{EngineResult, RasterError};
use crate::history::{DrawingState, History};
use crate::input::{GestureAction, InputEvent};
use crate::mapper::{DisplayRect, RawPosition};
use crate::path::DrawingPath;
use crate::raster;
use crate::recorder::StrokeRecorder;
use crate::render;
use crate::style::PaintStyle;
use crate::surface::{RasterImage, Surface};
use crate::tools::{BrushType, ToolKind, ToolSettings};
use kurbo::{Point, Size};
use peniko::Color;

/// Engine construction parameters.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Logical surface width in pixels.
    pub width: u32,
    /// Logical surface height in pixels.
    pub height: u32,
    /// Color the surface is reset to.
    pub background: Color,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            background: Color::from_rgba8(255, 255, 255, 255),
        }
    }
}

/// Interactive drawing engine.
///
/// Owns the raster surface and the drawing history; hosts mutate either
/// only through the methods below.
#[derive(Debug)]
pub struct DrawingEngine<S: Surface> {
    surface: S,
    background: Color,
    settings: ToolSettings,
    recorder: StrokeRecorder,
    history: History,
    /// While set, new gestures are refused.
    blocked: bool,
}

impl<S: Surface> DrawingEngine<S> {
    /// Create an engine on a surface and paint the background.
    pub fn new(surface: S, background: Color) -> Self {
        let mut engine = Self {
            surface,
            background,
            settings: ToolSettings::new(),
            recorder: StrokeRecorder::new(),
            history: History::new(),
            blocked: false,
        };
        engine.surface.reset(background);
        engine
    }

    /// Borrow the surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Logical size of the surface.
    pub fn logical_size(&self) -> Size {
        let (width, height) = self.surface.size();
        Size::new(width as f64, height as f64)
    }

    /// Current tool settings.
    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    /// Committed drawing state.
    pub fn state(&self) -> &DrawingState {
        self.history.state()
    }

    /// The path being recorded, if a gesture is running.
    pub fn active_path(&self) -> Option<&DrawingPath> {
        self.recorder.active()
    }

    pub fn set_tool(&mut self, tool: ToolKind) {
        self.settings.set_tool(tool);
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.settings.set_color(color);
    }

    /// Set the stroke width; clamped to `[1, 50]`.
    pub fn set_size(&mut self, size: f64) {
        self.settings.set_size(size);
    }

    pub fn set_brush_type(&mut self, brush_type: BrushType) {
        self.settings.set_brush_type(brush_type);
    }

    /// Refuse new gestures while blocked. Blocking ends (and commits) any
    /// gesture in progress.
    pub fn set_drawing_blocked(&mut self, blocked: bool) {
        self.blocked = blocked;
        if blocked {
            self.force_end_gesture();
        }
    }

    pub fn is_drawing_blocked(&self) -> bool {
        self.blocked
    }

    /// Feed a raw host input event.
    pub fn handle_input(&mut self, event: &InputEvent, display: DisplayRect) {
        match event.action() {
            GestureAction::Start(client) => self.forward_gesture_start(RawPosition::new(client, display)),
            GestureAction::Move(client) => self.forward_gesture_move(RawPosition::new(client, display)),
            GestureAction::End => self.forward_gesture_end(),
            GestureAction::Ignore => {}
        }
    }

    /// Pointer down: start recording a path.
    pub fn forward_gesture_start(&mut self, raw: RawPosition) {
        let point = raw.to_logical(self.logical_size());
        self.begin_gesture(point);
    }

    /// Pointer moved while down.
    pub fn forward_gesture_move(&mut self, raw: RawPosition) {
        let point = raw.to_logical(self.logical_size());
        self.extend_gesture(point);
    }

    /// Pointer up, left the surface, or touch ended/cancelled: commit.
    pub fn forward_gesture_end(&mut self) {
        self.end_gesture();
    }

    /// Start a gesture at a point already in logical coordinates.
    pub fn begin_gesture(&mut self, point: Point) {
        if self.blocked {
            log::trace!("Drawing blocked, ignoring gesture start");
            return;
        }
        if self.recorder.begin(&self.settings, point).is_none() {
            return;
        }
        log::trace!("Gesture start with {} at {point:?}", self.settings.tool().name());
        self.history.discard_redo();
    }

    /// Extend the gesture with a point in logical coordinates.
    pub fn extend_gesture(&mut self, point: Point) {
        let Some((from, to)) = self.recorder.extend(point) else {
            return;
        };
        if let Some(path) = self.recorder.active() {
            if path.tool.is_freehand() {
                let style = PaintStyle::for_path(path);
                render::render_segment(&mut self.surface, from, to, &style);
            }
        }
    }

    /// End the gesture and commit what was recorded.
    pub fn end_gesture(&mut self) {
        let Some(path) = self.recorder.finish() else {
            return;
        };
        render::finalize_path(&mut self.surface, &path);
        self.history.commit(path);
    }

    /// Same as a gesture end, for hosts that need to stop drawing.
    pub fn force_end_gesture(&mut self) {
        self.end_gesture();
    }

    /// Drop the gesture in progress without committing it.
    ///
    /// Returns true if a gesture was discarded.
    pub fn cancel_gesture(&mut self) -> bool {
        let Some(path) = self.recorder.discard() else {
            return false;
        };
        log::debug!("Discarded gesture {}", path.id);
        // Live freehand segments are already on the surface.
        if path.tool.is_freehand() && path.len() > 1 {
            self.redraw();
        }
        true
    }

    /// Undo the last committed path.
    /// Returns true if undo was performed.
    pub fn undo(&mut self) -> bool {
        if self.recorder.is_recording() || !self.history.undo() {
            return false;
        }
        self.redraw();
        true
    }

    /// Redo the last undone path.
    /// Returns true if redo was performed.
    pub fn redo(&mut self) -> bool {
        if self.recorder.is_recording() || !self.history.redo() {
            return false;
        }
        self.redraw();
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Drop all history and reset the surface. Not undoable.
    pub fn clear(&mut self) {
        log::debug!("Clearing drawing");
        self.recorder.discard();
        self.history.clear();
        self.surface.reset(self.background);
    }

    /// Redraw the surface from the committed paths.
    pub fn redraw(&mut self) {
        render::replay(&mut self.surface, self.history.paths(), self.background);
    }

    /// Encode the surface as a PNG data URL.
    pub fn export_raster(&self) -> Result<String, RasterError> {
        raster::encode_raster(&self.surface.read_pixels())
    }

    /// Load a PNG (or other image) data URL as the new surface content.
    ///
    /// On failure the surface and history are left untouched.
    pub fn import_raster(&mut self, data: &str) -> EngineResult<()> {
        let image = raster::decode_raster(data).inspect_err(|e| {
            log::warn!("Raster import failed: {e}");
        })?;
        self.apply_raster(&image);
        Ok(())
    }

    /// Replace the drawing with already-decoded pixels.
    ///
    /// History is dropped: the pixels cannot be turned back into paths.
    pub fn apply_raster(&mut self, image: &RasterImage) {
        log::debug!("Applying {}x{} raster", image.width, image.height);
        self.recorder.discard();
        self.history.clear();
        self.surface.reset(self.background);
        self.surface.draw_image(image);
    }

    /// Copy out the structured drawing state.
    pub fn export_state(&self) -> DrawingState {
        self.history.state().clone()
    }

    /// Replace the drawing state wholesale and redraw.
    pub fn import_state(&mut self, state: DrawingState) {
        log::debug!(
            "Importing state with {} paths, {} redo",
            state.paths.len(),
            state.redo_paths.len()
        );
        self.recorder.discard();
        self.history.replace(state);
        self.redraw();
    }

    /// Export the structured state as JSON.
    pub fn export_state_json(&self) -> EngineResult<String> {
        Ok(self.history.state().to_json()?)
    }

    /// Import the structured state from JSON.
    pub fn import_state_json(&mut self, json: &str) -> EngineResult<()> {
        let state = DrawingState::from_json(json)?;
        self.import_state(state);
        Ok(())
    }
}

impl<S: Surface> DrawingEngine<S> {
    /// Create an engine with a configured background.
    pub fn with_config(surface: S, config: &EngineConfig) -> Self {
        Self::new(surface, config.background)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::testing::{RecordingSurface, SurfaceOp};
    use peniko::Compose;

    fn engine() -> DrawingEngine<RecordingSurface> {
        DrawingEngine::with_config(RecordingSurface::new(800, 800), &EngineConfig::default())
    }

    fn draw(engine: &mut DrawingEngine<RecordingSurface>, points: &[(f64, f64)]) {
        engine.begin_gesture(points[0].into());
        for &p in &points[1..] {
            engine.extend_gesture(p.into());
        }
        engine.end_gesture();
    }

    #[test]
    fn test_new_paints_background() {
        let engine = engine();
        assert_eq!(engine.surface().ops, vec![SurfaceOp::Reset([255, 255, 255, 255])]);
        assert!(engine.state().is_empty());
    }

    #[test]
    fn test_brush_stroke_then_undo() {
        let mut engine = engine();
        engine.set_tool(ToolKind::Brush);
        engine.set_color("#FF0000");
        engine.set_size(5.0);
        draw(&mut engine, &[(0.0, 0.0), (10.0, 10.0), (20.0, 5.0)]);

        let state = engine.state();
        assert_eq!(state.paths.len(), 1);
        assert_eq!(state.paths[0].tool, ToolKind::Brush);
        assert_eq!(
            state.paths[0].points,
            vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0), Point::new(20.0, 5.0)]
        );
        // Two live segments
        assert_eq!(engine.surface().strokes().len(), 2);

        assert!(engine.undo());
        assert_eq!(engine.state().paths.len(), 0);
        assert_eq!(engine.state().redo_paths.len(), 1);
    }

    #[test]
    fn test_undo_redo_restores_exactly() {
        let mut engine = engine();
        draw(&mut engine, &[(0.0, 0.0), (5.0, 5.0)]);
        draw(&mut engine, &[(1.0, 0.0), (6.0, 5.0)]);
        let before = engine.export_state();

        assert!(engine.undo());
        assert!(engine.redo());
        assert_eq!(engine.export_state(), before);
    }

    #[test]
    fn test_new_gesture_clears_redo() {
        let mut engine = engine();
        draw(&mut engine, &[(0.0, 0.0), (5.0, 5.0)]);
        draw(&mut engine, &[(1.0, 0.0), (6.0, 5.0)]);
        engine.undo();
        assert!(engine.can_redo());

        engine.begin_gesture(Point::new(3.0, 3.0));
        assert!(!engine.can_redo());
        engine.extend_gesture(Point::new(4.0, 4.0));
        engine.end_gesture();
        assert!(engine.state().redo_paths.is_empty());
        assert_eq!(engine.state().paths.len(), 2);
    }

    #[test]
    fn test_shape_renders_only_at_end() {
        let mut engine = engine();
        engine.set_tool(ToolKind::Circle);
        engine.begin_gesture(Point::new(100.0, 100.0));
        engine.extend_gesture(Point::new(120.0, 100.0));
        engine.extend_gesture(Point::new(150.0, 100.0));
        assert!(engine.surface().strokes().is_empty());

        engine.end_gesture();
        assert_eq!(engine.surface().strokes().len(), 1);
        assert_eq!(engine.state().paths[0].points.len(), 3);
    }

    #[test]
    fn test_shape_tap_commits_invisible_path() {
        let mut engine = engine();
        engine.set_tool(ToolKind::Star);
        engine.begin_gesture(Point::new(40.0, 40.0));
        engine.end_gesture();

        assert_eq!(engine.state().paths.len(), 1);
        assert!(engine.surface().strokes().is_empty());

        engine.redraw();
        assert!(engine.surface().strokes().is_empty());
    }

    #[test]
    fn test_replay_uses_stored_style() {
        let mut engine = engine();
        engine.set_color("#FF0000");
        engine.set_size(3.0);
        draw(&mut engine, &[(0.0, 0.0), (5.0, 5.0)]);

        engine.set_tool(ToolKind::Eraser);
        engine.set_color("#00FF00");
        engine.set_size(40.0);
        engine.redraw();

        let ops = engine.surface().since_reset();
        let [SurfaceOp::Stroke { style, .. }] = ops else {
            panic!("expected one replayed stroke, got {ops:?}");
        };
        assert_eq!(style.rgba8(), [255, 0, 0, 255]);
        assert_eq!(style.width, 3.0);
        assert_eq!(style.compose, Compose::SrcOver);
    }

    #[test]
    fn test_eraser_live_segments_erase() {
        let mut engine = engine();
        engine.set_tool(ToolKind::Eraser);
        draw(&mut engine, &[(0.0, 0.0), (5.0, 5.0)]);
        assert!(engine.surface().strokes().iter().all(|s| s.is_erase()));
    }

    #[test]
    fn test_clear() {
        let mut engine = engine();
        draw(&mut engine, &[(0.0, 0.0), (5.0, 5.0)]);
        draw(&mut engine, &[(1.0, 0.0), (6.0, 5.0)]);
        engine.undo();
        engine.clear();

        assert!(engine.state().paths.is_empty());
        assert!(engine.state().redo_paths.is_empty());
        assert_eq!(engine.surface().ops.last(), Some(&SurfaceOp::Reset([255, 255, 255, 255])));
        assert!(!engine.undo());
    }

    #[test]
    fn test_lifecycle_misuse_is_noop() {
        let mut engine = engine();
        engine.end_gesture();
        engine.extend_gesture(Point::new(1.0, 1.0));
        assert!(engine.state().is_empty());
        assert!(!engine.undo());
        assert!(!engine.redo());

        engine.begin_gesture(Point::new(1.0, 1.0));
        engine.begin_gesture(Point::new(50.0, 50.0));
        engine.extend_gesture(Point::new(2.0, 2.0));
        engine.end_gesture();
        engine.end_gesture();
        assert_eq!(engine.state().paths.len(), 1);
        assert_eq!(engine.state().paths[0].points[0], Point::new(1.0, 1.0));
    }

    #[test]
    fn test_undo_redo_wait_for_gesture_end() {
        let mut engine = engine();
        draw(&mut engine, &[(0.0, 0.0), (5.0, 5.0)]);
        engine.begin_gesture(Point::new(10.0, 10.0));
        engine.extend_gesture(Point::new(20.0, 20.0));
        assert!(!engine.undo());
        assert_eq!(engine.state().paths.len(), 1);

        engine.end_gesture();
        assert!(engine.undo());
        assert_eq!(engine.state().paths.len(), 1);
    }

    #[test]
    fn test_cancel_discards() {
        let mut engine = engine();
        draw(&mut engine, &[(0.0, 0.0), (5.0, 5.0)]);
        engine.begin_gesture(Point::new(10.0, 10.0));
        engine.extend_gesture(Point::new(20.0, 20.0));
        assert!(engine.cancel_gesture());
        assert!(!engine.cancel_gesture());

        assert_eq!(engine.state().paths.len(), 1);
        // Surface rebuilt without the cancelled stroke
        assert_eq!(engine.surface().since_reset().len(), 1);
    }

    #[test]
    fn test_touch_cancel_commits() {
        let mut engine = engine();
        let display = DisplayRect::unscaled(engine.logical_size());
        engine.handle_input(&InputEvent::TouchStart { touches: vec![Point::new(1.0, 1.0)] }, display);
        engine.handle_input(&InputEvent::TouchMove { touches: vec![Point::new(2.0, 2.0)] }, display);
        engine.handle_input(&InputEvent::TouchCancel, display);
        assert_eq!(engine.state().paths.len(), 1);
    }

    #[test]
    fn test_handle_input_maps_coordinates() {
        let mut engine = engine();
        // 800x800 surface displayed at 400x400, offset by (10, 20)
        let display = DisplayRect::new(10.0, 20.0, 400.0, 400.0);
        engine.handle_input(&InputEvent::MouseDown { client: Point::new(10.0, 20.0) }, display);
        engine.handle_input(&InputEvent::MouseMove { client: Point::new(60.0, 70.0) }, display);
        engine.handle_input(&InputEvent::MouseLeave, display);

        assert_eq!(
            engine.state().paths[0].points,
            vec![Point::new(0.0, 0.0), Point::new(100.0, 100.0)]
        );
    }

    #[test]
    fn test_multi_touch_does_not_draw() {
        let mut engine = engine();
        let display = DisplayRect::unscaled(engine.logical_size());
        let two = vec![Point::new(1.0, 1.0), Point::new(5.0, 5.0)];
        engine.handle_input(&InputEvent::TouchStart { touches: two }, display);
        assert!(engine.active_path().is_none());
    }

    #[test]
    fn test_blocked_drawing() {
        let mut engine = engine();
        engine.begin_gesture(Point::new(0.0, 0.0));
        engine.extend_gesture(Point::new(3.0, 3.0));
        engine.set_drawing_blocked(true);
        // Active gesture was committed
        assert_eq!(engine.state().paths.len(), 1);

        engine.begin_gesture(Point::new(9.0, 9.0));
        assert!(engine.active_path().is_none());

        engine.set_drawing_blocked(false);
        engine.begin_gesture(Point::new(9.0, 9.0));
        assert!(engine.active_path().is_some());
    }

    #[test]
    fn test_size_clamped_on_paths() {
        let mut engine = engine();
        engine.set_size(120.0);
        draw(&mut engine, &[(0.0, 0.0), (1.0, 1.0)]);
        engine.set_size(-3.0);
        draw(&mut engine, &[(0.0, 0.0), (1.0, 1.0)]);
        assert_eq!(engine.state().paths[0].size, 50.0);
        assert_eq!(engine.state().paths[1].size, 1.0);
    }

    #[test]
    fn test_state_round_trip() {
        let mut engine = engine();
        engine.set_tool(ToolKind::Arrow);
        draw(&mut engine, &[(0.0, 0.0), (50.0, 10.0)]);
        engine.set_tool(ToolKind::Brush);
        engine.set_brush_type(BrushType::Pencil);
        draw(&mut engine, &[(5.0, 5.0), (6.0, 7.0), (8.0, 9.0)]);
        engine.undo();
        let exported = engine.export_state();

        let mut other = self::engine();
        other.import_state(exported.clone());
        assert_eq!(other.export_state(), exported);

        let json = engine.export_state_json().unwrap();
        other.clear();
        other.import_state_json(&json).unwrap();
        assert_eq!(other.export_state(), exported);
        // Replay drew the one committed arrow
        assert_eq!(other.surface().since_reset().len(), 1);
    }

    #[test]
    fn test_import_state_json_rejects_garbage() {
        let mut engine = engine();
        draw(&mut engine, &[(0.0, 0.0), (1.0, 1.0)]);
        assert!(engine.import_state_json("{not json").is_err());
        assert_eq!(engine.state().paths.len(), 1);
    }

    #[test]
    fn test_raster_import_failure_leaves_surface() {
        let mut engine = engine();
        draw(&mut engine, &[(0.0, 0.0), (1.0, 1.0)]);
        let ops_before = engine.surface().ops.len();
        assert!(engine.import_raster("data:image/png;base64,!!!").is_err());
        assert_eq!(engine.surface().ops.len(), ops_before);
        assert_eq!(engine.state().paths.len(), 1);
    }

    #[test]
    fn test_raster_import_replaces_drawing() {
        let mut engine = engine();
        draw(&mut engine, &[(0.0, 0.0), (1.0, 1.0)]);
        let url = raster::encode_raster(&RasterImage::filled(3, 2, [0, 0, 0, 255])).unwrap();
        engine.import_raster(&url).unwrap();

        assert!(engine.state().is_empty());
        assert_eq!(
            engine.surface().since_reset(),
            &[SurfaceOp::DrawImage { width: 3, height: 2 }]
        );
    }

    #[test]
    fn test_export_raster() {
        let engine = engine();
        let url = engine.export_raster().unwrap();
        let image = raster::decode_raster(&url).unwrap();
        assert_eq!((image.width, image.height), (800, 800));
    }
}
