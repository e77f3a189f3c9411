//! Gesture scripts: recorded host calls replayed against an engine.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use sketchbook_core::{BrushType, DisplayRect, DrawingEngine, RawPosition, Surface, ToolKind};

/// One host call. Positions are in logical surface coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ScriptCommand {
    SetTool { tool: ToolKind },
    SetColor { color: String },
    SetSize { size: f64 },
    SetBrushType {
        #[serde(rename = "brushType")]
        brush_type: BrushType,
    },
    GestureStart { x: f64, y: f64 },
    GestureMove { x: f64, y: f64 },
    GestureEnd,
    GestureCancel,
    Undo,
    Redo,
    Clear,
}

/// Parse a JSON array of commands.
pub fn parse_script(json: &str) -> Result<Vec<ScriptCommand>, serde_json::Error> {
    serde_json::from_str(json)
}

impl ScriptCommand {
    /// Apply this command to an engine.
    pub fn apply<S: Surface>(&self, engine: &mut DrawingEngine<S>) {
        // Script coordinates are already logical: display the surface unscaled.
        let display = DisplayRect::unscaled(engine.logical_size());
        match self {
            ScriptCommand::SetTool { tool } => engine.set_tool(*tool),
            ScriptCommand::SetColor { color } => engine.set_color(color.as_str()),
            ScriptCommand::SetSize { size } => engine.set_size(*size),
            ScriptCommand::SetBrushType { brush_type } => engine.set_brush_type(*brush_type),
            ScriptCommand::GestureStart { x, y } => {
                engine.forward_gesture_start(RawPosition::new(Point::new(*x, *y), display))
            }
            ScriptCommand::GestureMove { x, y } => {
                engine.forward_gesture_move(RawPosition::new(Point::new(*x, *y), display))
            }
            ScriptCommand::GestureEnd => engine.forward_gesture_end(),
            ScriptCommand::GestureCancel => {
                engine.cancel_gesture();
            }
            ScriptCommand::Undo => {
                engine.undo();
            }
            ScriptCommand::Redo => {
                engine.redo();
            }
            ScriptCommand::Clear => engine.clear(),
        }
    }
}

/// Apply every command in order.
pub fn run_script<S: Surface>(engine: &mut DrawingEngine<S>, commands: &[ScriptCommand]) {
    log::debug!("Running script with {} commands", commands.len());
    for command in commands {
        log::trace!("Script command {command:?}");
        command.apply(engine);
    }
}
