//! Sketchbook Core Library
//!
//! Platform-agnostic drawing engine: turns pointer input into a replayable
//! history of strokes and shapes, renders it onto any [`Surface`], and
//! serializes both the history and the raster.

pub mod engine;
pub mod error;
pub mod history;
pub mod input;
pub mod mapper;
pub mod path;
pub mod raster;
pub mod recorder;
pub mod render;
pub mod shapes;
pub mod style;
pub mod surface;
pub mod tools;

pub use engine::{DrawingEngine, EngineConfig};
pub use error::{EngineError, RasterError};
pub use history::{DrawingState, History};
pub use input::InputEvent;
pub use mapper::{DisplayRect, RawPosition};
pub use path::DrawingPath;
pub use raster::{decode_raster, encode_raster};
pub use recorder::StrokeRecorder;
pub use shapes::Geometry;
pub use style::PaintStyle;
pub use surface::{RasterImage, Surface};
pub use tools::{BrushType, ToolKind, ToolSettings};

pub use kurbo::Point;
