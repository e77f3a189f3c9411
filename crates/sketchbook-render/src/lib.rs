//! Sketchbook Render Library
//!
//! CPU raster backend for the drawing engine, built on tiny-skia.

mod blur;
mod convert;
mod pixmap;
mod renderer;

pub use pixmap::PixmapSurface;
pub use renderer::{
    PixmapEngine, PngRenderResult, RenderResult, RendererError, engine_to_png, new_engine, render_state_to_png,
};
