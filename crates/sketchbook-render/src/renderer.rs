//! Engine construction and offscreen rendering helpers.

use crate::pixmap::PixmapSurface;
use sketchbook_core::raster;
use sketchbook_core::{DrawingEngine, DrawingState, EngineConfig, RasterError, Surface};
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Initialization failed: {0}")]
    InitFailed(String),
    #[error("Render failed: {0}")]
    RenderFailed(#[from] RasterError),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Drawing engine on a CPU pixmap.
pub type PixmapEngine = DrawingEngine<PixmapSurface>;

/// Create an engine with a freshly allocated pixmap.
///
/// Fails fast when the surface cannot be allocated.
pub fn new_engine(config: &EngineConfig) -> RenderResult<PixmapEngine> {
    let surface = PixmapSurface::new(config.width, config.height)?;
    log::info!("Drawing engine ready ({}x{})", config.width, config.height);
    Ok(DrawingEngine::with_config(surface, config))
}

/// Result of an offscreen render.
#[derive(Debug, Clone)]
pub struct PngRenderResult {
    /// Encoded PNG bytes.
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Encode whatever the engine's surface currently shows.
pub fn engine_to_png(engine: &PixmapEngine) -> RenderResult<PngRenderResult> {
    let image = engine.surface().read_pixels();
    let data = raster::encode_png(&image)?;
    Ok(PngRenderResult {
        data,
        width: image.width,
        height: image.height,
    })
}

/// Replay a drawing state offscreen and encode it as PNG.
pub fn render_state_to_png(state: &DrawingState, config: &EngineConfig) -> RenderResult<PngRenderResult> {
    let mut engine = new_engine(config)?;
    engine.import_state(state.clone());
    engine_to_png(&engine)
}
