//! Error types for the drawing engine.

use thiserror::Error;

/// Errors raised while encoding or decoding raster images.
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("Invalid image data URL: {0}")]
    InvalidDataUrl(String),
    #[error("Base64 decode failed: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("Image decode failed: {0}")]
    Decode(#[from] image::ImageError),
    #[error("PNG encode failed: {0}")]
    Encode(#[from] png::EncodingError),
    #[error("Pixel buffer of {len} bytes does not match {width}x{height}")]
    SizeMismatch { width: u32, height: u32, len: usize },
}

/// Engine errors surfaced to the host.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Raster error: {0}")]
    Raster(#[from] RasterError),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
