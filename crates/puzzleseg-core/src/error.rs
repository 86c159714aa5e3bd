//! Error types for puzzleseg-core
//!
//! Provides a unified error type for raster construction, pixel access
//! and region arithmetic. Segmentation stages treat most of these as
//! "nothing detected here" rather than propagating them.

use thiserror::Error;

/// puzzleseg-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel depth not handled by this operation
    #[error("unsupported pixel depth: {0} bpp")]
    UnsupportedDepth(u32),

    /// Pixel coordinates outside the raster
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} image")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Sample buffer length does not match the declared size
    #[error("buffer length mismatch: expected {expected}, got {actual}")]
    BufferLength { expected: usize, actual: usize },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Region is inverted or lies entirely outside the image
    #[error("degenerate region: ({x0}, {y0})-({x1}, {y1})")]
    DegenerateRegion { x0: i32, y0: i32, x1: i32, y1: i32 },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
