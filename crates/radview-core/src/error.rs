//! Error types for radview-core
//!
//! Provides a unified error type for the core data structures. Each
//! variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// Radview core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image or buffer dimensions
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel data length does not match the declared dimensions
    #[error("buffer length mismatch: expected {expected} bytes, got {actual}")]
    BufferLengthMismatch { expected: usize, actual: usize },

    /// Pixel coordinate outside the buffer
    #[error("coordinate out of bounds: ({x}, {y}) in {width}x{height}")]
    CoordinateOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Incompatible buffer sizes for an operation that requires equal shapes
    #[error("incompatible buffer sizes: {0}x{1} vs {2}x{3}")]
    IncompatibleSizes(u32, u32, u32, u32),

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for radview-core operations
pub type Result<T> = std::result::Result<T, Error>;
