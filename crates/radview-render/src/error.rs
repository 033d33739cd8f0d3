//! Error types for radview-render

use thiserror::Error;

/// Errors that can occur while sizing surfaces or running the pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] radview_core::Error),

    /// Post-processing pass error
    #[error("filter error: {0}")]
    Filter(#[from] radview_filter::FilterError),

    /// Source image has no pixels or is not fully decoded
    #[error("empty or undecoded source image")]
    EmptyImage,

    /// Render target has no backing buffer
    #[error("render target has zero size")]
    EmptyTarget,

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for render operations
pub type RenderResult<T> = Result<T, RenderError>;
