//! radview-filter - Pixel-buffer post-processing passes
//!
//! This crate provides the enhancement passes of the display pipeline:
//!
//! - Tonal mapping (contrast / brightness / saturation) -> [`TonalMap`]
//! - Adaptive contrast enhancement -> [`equalize_histogram`]
//! - Edge sharpening -> [`sharpen`]
//! - Noise reduction -> [`median_denoise`]
//!
//! All passes operate in place on a [`radview_core::PixelBuffer`] and
//! are deterministic single-pass algorithms.

pub mod denoise;
pub mod equalize;
mod error;
pub mod sharpen;
pub mod tonal;

pub use error::{FilterError, FilterResult};

pub use denoise::median_denoise;
pub use equalize::equalize_histogram;
pub use sharpen::sharpen;
pub use tonal::{TonalLut, TonalMap};
