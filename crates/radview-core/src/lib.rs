//! Radview Core - Basic data structures for the display pipeline
//!
//! This crate provides the fundamental data structures used throughout
//! the radview diagnostic display library:
//!
//! - [`PixelBuffer`] - The mutable RGBA working surface
//! - [`ImageSource`] - A decoded raster borrowed for one render call
//! - [`Modality`] / [`ModalityProfile`] - Tonal filter selection
//! - [`color`] - RGBA channel and luma helpers

pub mod buffer;
pub mod color;
pub mod error;
pub mod image;
pub mod modality;

pub use buffer::PixelBuffer;
pub use error::{Error, Result};
pub use image::ImageSource;
pub use modality::{Modality, ModalityProfile};
