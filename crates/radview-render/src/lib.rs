//! radview-render - Surface, transform and pipeline orchestration
//!
//! This crate ties the display pipeline together:
//!
//! - [`RenderTarget`] - device-pixel-ratio-correct surface management
//! - [`ViewportState`] - explicit zoom/pan navigation state
//! - [`transform`] - aspect-preserving fit and viewport transforms
//! - [`composite`] - drawing the source under the modality tonal filter
//! - [`Renderer`] - the orchestrator with graceful pass degradation
//! - [`ImageCache`] - bounded LRU retention of decoded images

pub mod cache;
pub mod composite;
mod error;
pub mod pipeline;
pub mod surface;
pub mod transform;
pub mod viewport;

pub use error::{RenderError, RenderResult};

pub use cache::ImageCache;
pub use composite::{composite, placement};
pub use pipeline::{
    NoopObserver, Pass, RenderObserver, RenderRequest, RenderScheduler, Renderer, RenderingOptions,
};
pub use surface::RenderTarget;
pub use transform::{DEFAULT_FIT_SCALE, DrawRect, Transform, fit_rect};
pub use viewport::{MAX_ZOOM, MIN_ZOOM, ViewportState};
