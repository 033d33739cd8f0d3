//! Radview - Diagnostic raster display pipeline for Rust
//!
//! Radview renders decoded medical raster images (radiographs, CT/MR
//! slices, ultrasound frames) onto a pixel surface, adapting
//! presentation per imaging modality and user navigation.
//!
//! # Overview
//!
//! - Device-pixel-ratio-correct surface sizing
//! - Aspect-preserving fit combined with clamped zoom/pan
//! - Modality tonal profiles (contrast / brightness / saturation)
//! - Adaptive contrast enhancement via histogram equalization
//! - Edge sharpening and median noise reduction
//!
//! # Example
//!
//! ```
//! use radview::{ImageSource, Renderer, RenderTarget, RenderingOptions, ViewportState};
//!
//! let target = RenderTarget::new(400, 400, 2.0).unwrap();
//! let mut renderer = Renderer::new(target);
//!
//! let image = ImageSource::from_gray(512, 512, &vec![128; 512 * 512]).unwrap();
//! let ok = renderer.render(
//!     &image,
//!     "CR",
//!     &ViewportState::default(),
//!     &RenderingOptions::default(),
//! );
//! assert!(ok);
//! assert_eq!(renderer.target().buffer().width(), 800);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use radview_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use radview_filter as filter;
pub use radview_render as render;

// The main pipeline surface, flattened for convenience
pub use radview_render::{
    ImageCache, RenderObserver, RenderRequest, RenderScheduler, RenderTarget, Renderer,
    RenderingOptions, ViewportState,
};
