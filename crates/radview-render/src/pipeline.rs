//! Render pipeline orchestration
//!
//! Sequences the full pipeline for one frame: surface sizing has
//! already happened on the owned target; the orchestrator composites
//! the image under the modality tonal filter, then conditionally runs
//! the noise reduction, contrast enhancement and sharpening passes.
//!
//! The public entry point never raises. Input errors return `false`
//! with nothing drawn; a failure inside a post-processing pass skips
//! that pass, records a warning, and the pipeline continues - a
//! partially enhanced medical image is still more useful than a blank
//! display.

use crate::composite::composite;
use crate::error::RenderError;
use crate::surface::RenderTarget;
use crate::transform::DEFAULT_FIT_SCALE;
use crate::viewport::ViewportState;
use radview_core::{ImageSource, Modality};
use radview_filter::{TonalMap, equalize_histogram, median_denoise, sharpen};

/// Per-render feature toggles, merged over the defaults by ordinary
/// struct update syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderingOptions {
    /// Bilinear sampling during compositing (nearest when off)
    pub antialiasing: bool,
    /// 3x3 high-pass sharpening pass
    pub sharpening: bool,
    /// Histogram-equalization contrast pass
    pub contrast_enhancement: bool,
    /// 3x3 median noise reduction pass
    pub noise_reduction: bool,
}

impl Default for RenderingOptions {
    fn default() -> Self {
        Self {
            antialiasing: true,
            sharpening: true,
            contrast_enhancement: true,
            noise_reduction: true,
        }
    }
}

/// The optional post-processing passes, for observer reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    NoiseReduction,
    ContrastEnhancement,
    Sharpening,
}

impl Pass {
    fn name(self) -> &'static str {
        match self {
            Pass::NoiseReduction => "noise reduction",
            Pass::ContrastEnhancement => "contrast enhancement",
            Pass::Sharpening => "sharpening",
        }
    }
}

/// Constructor-supplied collaborator interface.
///
/// External presentation concerns (toasts, status lines, comparison
/// dialogs) observe the pipeline through this trait instead of the
/// pipeline probing for ambient helpers. All methods default to no-ops.
pub trait RenderObserver {
    /// A frame finished compositing and all enabled passes ran or were
    /// skipped.
    fn frame_rendered(&mut self, _modality: Modality) {}

    /// A post-processing pass failed and was skipped.
    fn pass_skipped(&mut self, _pass: Pass, _error: &RenderError) {}

    /// The render call failed before anything was drawn.
    fn render_failed(&mut self, _error: &RenderError) {}
}

/// The default observer: does nothing.
#[derive(Debug, Default)]
pub struct NoopObserver;

impl RenderObserver for NoopObserver {}

/// The render pipeline orchestrator.
///
/// Owns the render target; `render` takes `&mut self`, so renders to
/// one target are serialized by construction - there is no queue and
/// no lock, and a caller that wants responsiveness under rapid
/// navigation coalesces requests with [`RenderScheduler`].
pub struct Renderer {
    target: RenderTarget,
    fit_scale: f32,
    observer: Box<dyn RenderObserver>,
}

impl Renderer {
    /// Create a renderer over `target` with a no-op observer.
    pub fn new(target: RenderTarget) -> Self {
        Self {
            target,
            fit_scale: DEFAULT_FIT_SCALE,
            observer: Box::new(NoopObserver),
        }
    }

    /// Replace the observer capability.
    pub fn with_observer(mut self, observer: Box<dyn RenderObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Override the at-rest fit-scale margin.
    pub fn with_fit_scale(mut self, fit_scale: f32) -> Self {
        self.fit_scale = fit_scale;
        self
    }

    /// The owned render target.
    pub fn target(&self) -> &RenderTarget {
        &self.target
    }

    /// Resize the target surface (idempotent for an unchanged size).
    pub fn resize(&mut self, logical_width: u32, logical_height: u32, ratio: f32) -> bool {
        match self.target.resize(logical_width, logical_height, ratio) {
            Ok(reallocated) => reallocated,
            Err(err) => {
                tracing::warn!(%err, "surface resize rejected");
                false
            }
        }
    }

    /// Render `image` with a free-form modality code.
    ///
    /// The code is matched case-insensitively; unknown codes use the
    /// default profile. Returns `true` when the frame was composited,
    /// even if individual post-processing passes were skipped.
    pub fn render(
        &mut self,
        image: &ImageSource,
        modality_code: &str,
        viewport: &ViewportState,
        options: &RenderingOptions,
    ) -> bool {
        self.render_modality(image, Modality::parse(modality_code), viewport, options)
    }

    /// Render `image` with an already-resolved modality tag.
    pub fn render_modality(
        &mut self,
        image: &ImageSource,
        modality: Modality,
        viewport: &ViewportState,
        options: &RenderingOptions,
    ) -> bool {
        let profile = modality.profile();
        let tonal = TonalMap::new(&profile);

        if let Err(err) = composite(
            &mut self.target,
            image,
            viewport,
            &tonal,
            options.antialiasing,
            self.fit_scale,
        ) {
            tracing::warn!(%err, "compositing failed, nothing drawn");
            self.observer.render_failed(&err);
            return false;
        }

        let buf = self.target.buffer_mut();

        if options.noise_reduction
            && let Err(err) = median_denoise(buf).map_err(RenderError::from)
        {
            tracing::warn!(%err, "noise reduction skipped");
            self.observer.pass_skipped(Pass::NoiseReduction, &err);
        }

        if options.contrast_enhancement
            && let Err(err) =
                equalize_histogram(buf, profile.enhancement_strength).map_err(RenderError::from)
        {
            tracing::warn!(%err, "contrast enhancement skipped");
            self.observer.pass_skipped(Pass::ContrastEnhancement, &err);
        }

        if options.sharpening
            && let Err(err) = sharpen(buf).map_err(RenderError::from)
        {
            tracing::warn!(%err, "sharpening skipped");
            self.observer.pass_skipped(Pass::Sharpening, &err);
        }

        self.observer.frame_rendered(modality);
        true
    }
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("target", &self.target)
            .field("fit_scale", &self.fit_scale)
            .finish_non_exhaustive()
    }
}

/// A pending render request, referencing a cached image by identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub image_id: String,
    pub modality: Modality,
    pub viewport: ViewportState,
    pub options: RenderingOptions,
}

/// Coalesces render requests: scheduling replaces any pending request,
/// so rapid navigation only ever renders the most recent state.
#[derive(Debug, Default)]
pub struct RenderScheduler {
    pending: Option<RenderRequest>,
}

impl RenderScheduler {
    /// Create an empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a request, superseding any pending one. Returns the
    /// superseded request, if any.
    pub fn schedule(&mut self, request: RenderRequest) -> Option<RenderRequest> {
        self.pending.replace(request)
    }

    /// Take the most recent pending request.
    pub fn take(&mut self) -> Option<RenderRequest> {
        self.pending.take()
    }

    /// Whether a request is waiting.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn gray_image(w: u32, h: u32) -> ImageSource {
        let levels: Vec<u8> = (0..w * h).map(|i| (i % 251) as u8).collect();
        ImageSource::from_gray(w, h, &levels).unwrap()
    }

    #[test]
    fn test_default_options_all_on() {
        let opts = RenderingOptions::default();
        assert!(opts.antialiasing);
        assert!(opts.sharpening);
        assert!(opts.contrast_enhancement);
        assert!(opts.noise_reduction);
    }

    #[test]
    fn test_render_succeeds_with_defaults() {
        let target = RenderTarget::new(64, 64, 1.0).unwrap();
        let mut renderer = Renderer::new(target);
        let ok = renderer.render(
            &gray_image(32, 32),
            "CR",
            &ViewportState::default(),
            &RenderingOptions::default(),
        );
        assert!(ok);
    }

    #[test]
    fn test_unknown_modality_still_succeeds() {
        let target = RenderTarget::new(64, 64, 1.0).unwrap();
        let mut renderer = Renderer::new(target);
        let ok = renderer.render(
            &gray_image(32, 32),
            "ZZ",
            &ViewportState::default(),
            &RenderingOptions::default(),
        );
        assert!(ok);
    }

    #[test]
    fn test_invalid_fit_scale_returns_false() {
        let target = RenderTarget::new(64, 64, 1.0).unwrap();
        let mut renderer = Renderer::new(target).with_fit_scale(f32::NAN);
        let ok = renderer.render(
            &gray_image(32, 32),
            "CT",
            &ViewportState::default(),
            &RenderingOptions::default(),
        );
        assert!(!ok);
    }

    #[test]
    fn test_observer_sees_frames_and_failures() {
        #[derive(Default)]
        struct Recording {
            frames: Vec<Modality>,
            failures: usize,
        }
        struct SharedObserver(Rc<RefCell<Recording>>);
        impl RenderObserver for SharedObserver {
            fn frame_rendered(&mut self, modality: Modality) {
                self.0.borrow_mut().frames.push(modality);
            }
            fn render_failed(&mut self, _error: &RenderError) {
                self.0.borrow_mut().failures += 1;
            }
        }

        let log = Rc::new(RefCell::new(Recording::default()));
        let target = RenderTarget::new(64, 64, 1.0).unwrap();
        let mut renderer =
            Renderer::new(target).with_observer(Box::new(SharedObserver(log.clone())));

        renderer.render(
            &gray_image(16, 16),
            "MR",
            &ViewportState::default(),
            &RenderingOptions::default(),
        );
        assert_eq!(log.borrow().frames, vec![Modality::Mr]);
        assert_eq!(log.borrow().failures, 0);

        let mut renderer = renderer.with_fit_scale(-1.0);
        renderer.render(
            &gray_image(16, 16),
            "MR",
            &ViewportState::default(),
            &RenderingOptions::default(),
        );
        assert_eq!(log.borrow().failures, 1);
    }

    #[test]
    fn test_scheduler_coalesces() {
        let mut scheduler = RenderScheduler::new();
        assert!(!scheduler.has_pending());

        let request = |id: &str| RenderRequest {
            image_id: id.to_string(),
            modality: Modality::Ct,
            viewport: ViewportState::default(),
            options: RenderingOptions::default(),
        };

        assert!(scheduler.schedule(request("frame-1")).is_none());
        let superseded = scheduler.schedule(request("frame-2"));
        assert_eq!(superseded.unwrap().image_id, "frame-1");

        let taken = scheduler.take().unwrap();
        assert_eq!(taken.image_id, "frame-2");
        assert!(scheduler.take().is_none());
    }
}
