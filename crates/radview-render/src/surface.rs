//! Render target surface management
//!
//! Owns the mapping between logical (CSS-like) dimensions and the
//! physical backing buffer on high-density displays. The backing
//! buffer is `round(logical * ratio)` pixels per axis and is only
//! reallocated when those physical dimensions actually change;
//! resizing to the same size is a no-op so repeated renders of an
//! unchanged surface never flicker.

use crate::error::{RenderError, RenderResult};
use radview_core::PixelBuffer;

/// A physical render surface with device-pixel-ratio-aware sizing.
#[derive(Debug, Clone)]
pub struct RenderTarget {
    logical_width: u32,
    logical_height: u32,
    ratio: f32,
    buffer: PixelBuffer,
}

impl RenderTarget {
    /// Create a target with the given logical size and device pixel ratio.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::EmptyTarget`] if either logical dimension
    /// is zero, or [`RenderError::InvalidParameter`] for a ratio that is
    /// not strictly positive.
    pub fn new(logical_width: u32, logical_height: u32, ratio: f32) -> RenderResult<Self> {
        if logical_width == 0 || logical_height == 0 {
            return Err(RenderError::EmptyTarget);
        }
        if !(ratio > 0.0) || !ratio.is_finite() {
            return Err(RenderError::InvalidParameter(
                "device pixel ratio must be positive and finite".into(),
            ));
        }
        let (pw, ph) = physical_size(logical_width, logical_height, ratio);
        Ok(Self {
            logical_width,
            logical_height,
            ratio,
            buffer: PixelBuffer::new(pw, ph)?,
        })
    }

    /// Ensure the backing buffer matches `round(logical * ratio)`.
    ///
    /// Returns `true` when the buffer was reallocated and `false` when
    /// the requested size already matches (idempotent no-op).
    pub fn resize(
        &mut self,
        logical_width: u32,
        logical_height: u32,
        ratio: f32,
    ) -> RenderResult<bool> {
        if logical_width == 0 || logical_height == 0 {
            return Err(RenderError::EmptyTarget);
        }
        if !(ratio > 0.0) || !ratio.is_finite() {
            return Err(RenderError::InvalidParameter(
                "device pixel ratio must be positive and finite".into(),
            ));
        }
        let (pw, ph) = physical_size(logical_width, logical_height, ratio);
        self.logical_width = logical_width;
        self.logical_height = logical_height;
        self.ratio = ratio;
        if pw == self.buffer.width() && ph == self.buffer.height() {
            return Ok(false);
        }
        tracing::debug!(
            physical_width = pw,
            physical_height = ph,
            ratio,
            "reallocating render surface"
        );
        self.buffer = PixelBuffer::new(pw, ph)?;
        Ok(true)
    }

    /// Logical width in CSS-like pixels.
    pub fn logical_width(&self) -> u32 {
        self.logical_width
    }

    /// Logical height in CSS-like pixels.
    pub fn logical_height(&self) -> u32 {
        self.logical_height
    }

    /// The device pixel ratio mapping logical to buffer coordinates.
    pub fn scale_factor(&self) -> f32 {
        self.ratio
    }

    /// The physical backing buffer.
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Mutable access to the physical backing buffer.
    pub fn buffer_mut(&mut self) -> &mut PixelBuffer {
        &mut self.buffer
    }
}

/// Physical buffer dimensions for a logical size at a pixel ratio.
fn physical_size(logical_width: u32, logical_height: u32, ratio: f32) -> (u32, u32) {
    let pw = (logical_width as f32 * ratio).round().max(1.0) as u32;
    let ph = (logical_height as f32 * ratio).round().max(1.0) as u32;
    (pw, ph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_physical_sizing() {
        let target = RenderTarget::new(400, 300, 2.0).unwrap();
        assert_eq!(target.buffer().width(), 800);
        assert_eq!(target.buffer().height(), 600);
        assert_eq!(target.scale_factor(), 2.0);
    }

    #[test]
    fn test_fractional_ratio_rounds() {
        let target = RenderTarget::new(100, 100, 1.5).unwrap();
        assert_eq!(target.buffer().width(), 150);
        let target = RenderTarget::new(3, 3, 1.25).unwrap();
        // 3.75 rounds to 4
        assert_eq!(target.buffer().width(), 4);
    }

    #[test]
    fn test_resize_idempotent() {
        let mut target = RenderTarget::new(400, 400, 2.0).unwrap();
        target.buffer_mut().fill([9, 9, 9, 255]);
        let reallocated = target.resize(400, 400, 2.0).unwrap();
        assert!(!reallocated);
        // Contents survive a no-op resize
        assert_eq!(target.buffer().get_pixel_unchecked(0, 0), [9, 9, 9, 255]);
    }

    #[test]
    fn test_resize_reallocates_on_change() {
        let mut target = RenderTarget::new(400, 400, 1.0).unwrap();
        assert!(target.resize(400, 400, 2.0).unwrap());
        assert_eq!(target.buffer().width(), 800);
        assert!(target.resize(200, 400, 2.0).unwrap());
        assert_eq!(target.buffer().width(), 400);
    }

    #[test]
    fn test_equivalent_physical_size_is_noop() {
        // 200 @ 2.0 and 400 @ 1.0 share a physical size; no realloc.
        let mut target = RenderTarget::new(200, 200, 2.0).unwrap();
        target.buffer_mut().fill([1, 2, 3, 255]);
        assert!(!target.resize(400, 400, 1.0).unwrap());
        assert_eq!(target.logical_width(), 400);
        assert_eq!(target.buffer().get_pixel_unchecked(5, 5), [1, 2, 3, 255]);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(RenderTarget::new(0, 100, 1.0).is_err());
        assert!(RenderTarget::new(100, 100, 0.0).is_err());
        assert!(RenderTarget::new(100, 100, -1.0).is_err());
        assert!(RenderTarget::new(100, 100, f32::NAN).is_err());
        let mut t = RenderTarget::new(100, 100, 1.0).unwrap();
        assert!(t.resize(0, 0, 1.0).is_err());
    }
}
