//! Viewport navigation state
//!
//! Zoom and pan are supplied by an external navigation collaborator
//! and read once per render call. The state is an explicit value
//! passed into the transform calculation, never ambient, so the
//! transform stays pure and testable.

/// Minimum effective zoom.
pub const MIN_ZOOM: f32 = 0.2;
/// Maximum effective zoom.
pub const MAX_ZOOM: f32 = 1.5;

/// User navigation state: zoom factor and pan offset in target
/// logical-pixel units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    /// Requested zoom factor; clamped to `[MIN_ZOOM, MAX_ZOOM]` before use
    pub zoom: f32,
    /// Horizontal pan in logical pixels
    pub pan_x: f32,
    /// Vertical pan in logical pixels
    pub pan_y: f32,
}

impl ViewportState {
    /// Create a viewport state.
    pub fn new(zoom: f32, pan_x: f32, pan_y: f32) -> Self {
        Self { zoom, pan_x, pan_y }
    }

    /// The zoom factor actually used for rendering.
    ///
    /// Always clamped to `[MIN_ZOOM, MAX_ZOOM]` regardless of the
    /// caller-supplied value; NaN collapses to 1.0.
    pub fn clamped_zoom(&self) -> f32 {
        if self.zoom.is_nan() {
            return 1.0;
        }
        self.zoom.clamp(MIN_ZOOM, MAX_ZOOM)
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_neutral() {
        let vp = ViewportState::default();
        assert_eq!(vp.zoom, 1.0);
        assert_eq!(vp.pan_x, 0.0);
        assert_eq!(vp.pan_y, 0.0);
    }

    #[test]
    fn test_zoom_clamped_low() {
        assert_eq!(ViewportState::new(0.01, 0.0, 0.0).clamped_zoom(), MIN_ZOOM);
        assert_eq!(ViewportState::new(0.2, 0.0, 0.0).clamped_zoom(), 0.2);
    }

    #[test]
    fn test_zoom_clamped_high() {
        assert_eq!(ViewportState::new(50.0, 0.0, 0.0).clamped_zoom(), MAX_ZOOM);
        assert_eq!(ViewportState::new(1.5, 0.0, 0.0).clamped_zoom(), 1.5);
    }

    #[test]
    fn test_zoom_in_range_unchanged() {
        for z in [0.2f32, 0.5, 1.0, 1.25, 1.5] {
            assert_eq!(ViewportState::new(z, 0.0, 0.0).clamped_zoom(), z);
        }
    }

    #[test]
    fn test_degenerate_zoom_inputs() {
        assert_eq!(ViewportState::new(f32::NAN, 0.0, 0.0).clamped_zoom(), 1.0);
        assert_eq!(
            ViewportState::new(f32::INFINITY, 0.0, 0.0).clamped_zoom(),
            MAX_ZOOM
        );
        assert_eq!(
            ViewportState::new(-3.0, 0.0, 0.0).clamped_zoom(),
            MIN_ZOOM
        );
    }
}
