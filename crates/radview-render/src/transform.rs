//! Placement and viewport transforms
//!
//! Two pieces combine to place a source image on the target surface:
//!
//! 1. [`fit_rect`] computes the aspect-preserving, centered rectangle
//!    the image occupies at rest, drawn at a fit-scale margin of the
//!    edge-touching maximum.
//! 2. [`Transform::viewport`] builds the user navigation transform:
//!    translate to the target center plus pan, scale by the clamped
//!    zoom, translate back.
//!
//! Both are pure functions of their inputs. The transform is a 2x3
//! affine matrix:
//!
//! ```text
//! | a  b  tx |      x' = a*x + b*y + tx
//! | c  d  ty |      y' = c*x + d*y + ty
//! ```

use crate::viewport::ViewportState;

/// Fraction of the edge-touching maximum at which images are drawn.
///
/// Leaves a visual margin around the image at rest.
pub const DEFAULT_FIT_SCALE: f32 = 0.80;

/// A placement rectangle in target logical coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Compute the centered, aspect-preserving placement rectangle.
///
/// The image is scaled to `fit_scale` of the largest size that would
/// touch the surface edges: wide images are width-constrained, tall
/// images height-constrained. Output is fully determined by the
/// arguments.
pub fn fit_rect(src_w: u32, src_h: u32, dst_w: u32, dst_h: u32, fit_scale: f32) -> DrawRect {
    let src_w = src_w as f32;
    let src_h = src_h as f32;
    let dst_w = dst_w as f32;
    let dst_h = dst_h as f32;

    let img_aspect = src_w / src_h;
    let target_aspect = dst_w / dst_h;

    let (w, h) = if img_aspect > target_aspect {
        let w = dst_w * fit_scale;
        (w, w / img_aspect)
    } else {
        let h = dst_h * fit_scale;
        (h * img_aspect, h)
    };

    DrawRect {
        x: (dst_w - w) / 2.0,
        y: (dst_h - h) / 2.0,
        w,
        h,
    }
}

/// A 2x3 affine transform over logical coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Transform {
    /// The identity transform.
    pub fn identity() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// A pure translation.
    pub fn translation(tx: f32, ty: f32) -> Self {
        Self {
            tx,
            ty,
            ..Self::identity()
        }
    }

    /// A uniform scale about the origin.
    pub fn scaling(s: f32) -> Self {
        Self::scaling_xy(s, s)
    }

    /// An axis-aligned scale about the origin.
    pub fn scaling_xy(sx: f32, sy: f32) -> Self {
        Self {
            a: sx,
            d: sy,
            ..Self::identity()
        }
    }

    /// The user navigation transform for a target of logical size
    /// `dst_w x dst_h`.
    ///
    /// Composition order (applied to a point, last first): translate by
    /// `-(center)`, scale by the clamped zoom, translate by
    /// `center + pan`. Zoom is clamped before use whatever the caller
    /// supplied.
    pub fn viewport(viewport: &ViewportState, dst_w: u32, dst_h: u32) -> Self {
        let cx = dst_w as f32 / 2.0;
        let cy = dst_h as f32 / 2.0;
        let zoom = viewport.clamped_zoom();
        Transform::translation(cx + viewport.pan_x, cy + viewport.pan_y)
            .compose(&Transform::scaling(zoom))
            .compose(&Transform::translation(-cx, -cy))
    }

    /// Compose with another transform; `other` applies to points first.
    pub fn compose(&self, other: &Transform) -> Self {
        Self {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
            tx: self.a * other.tx + self.b * other.ty + self.tx,
            ty: self.c * other.tx + self.d * other.ty + self.ty,
        }
    }

    /// Map a point through the transform.
    #[inline]
    pub fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        (
            self.a * x + self.b * y + self.tx,
            self.c * x + self.d * y + self.ty,
        )
    }

    /// The inverse transform, or `None` for a degenerate matrix.
    pub fn invert(&self) -> Option<Self> {
        let det = self.a * self.d - self.b * self.c;
        if det.abs() < f32::EPSILON {
            return None;
        }
        let inv_det = 1.0 / det;
        let a = self.d * inv_det;
        let b = -self.b * inv_det;
        let c = -self.c * inv_det;
        let d = self.a * inv_det;
        Some(Self {
            a,
            b,
            c,
            d,
            tx: -(a * self.tx + b * self.ty),
            ty: -(c * self.tx + d * self.ty),
        })
    }
}
