//! Compositing a source image onto the render surface
//!
//! Builds the full source-to-buffer transform (fit rectangle, viewport
//! navigation, device pixel ratio) and inverse-maps every covered
//! destination pixel back into source coordinates. Sampling is
//! bilinear when antialiasing is requested, nearest-neighbor
//! otherwise; the modality tonal filter is applied to each sampled
//! pixel on the way out.
//!
//! The surface is cleared to the opaque black viewport background
//! before drawing, so a stale frame never shows through.

use crate::error::{RenderError, RenderResult};
use crate::surface::RenderTarget;
use crate::transform::{DrawRect, Transform, fit_rect};
use crate::viewport::ViewportState;
use radview_core::ImageSource;
use radview_filter::TonalMap;

/// The viewport background fill.
const BACKGROUND: [u8; 4] = [0, 0, 0, 255];

/// Composite `image` onto `target` under the viewport transform.
///
/// `fit_scale` is the at-rest margin coefficient (see
/// [`crate::transform::DEFAULT_FIT_SCALE`]).
pub fn composite(
    target: &mut RenderTarget,
    image: &ImageSource,
    viewport: &ViewportState,
    tonal: &TonalMap,
    antialias: bool,
    fit_scale: f32,
) -> RenderResult<()> {
    if !(fit_scale > 0.0) || !fit_scale.is_finite() {
        return Err(RenderError::InvalidParameter(
            "fit scale must be positive and finite".into(),
        ));
    }

    let dst_w = target.logical_width();
    let dst_h = target.logical_height();
    let rect = fit_rect(image.width(), image.height(), dst_w, dst_h, fit_scale);

    // Source pixel -> logical -> viewport -> physical buffer.
    let to_logical = Transform::translation(rect.x, rect.y).compose(&Transform::scaling_xy(
        rect.w / image.width() as f32,
        rect.h / image.height() as f32,
    ));
    let ratio = target.scale_factor();
    let forward = Transform::scaling(ratio)
        .compose(&Transform::viewport(viewport, dst_w, dst_h))
        .compose(&to_logical);
    let inverse = forward
        .invert()
        .ok_or_else(|| RenderError::InvalidParameter("degenerate draw transform".into()))?;

    let buf = target.buffer_mut();
    buf.fill(BACKGROUND);

    let (x0, y0, x1, y1) = coverage_bounds(&forward, image, buf.width(), buf.height());

    let src_w = image.width() as f32;
    let src_h = image.height() as f32;
    for dy in y0..y1 {
        for dx in x0..x1 {
            let (sx, sy) = inverse.apply(dx as f32 + 0.5, dy as f32 + 0.5);
            if sx < 0.0 || sy < 0.0 || sx >= src_w || sy >= src_h {
                continue;
            }
            let sampled = if antialias {
                sample_bilinear(image, sx, sy)
            } else {
                sample_nearest(image, sx, sy)
            };
            buf.set_pixel_unchecked(dx, dy, tonal.apply(sampled));
        }
    }

    Ok(())
}

/// The draw rectangle in target logical coordinates, before the
/// viewport transform. Exposed for callers that need the placement
/// geometry without rendering.
pub fn placement(image: &ImageSource, target: &RenderTarget, fit_scale: f32) -> DrawRect {
    fit_rect(
        image.width(),
        image.height(),
        target.logical_width(),
        target.logical_height(),
        fit_scale,
    )
}

/// Buffer-space bounding box of the transformed source rectangle,
/// clamped to the buffer.
fn coverage_bounds(
    forward: &Transform,
    image: &ImageSource,
    buf_w: u32,
    buf_h: u32,
) -> (u32, u32, u32, u32) {
    let sw = image.width() as f32;
    let sh = image.height() as f32;
    let corners = [
        forward.apply(0.0, 0.0),
        forward.apply(sw, 0.0),
        forward.apply(0.0, sh),
        forward.apply(sw, sh),
    ];
    let mut min_x = f32::MAX;
    let mut min_y = f32::MAX;
    let mut max_x = f32::MIN;
    let mut max_y = f32::MIN;
    for (x, y) in corners {
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }
    let x0 = min_x.floor().max(0.0) as u32;
    let y0 = min_y.floor().max(0.0) as u32;
    let x1 = (max_x.ceil().max(0.0) as u32).min(buf_w);
    let y1 = (max_y.ceil().max(0.0) as u32).min(buf_h);
    (x0, y0, x1, y1)
}

/// Nearest-neighbor sample at continuous source coordinates.
#[inline]
fn sample_nearest(image: &ImageSource, sx: f32, sy: f32) -> [u8; 4] {
    let x = (sx as u32).min(image.width() - 1);
    let y = (sy as u32).min(image.height() - 1);
    image.get_pixel_unchecked(x, y)
}

/// Bilinear sample at continuous source coordinates, with edge clamp.
#[inline]
fn sample_bilinear(image: &ImageSource, sx: f32, sy: f32) -> [u8; 4] {
    let fx = (sx - 0.5).max(0.0);
    let fy = (sy - 0.5).max(0.0);
    let x0 = fx as u32;
    let y0 = fy as u32;
    let x1 = (x0 + 1).min(image.width() - 1);
    let y1 = (y0 + 1).min(image.height() - 1);
    let tx = fx - x0 as f32;
    let ty = fy - y0 as f32;

    let p00 = image.get_pixel_unchecked(x0, y0);
    let p10 = image.get_pixel_unchecked(x1, y0);
    let p01 = image.get_pixel_unchecked(x0, y1);
    let p11 = image.get_pixel_unchecked(x1, y1);

    let mut out = [0u8; 4];
    for c in 0..4 {
        let top = p00[c] as f32 * (1.0 - tx) + p10[c] as f32 * tx;
        let bottom = p01[c] as f32 * (1.0 - tx) + p11[c] as f32 * tx;
        out[c] = (top * (1.0 - ty) + bottom * ty).round().clamp(0.0, 255.0) as u8;
    }
    out
}
