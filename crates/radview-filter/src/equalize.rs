//! Adaptive contrast enhancement via global histogram equalization
//!
//! Single pass over the buffer: each pixel's BT.601 luma feeds a
//! 256-bucket histogram, the cumulative distribution yields an
//! equalized luma, and the output is a blend of original and equalized
//! luma controlled by the modality's enhancement strength.
//!
//! The blended luma is written into all three color channels; chroma
//! is discarded. The listed modalities are monochrome so the collapse
//! is invisible in practice, and the behavior is load-bearing for
//! reproducibility, so it is kept as-is.

use crate::{FilterError, FilterResult};
use radview_core::PixelBuffer;
use radview_core::color::luma;

/// Equalize the luma histogram of `buf`, blending by `strength`.
///
/// `strength` must be in `[0.0, 1.0]`: 0.0 leaves the buffer untouched
/// and 1.0 replaces each luma with its fully equalized value. The
/// alpha channel is never modified.
///
/// A buffer whose pixels all share one luma value has nothing to
/// equalize and is left unchanged.
pub fn equalize_histogram(buf: &mut PixelBuffer, strength: f32) -> FilterResult<()> {
    if !(0.0..=1.0).contains(&strength) {
        return Err(FilterError::InvalidParameters(
            "strength must be in [0.0, 1.0]".into(),
        ));
    }
    if strength == 0.0 {
        return Ok(());
    }

    let count = buf.pixel_count();
    let w = buf.width();
    let h = buf.height();

    // Pass 1: luma histogram.
    let mut histogram = [0u64; 256];
    for y in 0..h {
        for x in 0..w {
            let [r, g, b, _] = buf.get_pixel_unchecked(x, y);
            histogram[luma(r, g, b) as usize] += 1;
        }
    }

    // Cumulative distribution and its smallest nonzero value.
    let mut cdf = [0u64; 256];
    let mut acc = 0u64;
    for (i, &n) in histogram.iter().enumerate() {
        acc += n;
        cdf[i] = acc;
    }
    let cdf_min = cdf
        .iter()
        .copied()
        .find(|&c| c > 0)
        .unwrap_or(count as u64);

    // Every pixel in one bucket: the distribution is already flat.
    if count as u64 <= cdf_min {
        return Ok(());
    }
    let factor = 255.0 / (count as u64 - cdf_min) as f64;

    // Equalized luma lookup, then blend per pixel.
    let mut lut = [0u8; 256];
    for (i, entry) in lut.iter_mut().enumerate() {
        let equalized = ((cdf[i].saturating_sub(cdf_min)) as f64 * factor + 0.5) as i64;
        *entry = equalized.clamp(0, 255) as u8;
    }

    for y in 0..h {
        for x in 0..w {
            let [r, g, b, a] = buf.get_pixel_unchecked(x, y);
            let l = luma(r, g, b);
            let e = lut[l as usize];
            let blended = l as f32 * (1.0 - strength) + e as f32 * strength;
            let v = (blended + 0.5).clamp(0.0, 255.0) as u8;
            buf.set_pixel_unchecked(x, y, [v, v, v, a]);
        }
    }

    Ok(())
}
