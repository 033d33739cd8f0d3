//! Edge sharpening via 3x3 high-pass convolution
//!
//! The kernel sums to 1, so flat regions are unchanged and edges gain
//! local contrast. Each color channel is convolved independently;
//! alpha passes through. The outermost 1-pixel ring is not processed
//! at all (no wrapping, no replicate extension): edge handling is not
//! worth its cost when clinical content rarely sits at the frame
//! border.
//!
//! The convolution reads from the original buffer and writes to a
//! scratch buffer that is copied back only after the full pass, so
//! neighbor reads never observe partially sharpened values.

use crate::FilterResult;
use radview_core::PixelBuffer;

/// The 3x3 sharpening kernel, row-major.
const SHARPEN_KERNEL: [[f32; 3]; 3] = [[0.0, -1.0, 0.0], [-1.0, 5.0, -1.0], [0.0, -1.0, 0.0]];

/// Sharpen `buf` in place with the 3x3 high-pass kernel.
///
/// Buffers narrower or shorter than 3 pixels have no interior and are
/// left unchanged.
pub fn sharpen(buf: &mut PixelBuffer) -> FilterResult<()> {
    let w = buf.width();
    let h = buf.height();
    if w < 3 || h < 3 {
        return Ok(());
    }

    let mut out = buf.clone();

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let mut sum = [0.0f32; 3];
            for (ky, row) in SHARPEN_KERNEL.iter().enumerate() {
                for (kx, &k) in row.iter().enumerate() {
                    if k == 0.0 {
                        continue;
                    }
                    let sx = x + kx as u32 - 1;
                    let sy = y + ky as u32 - 1;
                    let px = buf.get_pixel_unchecked(sx, sy);
                    for c in 0..3 {
                        sum[c] += px[c] as f32 * k;
                    }
                }
            }
            let a = buf.get_pixel_unchecked(x, y)[3];
            out.set_pixel_unchecked(
                x,
                y,
                [
                    sum[0].round().clamp(0.0, 255.0) as u8,
                    sum[1].round().clamp(0.0, 255.0) as u8,
                    sum[2].round().clamp(0.0, 255.0) as u8,
                    a,
                ],
            );
        }
    }

    buf.copy_from(&out)?;
    Ok(())
}
