//! Noise reduction via 3x3 median filtering
//!
//! Order-statistic filtering removes impulse ("salt and pepper") noise
//! without the smearing a mean filter would introduce. Each color
//! channel is filtered independently; alpha passes through. The
//! 1-pixel border is left untouched, the same boundary policy as the
//! sharpening pass.

use crate::FilterResult;
use radview_core::PixelBuffer;

/// Median-filter `buf` in place over a 3x3 window.
///
/// Buffers narrower or shorter than 3 pixels have no interior and are
/// left unchanged.
pub fn median_denoise(buf: &mut PixelBuffer) -> FilterResult<()> {
    let w = buf.width();
    let h = buf.height();
    if w < 3 || h < 3 {
        return Ok(());
    }

    let mut out = buf.clone();

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let mut window = [[0u8; 9]; 3];
            let mut i = 0;
            for sy in y - 1..=y + 1 {
                for sx in x - 1..=x + 1 {
                    let px = buf.get_pixel_unchecked(sx, sy);
                    for c in 0..3 {
                        window[c][i] = px[c];
                    }
                    i += 1;
                }
            }
            let a = buf.get_pixel_unchecked(x, y)[3];
            let mut result = [0u8; 4];
            for c in 0..3 {
                window[c].sort_unstable();
                result[c] = window[c][4];
            }
            result[3] = a;
            out.set_pixel_unchecked(x, y, result);
        }
    }

    buf.copy_from(&out)?;
    Ok(())
}
