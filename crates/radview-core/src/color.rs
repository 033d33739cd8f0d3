//! Color channel helpers for RGBA byte buffers.
//!
//! # Pixel format
//!
//! Pixels are stored as 4 consecutive bytes in `R, G, B, A` order,
//! row-major, with no row padding.

/// Red channel (byte 0)
pub const RED: usize = 0;
/// Green channel (byte 1)
pub const GREEN: usize = 1;
/// Blue channel (byte 2)
pub const BLUE: usize = 2;
/// Alpha channel (byte 3)
pub const ALPHA: usize = 3;

/// Number of bytes per pixel
pub const BYTES_PER_PIXEL: usize = 4;

/// BT.601 luma of an RGB triple, rounded to the nearest integer in [0, 255].
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let l = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
    (l + 0.5) as u8
}

/// Byte offset of the pixel at `(x, y)` in a `width`-wide buffer.
#[inline]
pub fn pixel_offset(width: u32, x: u32, y: u32) -> usize {
    (y as usize * width as usize + x as usize) * BYTES_PER_PIXEL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luma_gray_is_identity() {
        for v in [0u8, 1, 64, 127, 128, 200, 255] {
            assert_eq!(luma(v, v, v), v, "gray {} should map to itself", v);
        }
    }

    #[test]
    fn test_luma_weights() {
        // Pure green dominates pure red dominates pure blue
        assert!(luma(0, 255, 0) > luma(255, 0, 0));
        assert!(luma(255, 0, 0) > luma(0, 0, 255));
        assert_eq!(luma(255, 0, 0), 76); // round(0.299 * 255)
        assert_eq!(luma(0, 0, 255), 29); // round(0.114 * 255)
    }

    #[test]
    fn test_pixel_offset_row_major() {
        assert_eq!(pixel_offset(10, 0, 0), 0);
        assert_eq!(pixel_offset(10, 1, 0), 4);
        assert_eq!(pixel_offset(10, 0, 1), 40);
        assert_eq!(pixel_offset(10, 3, 2), (2 * 10 + 3) * 4);
    }
}
