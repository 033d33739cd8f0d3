//! PixelBuffer - the working RGBA byte container
//!
//! `PixelBuffer` is the mutable surface all post-processing passes
//! operate on. Data is row-major RGBA with no row padding, so a
//! `width x height` buffer always holds exactly `width * height * 4`
//! bytes.

use crate::color::{self, BYTES_PER_PIXEL};
use crate::error::{Error, Result};

/// A mutable RGBA8 pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer of the given dimensions, initialized to
    /// transparent black.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let len = width as usize * height as usize * BYTES_PER_PIXEL;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Create a buffer from existing RGBA bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for zero dimensions, or
    /// [`Error::BufferLengthMismatch`] if `data` is not exactly
    /// `width * height * 4` bytes.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if data.len() != expected {
            return Err(Error::BufferLengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Buffer width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Buffer height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Raw RGBA bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw RGBA bytes, row-major.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Get the RGBA quadruple at `(x, y)` without bounds checking.
    ///
    /// Callers must ensure `x < width` and `y < height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> [u8; 4] {
        let off = color::pixel_offset(self.width, x, y);
        [
            self.data[off],
            self.data[off + 1],
            self.data[off + 2],
            self.data[off + 3],
        ]
    }

    /// Set the RGBA quadruple at `(x, y)` without bounds checking.
    ///
    /// Callers must ensure `x < width` and `y < height`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let off = color::pixel_offset(self.width, x, y);
        self.data[off..off + 4].copy_from_slice(&rgba);
    }

    /// Fill the whole buffer with one RGBA value.
    pub fn fill(&mut self, rgba: [u8; 4]) {
        for px in self.data.chunks_exact_mut(BYTES_PER_PIXEL) {
            px.copy_from_slice(&rgba);
        }
    }

    /// Replace this buffer's contents with another buffer of the same shape.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleSizes`] if the shapes differ.
    pub fn copy_from(&mut self, other: &PixelBuffer) -> Result<()> {
        if self.width != other.width || self.height != other.height {
            return Err(Error::IncompatibleSizes(
                self.width,
                self.height,
                other.width,
                other.height,
            ));
        }
        self.data.copy_from_slice(&other.data);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_zero_initialized() {
        let buf = PixelBuffer::new(4, 3).unwrap();
        assert_eq!(buf.width(), 4);
        assert_eq!(buf.height(), 3);
        assert_eq!(buf.pixel_count(), 12);
        assert!(buf.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_new_invalid_dimensions() {
        assert!(PixelBuffer::new(0, 10).is_err());
        assert!(PixelBuffer::new(10, 0).is_err());
    }

    #[test]
    fn test_from_rgba_length_checked() {
        assert!(PixelBuffer::from_rgba(2, 2, vec![0; 16]).is_ok());
        assert!(PixelBuffer::from_rgba(2, 2, vec![0; 15]).is_err());
        assert!(PixelBuffer::from_rgba(2, 2, vec![0; 17]).is_err());
    }

    #[test]
    fn test_pixel_roundtrip() {
        let mut buf = PixelBuffer::new(3, 3).unwrap();
        buf.set_pixel_unchecked(1, 2, [10, 20, 30, 40]);
        assert_eq!(buf.get_pixel_unchecked(1, 2), [10, 20, 30, 40]);
        assert_eq!(buf.get_pixel_unchecked(0, 0), [0, 0, 0, 0]);
    }

    #[test]
    fn test_fill() {
        let mut buf = PixelBuffer::new(2, 2).unwrap();
        buf.fill([1, 2, 3, 255]);
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(buf.get_pixel_unchecked(x, y), [1, 2, 3, 255]);
            }
        }
    }

    #[test]
    fn test_copy_from_shape_mismatch() {
        let mut a = PixelBuffer::new(2, 2).unwrap();
        let b = PixelBuffer::new(3, 2).unwrap();
        assert!(a.copy_from(&b).is_err());
    }
}
