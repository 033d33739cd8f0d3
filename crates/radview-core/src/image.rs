//! ImageSource - a decoded raster supplied by the caller
//!
//! The pipeline never decodes compressed formats; it receives a fully
//! decoded RGBA raster and borrows it for the duration of one render
//! call. `ImageSource` is immutable after construction.

use crate::color::BYTES_PER_PIXEL;
use crate::error::{Error, Result};

/// An immutable decoded raster image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl ImageSource {
    /// Create an image source from decoded RGBA bytes.
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

    /// Create a grayscale image, writing the level into R, G and B with
    /// opaque alpha. Convenient for tests and synthetic frames.
    ///
    /// `levels` is row-major, one byte per pixel.
    pub fn from_gray(width: u32, height: u32, levels: &[u8]) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let count = width as usize * height as usize;
        if levels.len() != count {
            return Err(Error::BufferLengthMismatch {
                expected: count,
                actual: levels.len(),
            });
        }
        let mut data = Vec::with_capacity(count * BYTES_PER_PIXEL);
        for &l in levels {
            data.extend_from_slice(&[l, l, l, 255]);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Natural width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Natural height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get the RGBA quadruple at `(x, y)` without bounds checking.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> [u8; 4] {
        let off = crate::color::pixel_offset(self.width, x, y);
        [
            self.data[off],
            self.data[off + 1],
            self.data[off + 2],
            self.data[off + 3],
        ]
    }
}
