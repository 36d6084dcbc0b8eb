//! Caller-supplied image buffers
//!
//! The driver accepts only fully rendered raster images: interleaved
//! 3-channel RGB888, row-major, 3 bytes per pixel. [`RgbImage`] is a
//! borrowed, validated view over such a buffer; the driver never retains a
//! framebuffer between calls.
//!
//! ## Example
//!
//! ```
//! use st7789::RgbImage;
//!
//! let pixels = [0u8; 4 * 2 * 3];
//! let image = RgbImage::new(&pixels, 4, 2);
//! assert!(image.is_ok());
//!
//! // Length must be exactly width * height * 3
//! assert!(RgbImage::new(&pixels, 4, 3).is_err());
//! ```

use crate::error::ImageError;

/// Borrowed view over an interleaved RGB888 pixel buffer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RgbImage<'a> {
    /// Interleaved RGB bytes, row-major
    data: &'a [u8],
    /// Width in pixels
    width: u16,
    /// Height in pixels
    height: u16,
}

impl<'a> RgbImage<'a> {
    /// Create a validated image view
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::ZeroDimension`] if either dimension is zero,
    /// or [`ImageError::LengthMismatch`] if the buffer is not exactly
    /// `width * height * 3` bytes.
    pub fn new(data: &'a [u8], width: u16, height: u16) -> Result<Self, ImageError> {
        if width == 0 || height == 0 {
            return Err(ImageError::ZeroDimension { width, height });
        }
        let expected = width as usize * height as usize * 3;
        if data.len() != expected {
            return Err(ImageError::LengthMismatch {
                expected,
                provided: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Width in pixels
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Raw interleaved RGB bytes
    pub fn data(&self) -> &'a [u8] {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_valid_image() {
        let data = vec![0u8; 8 * 4 * 3];
        let image = RgbImage::new(&data, 8, 4).unwrap();
        assert_eq!(image.width(), 8);
        assert_eq!(image.height(), 4);
        assert_eq!(image.data().len(), 96);
    }

    #[test]
    fn test_length_mismatch() {
        let data = vec![0u8; 10];
        assert_eq!(
            RgbImage::new(&data, 8, 4),
            Err(ImageError::LengthMismatch {
                expected: 96,
                provided: 10
            })
        );
    }

    #[test]
    fn test_zero_dimension() {
        let data = [];
        assert_eq!(
            RgbImage::new(&data, 0, 4),
            Err(ImageError::ZeroDimension {
                width: 0,
                height: 4
            })
        );
    }
}
