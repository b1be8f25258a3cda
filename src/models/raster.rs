//! RGBA page raster

use crate::error::{Result, ValidationError};

/// Bytes per RGBA pixel
pub const CHANNELS: usize = 4;

/// Decoded page raster: 8-bit RGBA, top-left origin, row-major
///
/// The constructor checks the buffer against the dimensions, so every
/// `RasterImage` in circulation is well formed and pixel access can index
/// directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RasterImage {
    /// Wrap an RGBA buffer of `width * height * 4` bytes
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ValidationError::InvalidDimensions { width, height });
        }
        let expected = width as usize * height as usize * CHANNELS;
        if pixels.len() != expected {
            return Err(ValidationError::BufferLength {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Take ownership of a decoded `image` buffer
    pub fn from_image(img: image::RgbaImage) -> Result<Self> {
        let (width, height) = img.dimensions();
        Self::from_rgba(width, height, img.into_raw())
    }

    /// Image width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// RGBA bytes of one pixel row
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.width as usize * CHANNELS;
        let start = y as usize * stride;
        &self.pixels[start..start + stride]
    }

    #[cfg(test)]
    pub(crate) fn pixel(&self, x: u32, y: u32) -> &[u8] {
        let idx = (y as usize * self.width as usize + x as usize) * CHANNELS;
        &self.pixels[idx..idx + CHANNELS]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgba() {
        let img = RasterImage::from_rgba(2, 3, vec![0u8; 24]).unwrap();
        assert_eq!(img.width(), 2);
        assert_eq!(img.height(), 3);
        assert_eq!(img.row(2).len(), 8);
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        let err = RasterImage::from_rgba(0, 10, Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidDimensions {
                width: 0,
                height: 10
            }
        ));
    }

    #[test]
    fn test_rejects_short_buffer() {
        let err = RasterImage::from_rgba(10, 10, vec![0u8; 300]).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::BufferLength {
                expected: 400,
                actual: 300
            }
        ));
    }

    #[test]
    fn test_pixel_access() {
        let mut pixels = vec![0u8; 2 * 2 * 4];
        pixels[12..16].copy_from_slice(&[1, 2, 3, 4]);
        let img = RasterImage::from_rgba(2, 2, pixels).unwrap();
        assert_eq!(img.pixel(1, 1), &[1, 2, 3, 4]);
        assert_eq!(img.pixel(0, 0), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_from_image() {
        let rgba = image::RgbaImage::from_pixel(3, 2, image::Rgba([9, 9, 9, 255]));
        let img = RasterImage::from_image(rgba).unwrap();
        assert_eq!((img.width(), img.height()), (3, 2));
        assert_eq!(img.pixel(2, 1), &[9, 9, 9, 255]);
    }
}
