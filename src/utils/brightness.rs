//! Pixel brightness as used by the contrast sampler
//! B = (R + G + B) / 3, unweighted, alpha ignored
//!
//! Brightness is carried as the channel sum (0-765) inside hot loops so the
//! per-pixel work stays in integers; divide by 3 only at the end.

use crate::models::RasterImage;
use crate::models::raster::CHANNELS;
use rayon::prelude::*;

/// Channel sum R + G + B of one RGBA pixel
#[inline]
pub fn brightness_sum(px: &[u8]) -> u16 {
    px[0] as u16 + px[1] as u16 + px[2] as u16
}

/// Summary statistics for image brightness
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrightnessStats {
    /// Darkest pixel
    pub min: f32,
    /// Brightest pixel
    pub max: f32,
    /// Mean over all pixels
    pub avg: f32,
}

/// Compute min/max/avg brightness, processing rows in parallel
pub fn brightness_stats(image: &RasterImage) -> BrightnessStats {
    let (min, max, sum) = (0..image.height())
        .into_par_iter()
        .map(|y| {
            let mut min = u16::MAX;
            let mut max = 0u16;
            let mut sum = 0u64;
            for px in image.row(y).chunks_exact(CHANNELS) {
                let b = brightness_sum(px);
                min = min.min(b);
                max = max.max(b);
                sum += b as u64;
            }
            (min, max, sum)
        })
        .reduce(
            || (u16::MAX, 0u16, 0u64),
            |a, b| (a.0.min(b.0), a.1.max(b.1), a.2 + b.2),
        );

    let pixel_count = image.width() as u64 * image.height() as u64;
    BrightnessStats {
        min: min as f32 / 3.0,
        max: max as f32 / 3.0,
        avg: (sum as f64 / 3.0 / pixel_count as f64) as f32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brightness_sum() {
        assert_eq!(brightness_sum(&[255, 255, 255, 0]), 765);
        assert_eq!(brightness_sum(&[0, 0, 0, 255]), 0);
        // Unweighted: pure red and pure blue are equally bright
        assert_eq!(brightness_sum(&[255, 0, 0, 255]), brightness_sum(&[0, 0, 255, 255]));
        assert_eq!(brightness_sum(&[10, 20, 30, 99]), 60);
    }

    #[test]
    fn test_brightness_stats() {
        let mut pixels = vec![128u8; 4 * 4 * 4];
        pixels[0..4].copy_from_slice(&[0, 0, 0, 255]);
        pixels[60..64].copy_from_slice(&[255, 255, 255, 255]);
        let img = RasterImage::from_rgba(4, 4, pixels).unwrap();
        let stats = brightness_stats(&img);
        assert_eq!(stats.min, 0.0);
        assert_eq!(stats.max, 255.0);
        assert!(stats.avg > 120.0 && stats.avg < 130.0);
    }
}
