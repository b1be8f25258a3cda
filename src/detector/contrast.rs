//! Block contrast sampling: brightness range over a square window

use crate::models::RasterImage;
use crate::models::raster::CHANNELS;
use crate::utils::brightness::brightness_sum;

/// Brightness range (max - min) over the `block_size` square at (x, y)
///
/// The caller guarantees the block lies inside the image. Brightness is the
/// unweighted RGB mean, so the result is in 0..=255 and may be fractional
/// (in steps of 1/3).
pub fn compute_block_contrast(image: &RasterImage, x: u32, y: u32, block_size: u32) -> f32 {
    let start = x as usize * CHANNELS;
    let end = start + block_size as usize * CHANNELS;

    let mut min = u16::MAX;
    let mut max = 0u16;
    for row in y..y + block_size {
        for px in image.row(row)[start..end].chunks_exact(CHANNELS) {
            let b = brightness_sum(px);
            min = min.min(b);
            max = max.max(b);
        }
    }

    max.saturating_sub(min) as f32 / 3.0
}
