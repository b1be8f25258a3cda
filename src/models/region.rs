//! Sampled blocks and the candidate barcode region

use crate::utils::units::pixels_to_inches;
use serde::Serialize;

/// Square sampling window with its measured contrast
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Block {
    /// Left edge in pixels
    pub x: u32,
    /// Top edge in pixels
    pub y: u32,
    /// Side length in pixels
    pub size: u32,
    /// Brightness range inside the block (0-255)
    pub contrast: f32,
}

/// Bounding box believed to hold the barcode
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CandidateRegion {
    /// Left edge in pixels
    pub x: u32,
    /// Top edge in pixels
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Resolution assumed when converting to inches
    pub pixels_per_inch: f64,
}

impl CandidateRegion {
    /// Create a region
    pub fn new(x: u32, y: u32, width: u32, height: u32, pixels_per_inch: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            pixels_per_inch,
        }
    }

    /// Width in inches
    pub fn width_inches(&self) -> f64 {
        pixels_to_inches(self.width as f64, self.pixels_per_inch)
    }

    /// Height in inches
    pub fn height_inches(&self) -> f64 {
        pixels_to_inches(self.height as f64, self.pixels_per_inch)
    }

    /// Width / height
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Distance from the right edge of the region to the right edge of the
    /// image, in pixels. Negative when the region overhangs the image.
    pub fn right_margin(&self, image_width: u32) -> f64 {
        image_width as f64 - (self.x as f64 + self.width as f64)
    }

    /// Distance from the bottom edge of the region to the bottom of the
    /// image, in pixels. Negative when the region overhangs the image.
    pub fn bottom_margin(&self, image_height: u32) -> f64 {
        image_height as f64 - (self.y as f64 + self.height as f64)
    }
}
