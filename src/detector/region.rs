//! Grid scan for the highest-contrast block and expansion into a region

use super::contrast::compute_block_contrast;
use crate::config::DetectionConfig;
use crate::models::{Block, CandidateRegion, RasterImage};
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

/// Counters collected while scanning the block grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DetectionStats {
    /// Blocks whose contrast was measured
    pub blocks_sampled: usize,
    /// Blocks whose contrast was above the threshold
    pub blocks_above_threshold: usize,
    /// Highest-contrast qualifying block (first in row-major order on ties)
    pub best_block: Option<Block>,
}

impl DetectionStats {
    // Later rows only replace the best block on strictly higher contrast,
    // which keeps the row-major tie-break when rows are scanned out of order.
    fn merge(mut self, other: DetectionStats) -> Self {
        self.blocks_sampled += other.blocks_sampled;
        self.blocks_above_threshold += other.blocks_above_threshold;
        self.best_block = match (self.best_block, other.best_block) {
            (Some(a), Some(b)) if b.contrast > a.contrast => Some(b),
            (Some(a), _) => Some(a),
            (None, b) => b,
        };
        self
    }
}

/// Contrast-based barcode region detector
pub struct RegionDetector;

impl RegionDetector {
    /// Find the candidate barcode region, or `None` when no block is
    /// contrasty enough
    pub fn detect(
        image: &RasterImage,
        config: &DetectionConfig,
        dpi: f64,
    ) -> Option<CandidateRegion> {
        Self::detect_with_stats(image, config, dpi).0
    }

    /// Like [`RegionDetector::detect`] but also returns grid scan counters
    pub fn detect_with_stats(
        image: &RasterImage,
        config: &DetectionConfig,
        dpi: f64,
    ) -> (Option<CandidateRegion>, DetectionStats) {
        let stats = grid_origins(image.height(), config.block_size)
            .map(|y| scan_row(image, config, y))
            .fold(DetectionStats::default(), DetectionStats::merge);

        (Self::finish(image, config, dpi, &stats), stats)
    }

    /// Scan grid rows on the rayon pool
    ///
    /// Returns the same region as [`RegionDetector::detect`].
    pub fn detect_parallel(
        image: &RasterImage,
        config: &DetectionConfig,
        dpi: f64,
    ) -> Option<CandidateRegion> {
        let rows: Vec<u32> = grid_origins(image.height(), config.block_size).collect();
        let per_row: Vec<DetectionStats> = rows
            .par_iter()
            .map(|&y| scan_row(image, config, y))
            .collect();
        let stats = per_row
            .into_iter()
            .fold(DetectionStats::default(), DetectionStats::merge);

        Self::finish(image, config, dpi, &stats)
    }

    /// Every sampled block in row-major order, qualifying or not
    pub fn sample_grid(image: &RasterImage, block_size: u32) -> Vec<Block> {
        grid_origins(image.height(), block_size)
            .flat_map(|y| {
                grid_origins(image.width(), block_size).map(move |x| Block {
                    x,
                    y,
                    size: block_size,
                    contrast: compute_block_contrast(image, x, y, block_size),
                })
            })
            .collect()
    }

    /// Grow a block by the configured margins
    ///
    /// The origin is clamped at zero. Width and height are capped by the
    /// configured maxima only; the right/bottom edge may extend past the
    /// image unless `clamp_to_image` is set.
    pub fn expand(
        block: &Block,
        image: &RasterImage,
        config: &DetectionConfig,
        dpi: f64,
    ) -> CandidateRegion {
        let x = block.x.saturating_sub(config.expand_x);
        let y = block.y.saturating_sub(config.expand_y);
        let mut width = (image.width() - block.x)
            .saturating_add(config.expand_x)
            .min(config.max_region_width);
        let mut height = (image.height() - block.y)
            .saturating_add(config.expand_y)
            .min(config.max_region_height);

        if config.clamp_to_image {
            width = width.min(image.width() - x);
            height = height.min(image.height() - y);
        }

        CandidateRegion::new(x, y, width, height, dpi)
    }

    fn finish(
        image: &RasterImage,
        config: &DetectionConfig,
        dpi: f64,
        stats: &DetectionStats,
    ) -> Option<CandidateRegion> {
        debug!(
            sampled = stats.blocks_sampled,
            qualifying = stats.blocks_above_threshold,
            "block grid scanned"
        );

        let best = stats.best_block?;
        let region = Self::expand(&best, image, config, dpi);
        debug!(
            block_x = best.x,
            block_y = best.y,
            contrast = best.contrast,
            region = ?region,
            "expanded best block"
        );
        Some(region)
    }
}

/// Block origins along one axis: 0, step, 2*step, ... while the block
/// ends strictly inside the image. Trailing partial blocks (and a block
/// that would end exactly on the edge) are not sampled.
fn grid_origins(extent: u32, block_size: u32) -> impl Iterator<Item = u32> {
    let step = block_size.max(1) as usize;
    (0..extent.saturating_sub(block_size)).step_by(step)
}

fn scan_row(image: &RasterImage, config: &DetectionConfig, y: u32) -> DetectionStats {
    let threshold = config.contrast_threshold as f32;
    let mut stats = DetectionStats::default();

    for x in grid_origins(image.width(), config.block_size) {
        let contrast = compute_block_contrast(image, x, y, config.block_size);
        stats.blocks_sampled += 1;
        if contrast <= threshold {
            continue;
        }
        stats.blocks_above_threshold += 1;
        let better = stats.best_block.is_none_or(|b| contrast > b.contrast);
        if better {
            stats.best_block = Some(Block {
                x,
                y,
                size: config.block_size,
                contrast,
            });
        }
    }

    stats
}
