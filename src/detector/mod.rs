//! Barcode region detection
//!
//! The detector does not read the symbol. It looks for the most contrasty
//! block on a coarse grid and grows a fixed margin around it:
//! - Contrast sampling (brightness range per block)
//! - Region detection (grid scan, best block, expansion)

/// Brightness range over a square block
pub mod contrast;
/// Grid scan and region expansion
pub mod region;

pub use contrast::compute_block_contrast;
pub use region::{DetectionStats, RegionDetector};
