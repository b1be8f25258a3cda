//! Core data structures
//!
//! - Page raster
//! - Sampled blocks and candidate regions
//! - Verdicts and reports

/// Validated RGBA page raster
pub mod raster;
/// Grid blocks and the candidate barcode region
pub mod region;
/// Rule verdicts, measurements and the validation report
pub mod verdict;

pub use raster::RasterImage;
pub use region::{Block, CandidateRegion};
pub use verdict::{
    Measurement, Outcome, Rule, Severity, Threshold, Unit, ValidationReport, ValidationVerdict,
};
