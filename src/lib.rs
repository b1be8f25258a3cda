//! barcode_check - heuristic ISBN/EAN-13 barcode print-quality checks
//!
//! Takes the rendered first page of a PDF as an RGBA raster, finds the most
//! contrasty area (assumed to be the barcode), and checks its geometry
//! against EAN-13 print rules: minimum size, quiet zones, magnification,
//! shape plausibility and aspect ratio.
//!
//! This is a geometric heuristic, not a barcode reader: nothing is decoded
//! and no checksum is verified.
//!
//! ```
//! use barcode_check::{RasterImage, Validator};
//!
//! let page = RasterImage::from_rgba(600, 400, vec![255u8; 600 * 400 * 4]).unwrap();
//! let report = Validator::new().validate(Some(&page)).unwrap();
//! assert!(!report.overall_pass); // blank page: no barcode
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Standards and detector configuration
pub mod config;
/// Barcode region detection (contrast sampling, grid scan, expansion)
pub mod detector;
/// Error types
pub mod error;
/// Core data structures (RasterImage, CandidateRegion, verdicts)
pub mod models;
/// Report rendering and reporter callbacks
pub mod report;
/// The five geometric print-quality rules
pub mod rules;
/// Image loading and dataset helpers for the CLI and benches
pub mod tools;
/// Utility functions (brightness, unit conversion)
pub mod utils;

pub use config::{DetectionConfig, StandardsConfig};
pub use detector::RegionDetector;
pub use error::{Result, ValidationError};
pub use models::{
    CandidateRegion, Outcome, RasterImage, Rule, Severity, ValidationReport, ValidationVerdict,
};
pub use report::{LogReporter, ValidationReporter, render_text};

use tracing::{debug, info, instrument};

/// Validate a page with the default standards and detector settings
///
/// `None` means no page has been loaded; it is rejected with
/// [`ValidationError::MissingImage`] and nothing runs.
pub fn validate(image: Option<&RasterImage>) -> Result<ValidationReport> {
    Validator::new().validate(image)
}

/// Detection + rule pipeline with its configuration
///
/// Holds no per-image state; one validator can be reused for any number of
/// pages, and validating the same page twice yields identical reports.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    standards: StandardsConfig,
    detection: DetectionConfig,
    parallel: bool,
}

impl Validator {
    /// Create a validator with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator with custom tables, rejecting unusable values
    pub fn with_config(standards: StandardsConfig, detection: DetectionConfig) -> Result<Self> {
        standards.validate()?;
        detection.validate()?;
        Ok(Self {
            standards,
            detection,
            parallel: false,
        })
    }

    /// Scan the block grid on the rayon pool (same results, faster on large pages)
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Print standards in use
    pub fn standards(&self) -> &StandardsConfig {
        &self.standards
    }

    /// Detector settings in use
    pub fn detection(&self) -> &DetectionConfig {
        &self.detection
    }

    /// Locate the candidate barcode region
    pub fn detect(&self, image: &RasterImage) -> Option<CandidateRegion> {
        if self.parallel {
            RegionDetector::detect_parallel(image, &self.detection, self.standards.dpi)
        } else {
            RegionDetector::detect(image, &self.detection, self.standards.dpi)
        }
    }

    /// Run detection and, if a region is found, all five rules
    #[instrument(level = "debug", skip_all)]
    pub fn validate(&self, image: Option<&RasterImage>) -> Result<ValidationReport> {
        let image = image.ok_or(ValidationError::MissingImage)?;
        debug!(width = image.width(), height = image.height(), "validating page");

        let Some(region) = self.detect(image) else {
            info!("no barcode detected");
            return Ok(ValidationReport::not_found());
        };
        debug!(?region, "candidate region");

        let verdicts = rules::validate_region(
            &region,
            image.width(),
            image.height(),
            &self.standards,
            &self.detection,
        );
        let report = ValidationReport::complete(region, verdicts);
        info!(
            overall_pass = report.overall_pass,
            failures = report.failures().count(),
            "validation complete"
        );
        Ok(report)
    }

    /// Like [`Validator::validate`], also notifying `reporter`
    pub fn validate_with_reporter<R: ValidationReporter + ?Sized>(
        &self,
        image: Option<&RasterImage>,
        reporter: &mut R,
    ) -> Result<ValidationReport> {
        match self.validate(image) {
            Ok(report) => {
                reporter.on_report(&report);
                Ok(report)
            }
            Err(err) => {
                reporter.on_invalid_input(&err);
                Err(err)
            }
        }
    }
}
