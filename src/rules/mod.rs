//! Geometric print-quality rules
//!
//! Each rule is a pure function of the candidate region (plus the page size
//! for quiet zones) and always yields exactly one verdict. Rules never
//! short-circuit each other.

/// Width/height ratio against the nominal ratio
pub mod aspect_ratio;
/// Crude EAN-13 shape plausibility
pub mod format;
/// Blank margins around the symbol
pub mod quiet_zones;
/// Magnification against the nominal symbol size
pub mod scaling;
/// Minimum printed size
pub mod size;

pub use aspect_ratio::validate_aspect_ratio;
pub use format::validate_format;
pub use quiet_zones::validate_quiet_zones;
pub use scaling::validate_scaling;
pub use size::validate_size;

use crate::config::{DetectionConfig, StandardsConfig};
use crate::models::{CandidateRegion, Measurement, Threshold, Unit, ValidationVerdict};

/// Run all five rules in reporting order:
/// size, quiet zones, scaling, format plausibility, aspect ratio
pub fn validate_region(
    region: &CandidateRegion,
    image_width: u32,
    image_height: u32,
    standards: &StandardsConfig,
    detection: &DetectionConfig,
) -> Vec<ValidationVerdict> {
    vec![
        validate_size(region, standards),
        validate_quiet_zones(region, image_width, image_height, standards),
        validate_scaling(region, standards),
        validate_format(region, standards),
        validate_aspect_ratio(region, standards, detection.max_aspect_deviation),
    ]
}

fn mark(passed: bool) -> &'static str {
    if passed { "✓" } else { "✗" }
}

/// `Width: 1.33" (Minimum: 1.02") ✓`
fn inch_line(label: &str, qualifier: &str, m: &Measurement) -> String {
    let bound = match m.threshold {
        Threshold::AtLeast { min } => min,
        Threshold::Below { max } => max,
        Threshold::Inclusive { min, .. } | Threshold::Exclusive { min, .. } => min,
    };
    debug_assert_eq!(m.unit, Unit::Inches);
    format!(
        "  {label}: {:.2}\" ({qualifier}: {bound}\") {}",
        m.value,
        mark(m.passed)
    )
}
