use super::inch_line;
use crate::config::StandardsConfig;
use crate::models::{CandidateRegion, Measurement, Rule, Threshold, Unit, ValidationVerdict};

/// Width and height must each reach the printed minimum
pub fn validate_size(region: &CandidateRegion, standards: &StandardsConfig) -> ValidationVerdict {
    let width = Measurement::new(
        "width",
        region.width_inches(),
        Unit::Inches,
        Threshold::AtLeast {
            min: standards.min_width,
        },
    );
    let height = Measurement::new(
        "height",
        region.height_inches(),
        Unit::Inches,
        Threshold::AtLeast {
            min: standards.min_height,
        },
    );

    let mut message = format!(
        "Detected barcode dimensions:\n{}\n{}",
        inch_line("Width", "Minimum", &width),
        inch_line("Height", "Minimum", &height)
    );
    if !(width.passed && height.passed) {
        message.push_str("\nBarcode is too small for reliable scanning.");
    }

    ValidationVerdict::from_measurements(Rule::Size, vec![width, height], message)
}
