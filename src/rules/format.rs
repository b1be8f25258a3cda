use crate::config::StandardsConfig;
use crate::models::{CandidateRegion, Measurement, Rule, Threshold, Unit, ValidationVerdict};

/// Shape-only plausibility: an EAN-13 symbol is wider than tall, but not by
/// more than 2:1. This does not decode anything.
pub fn validate_format(region: &CandidateRegion, standards: &StandardsConfig) -> ValidationVerdict {
    let ratio = Measurement::new(
        "aspect ratio",
        region.aspect_ratio(),
        Unit::Ratio,
        Threshold::Exclusive {
            min: standards.format_ratio_min,
            max: standards.format_ratio_max,
        },
    );

    let pattern = if ratio.passed {
        "Compatible with EAN-13"
    } else {
        "May not be standard ISBN barcode"
    };
    let mut message = format!(
        "ISBN barcode format analysis:\n  Expected Format: EAN-13 (ISBN-13)\n  Aspect Ratio: {:.2}\n  Pattern: {pattern}",
        ratio.value
    );
    if !ratio.passed {
        message.push_str("\nBarcode may not be in standard ISBN format.");
    }
    message.push_str(
        "\nNote: Full validation requires actual barcode scanning and checksum verification.",
    );

    ValidationVerdict::from_measurements(Rule::FormatPlausibility, vec![ratio], message)
}
