use crate::config::StandardsConfig;
use crate::models::{CandidateRegion, Measurement, Rule, Threshold, Unit, ValidationVerdict};

/// Relative deviation of width/height from the nominal ratio must stay
/// below `max_deviation`
pub fn validate_aspect_ratio(
    region: &CandidateRegion,
    standards: &StandardsConfig,
    max_deviation: f64,
) -> ValidationVerdict {
    let ratio = region.aspect_ratio();
    let expected = standards.nominal_ratio();
    let deviation = Measurement::new(
        "deviation",
        (ratio - expected).abs() / expected,
        Unit::Ratio,
        Threshold::Below { max: max_deviation },
    );

    let mut message = format!(
        "Aspect ratio validation:\n  Current Ratio: {ratio:.2}\n  Expected Ratio: {expected:.2}\n  Deviation: {:.1}% (Maximum: {:.0}%)",
        deviation.value * 100.0,
        max_deviation * 100.0
    );
    if !deviation.passed {
        message.push_str("\nAspect ratio distortion may affect readability.");
    }

    ValidationVerdict::from_measurements(Rule::AspectRatio, vec![deviation], message)
}
