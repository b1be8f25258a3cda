use crate::config::StandardsConfig;
use crate::models::{CandidateRegion, Measurement, Rule, Threshold, Unit, ValidationVerdict};

/// Average of the width and height magnification must sit in the accepted
/// range (80%-200% for EAN-13)
pub fn validate_scaling(
    region: &CandidateRegion,
    standards: &StandardsConfig,
) -> ValidationVerdict {
    let width_scale = region.width_inches() / standards.nominal_width;
    let height_scale = region.height_inches() / standards.nominal_height;
    let average = (width_scale + height_scale) / 2.0;

    let scale = Measurement::new(
        "average scale",
        average,
        Unit::Ratio,
        Threshold::Inclusive {
            min: standards.min_magnification,
            max: standards.max_magnification,
        },
    );

    let mut message = format!(
        "Barcode scaling analysis:\n  Current Scale: {:.0}%\n  Width Scale: {:.0}%, Height Scale: {:.0}%\n  Acceptable Range: {:.0}% - {:.0}%\n  Recommended: 100%",
        (average * 100.0).round(),
        width_scale * 100.0,
        height_scale * 100.0,
        standards.min_magnification * 100.0,
        standards.max_magnification * 100.0
    );
    if average < standards.min_magnification {
        message.push_str("\nBarcode is scaled too small.");
    } else if average > standards.max_magnification {
        message.push_str("\nBarcode is scaled too large.");
    } else if (average - 1.0).abs() < 0.1 {
        message.push_str("\nScaling is optimal.");
    }

    ValidationVerdict::from_measurements(Rule::Scaling, vec![scale], message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;

    #[test]
    fn test_nominal_size_is_optimal() {
        let region = CandidateRegion::new(0, 0, 440, 306, 300.0);
        let v = validate_scaling(&region, &StandardsConfig::default());
        assert!(v.pass);
        assert!((v.measurements[0].value - 0.9992).abs() < 1e-3);
        assert!(v.message.contains("Current Scale: 100%"));
        assert!(v.message.contains("Acceptable Range: 80% - 200%"));
        assert!(v.message.contains("Scaling is optimal."));
    }

    #[test]
    fn test_too_small() {
        // about 50% of nominal
        let region = CandidateRegion::new(0, 0, 220, 153, 300.0);
        let v = validate_scaling(&region, &StandardsConfig::default());
        assert!(!v.pass);
        assert_eq!(v.severity, Severity::Error);
        assert_eq!(v.title, "Scaling Issue");
        assert!(v.message.contains("scaled too small"));
    }

    #[test]
    fn test_too_large() {
        let region = CandidateRegion::new(0, 0, 1400, 1000, 300.0);
        let v = validate_scaling(&region, &StandardsConfig::default());
        assert!(!v.pass);
        assert!(v.message.contains("scaled too large"));
    }

    #[test]
    fn test_in_range_but_not_optimal() {
        // 150% of nominal
        let region = CandidateRegion::new(0, 0, 661, 459, 300.0);
        let v = validate_scaling(&region, &StandardsConfig::default());
        assert!(v.pass);
        assert!(!v.message.contains("optimal"));
    }
}
