use super::inch_line;
use crate::config::StandardsConfig;
use crate::models::{CandidateRegion, Measurement, Rule, Threshold, Unit, ValidationVerdict};
use crate::utils::units::pixels_to_inches;

/// Margins between the region and the page edges
///
/// Left/right use the asymmetric EAN-13 quiet zones; top and bottom share
/// the vertical minimum. A region that overhangs the page yields a
/// negative margin, which fails.
pub fn validate_quiet_zones(
    region: &CandidateRegion,
    image_width: u32,
    image_height: u32,
    standards: &StandardsConfig,
) -> ValidationVerdict {
    let dpi = region.pixels_per_inch;
    let zone = |label: &str, pixels: f64, min: f64| {
        Measurement::new(
            label,
            pixels_to_inches(pixels, dpi),
            Unit::Inches,
            Threshold::AtLeast { min },
        )
    };

    let left = zone("left", region.x as f64, standards.left_quiet_zone);
    let right = zone(
        "right",
        region.right_margin(image_width),
        standards.right_quiet_zone,
    );
    let top = zone("top", region.y as f64, standards.vertical_quiet_zone);
    let bottom = zone(
        "bottom",
        region.bottom_margin(image_height),
        standards.vertical_quiet_zone,
    );

    let mut message = format!(
        "Quiet zone measurements:\n{}\n{}\n{}\n{}",
        inch_line("Left", "Required", &left),
        inch_line("Right", "Required", &right),
        inch_line("Top", "Required", &top),
        inch_line("Bottom", "Required", &bottom)
    );
    let measurements = vec![left, right, top, bottom];
    if measurements.iter().any(|m| !m.passed) {
        message.push_str("\nInsufficient quiet zones may affect scannability.");
    }

    ValidationVerdict::from_measurements(Rule::QuietZones, measurements, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;

    #[test]
    fn test_region_at_origin_fails() {
        let region = CandidateRegion::new(0, 0, 300, 200, 300.0);
        let v = validate_quiet_zones(&region, 3000, 3000, &StandardsConfig::default());
        assert!(!v.pass);
        assert_eq!(v.severity, Severity::Warning);
        assert_eq!(v.measurements[0].value, 0.0);
        assert_eq!(v.measurements[2].value, 0.0);
        assert!(!v.measurements[0].passed);
        assert!(!v.measurements[2].passed);
        assert!(v.measurements[1].passed);
        assert!(v.measurements[3].passed);
        assert_eq!(v.title, "Quiet Zone Issues");
    }

    #[test]
    fn test_generous_margins_pass() {
        // 0.5in on every side
        let region = CandidateRegion::new(150, 150, 440, 306, 300.0);
        let v = validate_quiet_zones(&region, 740, 606, &StandardsConfig::default());
        assert!(v.pass, "{}", v.message);
        assert_eq!(v.severity, Severity::Success);
        assert!(v.message.contains("Left: 0.50\" (Required: 0.36\") ✓"));
    }

    #[test]
    fn test_overhang_is_negative() {
        let region = CandidateRegion::new(0, 0, 400, 170, 300.0);
        let v = validate_quiet_zones(&region, 300, 120, &StandardsConfig::default());
        let right = &v.measurements[1];
        assert!(right.value < 0.0);
        assert!(!right.passed);
        assert!(v.message.contains("Right: -0.33\""));
    }
}
