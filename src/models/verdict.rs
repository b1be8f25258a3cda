//! Verdicts, measurements and the validation report

use super::CandidateRegion;
use serde::Serialize;
use std::fmt;

/// How a verdict should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Check passed
    Success,
    /// Advisory failure: may reduce scan reliability
    Warning,
    /// Hard failure: likely will not scan
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(s)
    }
}

/// Which check produced a verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Region detection itself (only reported when nothing was found)
    Detection,
    /// Minimum printed size
    Size,
    /// Blank margins around the symbol
    QuietZones,
    /// Magnification against the nominal size
    Scaling,
    /// Width/height ratio looks like an EAN-13 symbol
    FormatPlausibility,
    /// Width/height ratio matches the nominal ratio
    AspectRatio,
}

impl Rule {
    /// The five geometric rules, in reporting order
    pub const GEOMETRIC: [Rule; 5] = [
        Rule::Size,
        Rule::QuietZones,
        Rule::Scaling,
        Rule::FormatPlausibility,
        Rule::AspectRatio,
    ];

    /// Severity assigned when the rule fails
    pub fn failure_severity(&self) -> Severity {
        match self {
            Rule::Detection | Rule::Size | Rule::Scaling => Severity::Error,
            Rule::QuietZones | Rule::FormatPlausibility | Rule::AspectRatio => Severity::Warning,
        }
    }

    /// Headline shown for a passing or failing verdict
    pub fn title(&self, pass: bool) -> &'static str {
        match (self, pass) {
            (Rule::Detection, true) => "Barcode Detected",
            (Rule::Detection, false) => "No Barcode Detected",
            (Rule::Size, true) => "Barcode Size Compliance",
            (Rule::Size, false) => "Barcode Size Issue",
            (Rule::QuietZones, true) => "Quiet Zones Adequate",
            (Rule::QuietZones, false) => "Quiet Zone Issues",
            (Rule::Scaling, true) => "Scaling Compliance",
            (Rule::Scaling, false) => "Scaling Issue",
            (Rule::FormatPlausibility, true) => "ISBN Format Valid",
            (Rule::FormatPlausibility, false) => "ISBN Format Check",
            (Rule::AspectRatio, true) => "Aspect Ratio Maintained",
            (Rule::AspectRatio, false) => "Aspect Ratio Issue",
        }
    }
}

/// Unit of a measured value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// Physical inches
    Inches,
    /// Dimensionless ratio (1.0 = 100%)
    Ratio,
}

/// Acceptance window a measurement is compared against
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Threshold {
    /// value >= min
    AtLeast {
        /// Inclusive lower bound
        min: f64,
    },
    /// value < max
    Below {
        /// Exclusive upper bound
        max: f64,
    },
    /// min <= value <= max
    Inclusive {
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
    },
    /// min < value < max
    Exclusive {
        /// Exclusive lower bound
        min: f64,
        /// Exclusive upper bound
        max: f64,
    },
}

impl Threshold {
    /// Whether `value` falls inside the window
    pub fn admits(&self, value: f64) -> bool {
        match *self {
            Threshold::AtLeast { min } => value >= min,
            Threshold::Below { max } => value < max,
            Threshold::Inclusive { min, max } => value >= min && value <= max,
            Threshold::Exclusive { min, max } => value > min && value < max,
        }
    }
}

/// One measured quantity and the sub-check it feeds
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    /// What was measured ("width", "left", ...)
    pub label: String,
    /// Unrounded measured value
    pub value: f64,
    /// Unit of `value` and of the threshold bounds
    pub unit: Unit,
    /// Window the value must fall in
    pub threshold: Threshold,
    /// Whether the sub-check passed
    pub passed: bool,
}

impl Measurement {
    /// Measure `value` against `threshold`
    pub fn new(label: impl Into<String>, value: f64, unit: Unit, threshold: Threshold) -> Self {
        Self {
            label: label.into(),
            value,
            unit,
            threshold,
            passed: threshold.admits(value),
        }
    }
}

/// Outcome of a single rule
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationVerdict {
    /// Rule that produced the verdict
    pub rule: Rule,
    /// Presentation class
    pub severity: Severity,
    /// Whether every sub-check passed
    pub pass: bool,
    /// Headline
    pub title: String,
    /// Human-readable explanation with measured values and thresholds
    pub message: String,
    /// Structured sub-checks behind the message
    pub measurements: Vec<Measurement>,
}

impl ValidationVerdict {
    /// Build a verdict whose pass flag is the AND of its sub-checks
    pub fn from_measurements(
        rule: Rule,
        measurements: Vec<Measurement>,
        message: String,
    ) -> Self {
        let pass = measurements.iter().all(|m| m.passed);
        Self::with_pass(rule, pass, measurements, message)
    }

    /// Build a verdict with an explicit pass flag
    pub fn with_pass(
        rule: Rule,
        pass: bool,
        measurements: Vec<Measurement>,
        message: String,
    ) -> Self {
        let severity = if pass {
            Severity::Success
        } else {
            rule.failure_severity()
        };
        Self {
            rule,
            severity,
            pass,
            title: rule.title(pass).to_string(),
            message,
            measurements,
        }
    }
}

/// Where the pipeline stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// No block exceeded the contrast threshold
    NotFound,
    /// A region was found and all rules ran
    Complete,
}

/// Everything one validation run produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    /// Terminal state of the run
    pub outcome: Outcome,
    /// Detected region, if any
    pub region: Option<CandidateRegion>,
    /// Verdicts in reporting order
    pub verdicts: Vec<ValidationVerdict>,
    /// AND of every verdict's pass flag (false when nothing was detected)
    pub overall_pass: bool,
}

impl ValidationReport {
    /// Report for an image with no detectable barcode
    pub fn not_found() -> Self {
        let verdict = ValidationVerdict::with_pass(
            Rule::Detection,
            false,
            Vec::new(),
            "Could not detect a barcode in the PDF. Please ensure the PDF contains a visible ISBN barcode."
                .to_string(),
        );
        Self {
            outcome: Outcome::NotFound,
            region: None,
            verdicts: vec![verdict],
            overall_pass: false,
        }
    }

    /// Report for a detected region and its rule verdicts
    pub fn complete(region: CandidateRegion, verdicts: Vec<ValidationVerdict>) -> Self {
        let overall_pass = !verdicts.is_empty() && verdicts.iter().all(|v| v.pass);
        Self {
            outcome: Outcome::Complete,
            region: Some(region),
            verdicts,
            overall_pass,
        }
    }

    /// Verdicts that did not pass
    pub fn failures(&self) -> impl Iterator<Item = &ValidationVerdict> {
        self.verdicts.iter().filter(|v| !v.pass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_bounds() {
        assert!(Threshold::AtLeast { min: 1.0 }.admits(1.0));
        assert!(!Threshold::Below { max: 0.15 }.admits(0.15));
        assert!(Threshold::Inclusive { min: 0.8, max: 2.0 }.admits(2.0));
        assert!(!Threshold::Exclusive { min: 1.2, max: 2.0 }.admits(1.2));
        assert!(!Threshold::Exclusive { min: 1.2, max: 2.0 }.admits(2.0));
    }

    #[test]
    fn test_failure_severity_split() {
        assert_eq!(Rule::Size.failure_severity(), Severity::Error);
        assert_eq!(Rule::Scaling.failure_severity(), Severity::Error);
        assert_eq!(Rule::QuietZones.failure_severity(), Severity::Warning);
        assert_eq!(Rule::FormatPlausibility.failure_severity(), Severity::Warning);
        assert_eq!(Rule::AspectRatio.failure_severity(), Severity::Warning);
    }

    #[test]
    fn test_verdict_from_measurements() {
        let ok = Measurement::new("width", 1.5, Unit::Inches, Threshold::AtLeast { min: 1.02 });
        let bad = Measurement::new("height", 0.5, Unit::Inches, Threshold::AtLeast { min: 0.8 });
        let v = ValidationVerdict::from_measurements(Rule::Size, vec![ok, bad], String::new());
        assert!(!v.pass);
        assert_eq!(v.severity, Severity::Error);
        assert_eq!(v.title, "Barcode Size Issue");
    }

    #[test]
    fn test_not_found_report() {
        let report = ValidationReport::not_found();
        assert_eq!(report.outcome, Outcome::NotFound);
        assert!(!report.overall_pass);
        assert_eq!(report.verdicts.len(), 1);
        assert_eq!(report.verdicts[0].title, "No Barcode Detected");
        assert_eq!(report.verdicts[0].severity, Severity::Error);
    }

    #[test]
    fn test_serializes_snake_case() {
        let json = serde_json::to_string(&Severity::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
        let json = serde_json::to_string(&Rule::QuietZones).unwrap();
        assert_eq!(json, "\"quiet_zones\"");
    }
}
