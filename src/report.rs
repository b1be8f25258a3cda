//! Presenting validation results
//!
//! The pipeline itself never prints. Callers hand it a [`ValidationReporter`]
//! to be notified of the finished report (or of a rejected input); closures
//! work as reporters. [`render_text`] produces the plain-text summary used by
//! the CLI.

use crate::error::ValidationError;
use crate::models::{Severity, ValidationReport};
use std::fmt::Write;
use tracing::{debug, info, warn};

/// Receives the outcome of a validation run
pub trait ValidationReporter {
    /// Called once with the finished report
    fn on_report(&mut self, report: &ValidationReport);

    /// Called instead of `on_report` when the input was rejected
    fn on_invalid_input(&mut self, _error: &ValidationError) {}
}

impl<F> ValidationReporter for F
where
    F: FnMut(&ValidationReport),
{
    fn on_report(&mut self, report: &ValidationReport) {
        self(report)
    }
}

/// Reporter that emits one tracing event per verdict
///
/// Failing rules are logged at `info`, passing ones at `debug`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl ValidationReporter for LogReporter {
    fn on_report(&mut self, report: &ValidationReport) {
        for verdict in &report.verdicts {
            match verdict.severity {
                Severity::Success => debug!(rule = ?verdict.rule, "{}", verdict.title),
                Severity::Warning | Severity::Error => {
                    info!(rule = ?verdict.rule, severity = %verdict.severity, "{}", verdict.title)
                }
            }
        }
        info!(overall_pass = report.overall_pass, "validation finished");
    }

    fn on_invalid_input(&mut self, error: &ValidationError) {
        warn!(%error, "validation refused");
    }
}

fn icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "[OK]",
        Severity::Warning => "[WARN]",
        Severity::Error => "[FAIL]",
    }
}

/// Plain-text rendering of a report
pub fn render_text(report: &ValidationReport) -> String {
    let mut out = String::new();
    let summary = if report.overall_pass {
        "VALIDATION PASSED"
    } else {
        "VALIDATION FAILED"
    };
    let _ = writeln!(out, "{summary}");

    if let Some(region) = &report.region {
        let _ = writeln!(
            out,
            "Region: x={} y={} {}x{} px @ {} dpi",
            region.x, region.y, region.width, region.height, region.pixels_per_inch
        );
    }

    for verdict in &report.verdicts {
        let _ = writeln!(out, "\n{} {}", icon(verdict.severity), verdict.title);
        for line in verdict.message.lines() {
            let _ = writeln!(out, "{line}");
        }
    }

    if report.overall_pass {
        let _ = writeln!(
            out,
            "\n{} Distribution Ready\nThis barcode meets all distribution requirements and should scan reliably across different retail environments.",
            icon(Severity::Success)
        );
    } else {
        let _ = writeln!(
            out,
            "\n{} Action Required\nPlease address the issues identified above before submitting for distribution. Non-compliant barcodes may be rejected by retailers.",
            icon(Severity::Error)
        );
    }

    out
}
