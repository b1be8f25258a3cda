//! Pixel to physical unit conversion

/// Convert a pixel distance to inches at the given resolution
///
/// No rounding; use [`format_inches`] for display.
#[inline]
pub fn pixels_to_inches(pixels: f64, dpi: f64) -> f64 {
    pixels / dpi
}

/// Two-decimal inch string, e.g. `1.33"`
pub fn format_inches(inches: f64) -> String {
    format!("{:.2}\"", inches)
}
