//! Utility functions for image measurement
//!
//! - Brightness (unweighted RGB mean, statistics)
//! - Units (pixel to inch conversion and display)

pub mod brightness;
pub mod units;
