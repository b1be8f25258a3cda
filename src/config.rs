//! Print standards and detector tuning
//!
//! Both tables have compiled defaults matching the EAN-13 / ISBN guidance the
//! checks approximate. They can be overridden from JSON files; missing fields
//! fall back to the defaults.

use crate::error::{Result, ValidationError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// EAN-13 print standards, in inches unless noted
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StandardsConfig {
    /// Minimum printed width
    pub min_width: f64,
    /// Minimum printed height
    pub min_height: f64,
    /// Smallest accepted magnification (0.8 = 80%)
    pub min_magnification: f64,
    /// Largest accepted magnification (2.0 = 200%)
    pub max_magnification: f64,
    /// Left quiet zone, 9X where X = 0.04in
    pub left_quiet_zone: f64,
    /// Right quiet zone, 7X where X = 0.04in
    pub right_quiet_zone: f64,
    /// Top and bottom quiet zone
    pub vertical_quiet_zone: f64,
    /// Nominal (100%) symbol width
    pub nominal_width: f64,
    /// Nominal (100%) symbol height
    pub nominal_height: f64,
    /// Assumed print resolution in pixels per inch
    pub dpi: f64,
    /// Exclusive lower bound of the width/height ratio accepted as EAN-13 shaped
    pub format_ratio_min: f64,
    /// Exclusive upper bound of the width/height ratio accepted as EAN-13 shaped
    pub format_ratio_max: f64,
}

impl Default for StandardsConfig {
    fn default() -> Self {
        Self {
            min_width: 1.02,
            min_height: 0.8,
            min_magnification: 0.8,
            max_magnification: 2.0,
            left_quiet_zone: 0.36,
            right_quiet_zone: 0.28,
            vertical_quiet_zone: 0.05,
            nominal_width: 1.469,
            nominal_height: 1.02,
            dpi: 300.0,
            format_ratio_min: 1.2,
            format_ratio_max: 2.0,
        }
    }
}

impl StandardsConfig {
    /// Nominal width / height ratio of the symbol
    pub fn nominal_ratio(&self) -> f64 {
        self.nominal_width / self.nominal_height
    }

    /// Load overrides from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config: Self = read_json(path.as_ref())?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the unit conversions meaningless
    pub fn validate(&self) -> Result<()> {
        if !(self.dpi > 0.0) {
            return Err(ValidationError::InvalidConfig(format!(
                "dpi must be positive, got {}",
                self.dpi
            )));
        }
        if !(self.nominal_width > 0.0 && self.nominal_height > 0.0) {
            return Err(ValidationError::InvalidConfig(format!(
                "nominal size must be positive, got {}x{}",
                self.nominal_width, self.nominal_height
            )));
        }
        if self.min_magnification > self.max_magnification {
            return Err(ValidationError::InvalidConfig(format!(
                "magnification range is empty: {} > {}",
                self.min_magnification, self.max_magnification
            )));
        }
        Ok(())
    }
}

/// Tuning for the contrast-based region detector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Side length of a sampling block in pixels
    pub block_size: u32,
    /// A block qualifies when its contrast is strictly above this
    pub contrast_threshold: u8,
    /// Pixels added to the left of the winning block (and to its width)
    pub expand_x: u32,
    /// Pixels added above the winning block (and to its height)
    pub expand_y: u32,
    /// Upper bound on region width in pixels
    pub max_region_width: u32,
    /// Upper bound on region height in pixels
    pub max_region_height: u32,
    /// Maximum relative aspect ratio deviation from nominal (0.15 = 15%)
    pub max_aspect_deviation: f64,
    /// Also clamp the region's right/bottom edge to the image
    pub clamp_to_image: bool,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            block_size: 50,
            contrast_threshold: 80,
            expand_x: 100,
            expand_y: 50,
            max_region_width: 400,
            max_region_height: 200,
            max_aspect_deviation: 0.15,
            clamp_to_image: false,
        }
    }
}

impl DetectionConfig {
    /// Load overrides from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config: Self = read_json(path.as_ref())?;
        config.validate()?;
        Ok(config)
    }

    /// Reject a zero block size or zero region bounds
    pub fn validate(&self) -> Result<()> {
        if self.block_size == 0 {
            return Err(ValidationError::InvalidConfig(
                "block_size must be at least 1".to_string(),
            ));
        }
        if !(self.max_aspect_deviation >= 0.0) {
            return Err(ValidationError::InvalidConfig(format!(
                "max_aspect_deviation must not be negative, got {}",
                self.max_aspect_deviation
            )));
        }
        if self.max_region_width == 0 || self.max_region_height == 0 {
            return Err(ValidationError::InvalidConfig(format!(
                "region bounds must be positive, got {}x{}",
                self.max_region_width, self.max_region_height
            )));
        }
        Ok(())
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|source| ValidationError::ConfigIo {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ValidationError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_standards() {
        let s = StandardsConfig::default();
        assert_eq!(s.dpi, 300.0);
        assert!((s.nominal_ratio() - 1.440_196).abs() < 1e-5);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_default_detection() {
        let d = DetectionConfig::default();
        assert_eq!(d.block_size, 50);
        assert_eq!(d.contrast_threshold, 80);
        assert_eq!(d.max_aspect_deviation, 0.15);
        assert!(!d.clamp_to_image);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let s: StandardsConfig = serde_json::from_str(r#"{"dpi": 600.0}"#).unwrap();
        assert_eq!(s.dpi, 600.0);
        assert_eq!(s.min_width, 1.02);

        let d: DetectionConfig = serde_json::from_str(r#"{"block_size": 25}"#).unwrap();
        assert_eq!(d.block_size, 25);
        assert_eq!(d.max_region_width, 400);
    }

    #[test]
    fn test_rejects_bad_values() {
        let s = StandardsConfig {
            dpi: 0.0,
            ..StandardsConfig::default()
        };
        assert!(matches!(s.validate(), Err(ValidationError::InvalidConfig(_))));

        let d = DetectionConfig {
            block_size: 0,
            ..DetectionConfig::default()
        };
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = StandardsConfig::from_json_file("/nonexistent/standards.json").unwrap_err();
        assert!(matches!(err, ValidationError::ConfigIo { .. }));
    }
}
