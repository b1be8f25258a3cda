//! Error types for barcode validation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop a validation run before any verdict is produced.
///
/// Rule failures are not errors: they are reported as verdicts.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// No image was supplied to the pipeline
    #[error("no page image loaded; load a PDF page before validating")]
    MissingImage,

    /// Width or height is zero
    #[error("invalid image dimensions {width}x{height}")]
    InvalidDimensions {
        /// Supplied width in pixels
        width: u32,
        /// Supplied height in pixels
        height: u32,
    },

    /// Pixel buffer does not hold width * height RGBA pixels
    #[error("pixel buffer length mismatch: expected {expected} bytes, got {actual}")]
    BufferLength {
        /// Required byte count
        expected: usize,
        /// Supplied byte count
        actual: usize,
    },

    /// A configuration value is out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reading a configuration file failed
    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A configuration file is not valid JSON for the expected shape
    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        /// File that could not be parsed
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// The page image could not be decoded
    #[error("failed to decode image: {0}")]
    Image(#[from] image::ImageError),
}

/// Alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ValidationError>;
