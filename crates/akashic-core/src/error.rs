//! Core error types for akashic-core.
//!
//! Validation failures are local-input errors: the calculator rejects bad
//! data instead of clamping it, so callers must hand in sane values.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for akashic-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A category weight was negative or not a finite number
    #[error("invalid allocation: weight for '{category}' must be a non-negative number, got {weight}")]
    InvalidAllocation { category: String, weight: f64 },

    /// Radius or stroke width out of range
    #[error("invalid ring geometry: {field} must be a positive number, got {value}")]
    InvalidRingGeometry { field: &'static str, value: f64 },

    /// Reference capacity out of range
    #[error("invalid capacity: must be a positive number, got {0}")]
    InvalidCapacity(f64),

    /// Color string is not `#rgb` or `#rrggbb`
    #[error("invalid color for '{category}': {color}")]
    InvalidColor { category: String, color: String },

    /// Reference period string not understood
    #[error("invalid period '{0}': expected day, session:MINUTES or rolling:HOURS")]
    InvalidPeriod(String),

    /// Category id not present in the ordered category list
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// Invalid time range
    #[error("Invalid time range: end_time ({end}) must not be before start_time ({start})")]
    InvalidTimeRange {
        start: chrono::DateTime<chrono::Utc>,
        end: chrono::DateTime<chrono::Utc>,
    },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// Home/config directory could not be prepared
    #[error("Config directory unavailable: {0}")]
    DirUnavailable(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
