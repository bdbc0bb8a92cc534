//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Enum-like variable (strategy, scoring) had an unknown value.
    #[error("invalid value for {name}: {reason}")]
    InvalidChoice { name: &'static str, reason: String },

    /// Numeric variable could not be parsed.
    #[error("failed to parse {name}='{value}' as a number")]
    InvalidNumber { name: &'static str, value: String },

    /// Threshold outside `[0, 1]`.
    #[error("threshold must be between 0.0 and 1.0, got {value}")]
    ThresholdOutOfRange { value: f32 },

    /// Temperature outside `[0, 2]`.
    #[error("temperature must be between 0.0 and 2.0, got {value}")]
    TemperatureOutOfRange { value: f64 },

    /// A value that must be positive was zero.
    #[error("{name} must be greater than zero")]
    ZeroValue { name: &'static str },

    /// Specified path does not exist on the filesystem.
    #[error("path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    /// Path exists but is not a file (when a file was expected).
    #[error("path is not a file: {path}")]
    NotAFile { path: PathBuf },

    /// Path exists but is not a directory (when a directory was expected).
    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },
}
