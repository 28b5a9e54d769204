//! Core error types for benchload-core.
//!
//! Business-rule violations found by the capacity validator are returned as
//! data and never appear here. This hierarchy covers the faults a caller is
//! expected to prevent: malformed input and configuration problems.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Core error type for benchload-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Malformed input handed to the engine
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
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

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration tree
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Could not locate the configuration directory
    #[error("Failed to access data directory: {0}")]
    DataDir(String),
}

/// Precondition faults on engine input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Weekly hours on an engagement or candidate are unusable
    #[error("Invalid hours per week for '{id}': {hours}")]
    InvalidHours { id: String, hours: f64 },

    /// Member baseline capacity is negative or not finite
    #[error("Invalid working hours per week: {0}")]
    InvalidWorkingHours(f64),

    /// A stored interval ends before it starts
    #[error("Invalid time range for '{id}': end ({end}) is before start ({start})")]
    InvalidTimeRange {
        id: String,
        start: NaiveDate,
        end: NaiveDate,
    },

    /// A query window ends before it starts
    #[error("Invalid window: end ({end}) is before start ({start})")]
    InvalidWindow { start: NaiveDate, end: NaiveDate },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
