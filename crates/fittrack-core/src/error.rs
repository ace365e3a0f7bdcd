//! Core error types for fittrack-core.
//!
//! The store and the timer are total and never produce these. They cover the
//! fallible edges around them: configuration files and JSON/TOML payloads.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for fittrack-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Payload file could not be read
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config directory could not be resolved or created
    #[error("Cannot prepare config directory {path}: {source}")]
    DirUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Dot-path key does not name a config field
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
