//! Domain error types
//!
//! This module defines the error hierarchy for Scrubber. Errors are
//! domain-specific and don't expose third-party types.
//!
//! The classifier and masker never fail, so every variant here belongs to
//! the surrounding I/O and configuration layers.

use std::path::PathBuf;
use thiserror::Error;

/// Main Scrubber error type
#[derive(Debug, Error)]
pub enum ScrubberError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The input dataset does not exist
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Errors while reading input rows
    #[error("Input error: {0}")]
    Input(String),

    /// Errors while writing output rows
    #[error("Output error: {0}")]
    Output(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl ScrubberError {
    /// Process exit code the CLI reports for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Configuration(_) => 2,
            Self::InputNotFound(_) => 3,
            _ => 5,
        }
    }
}

impl From<std::io::Error> for ScrubberError {
    fn from(err: std::io::Error) -> Self {
        ScrubberError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ScrubberError {
    fn from(err: serde_json::Error) -> Self {
        ScrubberError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for ScrubberError {
    fn from(err: toml::de::Error) -> Self {
        ScrubberError::Configuration(format!("TOML parse error: {err}"))
    }
}

impl From<csv::Error> for ScrubberError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            return ScrubberError::Io(err.to_string());
        }
        ScrubberError::Input(err.to_string())
    }
}
