//! Configuration schema types
//!
//! Every section has defaults, so an empty file (or no file at all) yields a
//! working configuration.

use crate::anonymization::config::AuditConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main Scrubber configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrubberConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Input CSV layout
    #[serde(default)]
    pub input: InputConfig,

    /// Output CSV layout and destination
    #[serde(default)]
    pub output: OutputConfig,

    /// Redaction audit log
    #[serde(default)]
    pub audit: AuditConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ScrubberConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.input.validate()?;
        self.output.validate()?;
        self.audit.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Input CSV layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Column holding the record identifier
    #[serde(default = "default_id_column")]
    pub id_column: String,

    /// Column holding the embedded JSON object
    #[serde(default = "default_input_data_column")]
    pub data_column: String,

    /// Single-byte field delimiter
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            id_column: default_id_column(),
            data_column: default_input_data_column(),
            delimiter: default_delimiter(),
        }
    }
}

impl InputConfig {
    fn validate(&self) -> Result<(), String> {
        if self.id_column.trim().is_empty() {
            return Err("input.id_column cannot be empty".to_string());
        }
        if self.data_column.trim().is_empty() {
            return Err("input.data_column cannot be empty".to_string());
        }
        if self.id_column == self.data_column {
            return Err("input.id_column and input.data_column must differ".to_string());
        }
        self.delimiter_byte()?;
        Ok(())
    }

    /// Delimiter as the byte the CSV reader expects
    pub fn delimiter_byte(&self) -> Result<u8, String> {
        match self.delimiter.as_bytes() {
            [byte] if byte.is_ascii() => Ok(*byte),
            _ => Err(format!(
                "input.delimiter must be a single ASCII character, got '{}'",
                self.delimiter
            )),
        }
    }
}

/// Output CSV layout and destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output file path
    #[serde(default = "default_output_path")]
    pub path: PathBuf,

    /// Column for the record identifier
    #[serde(default = "default_id_column")]
    pub id_column: String,

    /// Column for the redacted JSON object
    #[serde(default = "default_output_data_column")]
    pub data_column: String,

    /// Column for the PII flag
    #[serde(default = "default_flag_column")]
    pub flag_column: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            id_column: default_id_column(),
            data_column: default_output_data_column(),
            flag_column: default_flag_column(),
        }
    }
}

impl OutputConfig {
    fn validate(&self) -> Result<(), String> {
        if self.path.as_os_str().is_empty() {
            return Err("output.path cannot be empty".to_string());
        }
        let columns = [&self.id_column, &self.data_column, &self.flag_column];
        if columns.iter().any(|c| c.trim().is_empty()) {
            return Err("output column names cannot be empty".to_string());
        }
        if self.id_column == self.data_column
            || self.id_column == self.flag_column
            || self.data_column == self.flag_column
        {
            return Err("output column names must be distinct".to_string());
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }
        Ok(())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_id_column() -> String {
    "record_id".to_string()
}

fn default_input_data_column() -> String {
    "data_json".to_string()
}

fn default_output_data_column() -> String {
    "redacted_data_json".to_string()
}

fn default_flag_column() -> String {
    "is_pii".to_string()
}

fn default_delimiter() -> String {
    ",".to_string()
}

fn default_output_path() -> PathBuf {
    PathBuf::from("redacted_output.csv")
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
