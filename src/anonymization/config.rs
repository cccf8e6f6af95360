//! Redaction audit configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Audit logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Enable audit logging
    #[serde(default)]
    pub enabled: bool,

    /// Audit log file path
    #[serde(default = "default_audit_log_path")]
    pub log_path: PathBuf,

    /// Use JSON lines for audit logs (plain text otherwise)
    #[serde(default = "default_audit_json_format")]
    pub json_format: bool,
}

fn default_audit_log_path() -> PathBuf {
    PathBuf::from("./audit/redaction.log")
}

fn default_audit_json_format() -> bool {
    true
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_path: default_audit_log_path(),
            json_format: default_audit_json_format(),
        }
    }
}

impl AuditConfig {
    /// Validate audit configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.enabled && self.log_path.as_os_str().is_empty() {
            return Err("audit.log_path cannot be empty when audit is enabled".to_string());
        }
        if self.log_path.is_dir() {
            return Err(format!(
                "audit.log_path must be a file, got directory: {}",
                self.log_path.display()
            ));
        }
        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("SCRUBBER_AUDIT_ENABLED") {
            self.enabled = val
                .parse()
                .context("Invalid SCRUBBER_AUDIT_ENABLED value")?;
        }

        if let Ok(val) = std::env::var("SCRUBBER_AUDIT_LOG_PATH") {
            self.log_path = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("SCRUBBER_AUDIT_JSON_FORMAT") {
            self.json_format = val
                .parse()
                .context("Invalid SCRUBBER_AUDIT_JSON_FORMAT value")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AuditConfig::default();
        assert!(!config.enabled);
        assert!(config.json_format);
        assert_eq!(config.log_path, PathBuf::from("./audit/redaction.log"));
    }

    #[test]
    fn test_config_validation() {
        assert!(AuditConfig::default().validate().is_ok());

        let config = AuditConfig {
            enabled: true,
            log_path: PathBuf::new(),
            json_format: true,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_directory_log_path_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = AuditConfig {
            enabled: true,
            log_path: dir.path().to_path_buf(),
            json_format: false,
        };
        assert!(config.validate().is_err());
    }
}
