//! Audit logger for redaction operations

use crate::anonymization::models::RedactedRecord;
use crate::domain::{value_text, Record};
use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Audit log entry
#[derive(Debug, Serialize)]
struct AuditLogEntry {
    timestamp: String,
    record_id: String,
    fields_redacted: usize,
    detections: Vec<AuditDetection>,
}

/// Audit detection entry (with hashed PII)
#[derive(Debug, Serialize)]
struct AuditDetection {
    field: String,
    rule: String,
    /// SHA-256 hash of original value (never log plaintext PII)
    value_hash: String,
}

/// Audit logger for redacted records
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
}

impl AuditLogger {
    /// Create a new audit logger, creating the parent directory if needed
    pub fn new(log_path: PathBuf, json_format: bool) -> Result<Self> {
        if let Some(parent) = log_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create audit log directory: {}", parent.display())
                })?;
            }
        }

        Ok(Self {
            log_path,
            json_format,
        })
    }

    /// Log a redacted record
    ///
    /// `original` is the record before masking; only hashes of its flagged
    /// values are written. Records that are not PII produce no entry.
    pub fn log_redaction(&self, original: &Record, redacted: &RedactedRecord) -> Result<()> {
        if !redacted.is_pii() {
            return Ok(());
        }

        let detections = redacted
            .classification
            .detections()
            .map(|(field, rule)| AuditDetection {
                field: field.to_string(),
                rule: rule.label(),
                value_hash: original
                    .get(field)
                    .map(|value| hash_pii_value(&value_text(value)))
                    .unwrap_or_default(),
            })
            .collect::<Vec<_>>();

        let entry = AuditLogEntry {
            timestamp: Utc::now().to_rfc3339(),
            record_id: redacted.record_id.to_string(),
            fields_redacted: detections.len(),
            detections,
        };

        self.write_entry(&entry)
    }

    /// Path of the audit log file
    pub fn log_path(&self) -> &PathBuf {
        &self.log_path
    }

    /// Write an audit entry to the log file
    fn write_entry(&self, entry: &AuditLogEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("Failed to open audit log: {}", self.log_path.display()))?;

        if self.json_format {
            let json_line =
                serde_json::to_string(entry).context("Failed to serialize audit entry")?;
            writeln!(file, "{json_line}").context("Failed to write audit entry")?;
        } else {
            let fields = entry
                .detections
                .iter()
                .map(|d| format!("{}={}", d.field, d.rule))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(
                file,
                "[{}] Record: {} | Fields: {} | Redacted: {}",
                entry.timestamp, entry.record_id, entry.fields_redacted, fields
            )
            .context("Failed to write audit entry")?;
        }

        Ok(())
    }
}

/// Hash a PII value using SHA-256
fn hash_pii_value(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let result = hasher.finalize();
    format!("{result:x}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anonymization::models::{Classification, DetectionRule, ShapeKind};
    use crate::domain::RecordId;
    use serde_json::json;
    use tempfile::tempdir;

    fn phone_record() -> (Record, RedactedRecord) {
        let original = Record::from_value(json!({"phone": "9876543210", "city": "Pune"})).unwrap();
        let mut masked = original.clone();
        masked.replace("phone", json!("98XXXXXX10"));
        let mut classification = Classification::new();
        classification.flag("phone", DetectionRule::ShapeMatch(ShapeKind::Phone));
        (
            original,
            RedactedRecord::new(RecordId::new("rec-1"), masked, classification),
        )
    }

    #[test]
    fn test_hash_pii_value() {
        let hash1 = hash_pii_value("9876543210");
        let hash2 = hash_pii_value("9876543210");
        let hash3 = hash_pii_value("9876543211");

        assert_eq!(hash1, hash2);
        assert_ne!(hash1, hash3);
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn test_log_redaction_json() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("nested").join("audit.log");
        let logger = AuditLogger::new(log_path.clone(), true).unwrap();

        let (original, redacted) = phone_record();
        logger.log_redaction(&original, &redacted).unwrap();

        let content = std::fs::read_to_string(&log_path).unwrap();
        let entry: serde_json::Value = serde_json::from_str(content.trim()).unwrap();
        assert_eq!(entry["record_id"], "rec-1");
        assert_eq!(entry["fields_redacted"], 1);
        assert_eq!(entry["detections"][0]["field"], "phone");
        assert_eq!(entry["detections"][0]["rule"], "SHAPE_PHONE");
        assert!(!content.contains("9876543210"));
    }

    #[test]
    fn test_log_redaction_plain_text() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("audit.log");
        let logger = AuditLogger::new(log_path.clone(), false).unwrap();

        let (original, redacted) = phone_record();
        logger.log_redaction(&original, &redacted).unwrap();
        logger.log_redaction(&original, &redacted).unwrap();

        let content = std::fs::read_to_string(&log_path).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.contains("Record: rec-1 | Fields: 1 | Redacted: phone=SHAPE_PHONE"));
    }

    #[test]
    fn test_clean_record_not_logged() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("audit.log");
        let logger = AuditLogger::new(log_path.clone(), true).unwrap();

        let record = Record::from_value(json!({"city": "Pune"})).unwrap();
        let redacted = RedactedRecord::new(RecordId::new("rec-2"), record.clone(), Classification::new());
        logger.log_redaction(&record, &redacted).unwrap();

        assert!(!log_path.exists());
    }
}
