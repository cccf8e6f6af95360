//! Main redaction engine
//!
//! This module provides the [`RedactionEngine`] that runs the classifier over
//! a record, masks every flagged field, and optionally writes an audit entry.
//!
//! # Examples
//!
//! ```
//! use scrubber::anonymization::RedactionEngine;
//! use scrubber::domain::{Record, RecordId};
//! use serde_json::json;
//!
//! # fn example() -> anyhow::Result<()> {
//! let engine = RedactionEngine::new();
//! let record = Record::from_value(json!({
//!     "name": "Rahul Kumar",
//!     "email": "r@x.com",
//!     "city": "Pune"
//! })).unwrap();
//!
//! let result = engine.redact(RecordId::new("1"), record)?;
//! assert!(result.is_pii());
//! assert_eq!(
//!     result.record.to_json_string()?,
//!     r#"{"name":"RXXXX KXXXX","email":"[REDACTED_EMAIL]","city":"Pune"}"#
//! );
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use crate::anonymization::{
    anonymizer::{Masker, RuleMasker},
    audit::AuditLogger,
    config::AuditConfig,
    detector::{RecordClassifier, RuleClassifier},
    models::RedactedRecord,
};
use crate::domain::{Record, RecordId};
use anyhow::Result;
use serde_json::Value;
use std::sync::Arc;

/// Record-level redaction engine
///
/// Stateless across records: the classifier and masker only hold immutable
/// rule tables, so the engine can be shared behind an `Arc` if callers want
/// to fan records out.
pub struct RedactionEngine {
    classifier: Arc<dyn RecordClassifier>,
    masker: Arc<dyn Masker>,
    audit_logger: Option<AuditLogger>,
}

impl RedactionEngine {
    /// Create an engine with the built-in rules and no audit log
    pub fn new() -> Self {
        Self {
            classifier: Arc::new(RuleClassifier::new()),
            masker: Arc::new(RuleMasker::new()),
            audit_logger: None,
        }
    }

    /// Create an engine with the built-in rules and the configured audit log
    ///
    /// # Errors
    ///
    /// Returns an error if the audit log directory cannot be created.
    pub fn from_audit_config(audit: &AuditConfig) -> Result<Self> {
        let mut engine = Self::new();
        if audit.enabled {
            engine.audit_logger = Some(AuditLogger::new(
                audit.log_path.clone(),
                audit.json_format,
            )?);
        }
        Ok(engine)
    }

    /// Replace the classifier
    pub fn with_classifier(mut self, classifier: Arc<dyn RecordClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    /// Replace the masker
    pub fn with_masker(mut self, masker: Arc<dyn Masker>) -> Self {
        self.masker = masker;
        self
    }

    /// Classify a record and mask every flagged field
    ///
    /// Fields that are not flagged are left byte-identical and no field is
    /// added or removed. The record is fully masked before it is returned.
    ///
    /// # Errors
    ///
    /// Only fails if the audit log is enabled and cannot be written.
    pub fn redact(&self, record_id: RecordId, record: Record) -> Result<RedactedRecord> {
        let classification = self.classifier.classify(&record);

        if !classification.is_pii() {
            return Ok(RedactedRecord::new(record_id, record, classification));
        }

        let mut masked = record.clone();
        for field in classification.fields_to_redact() {
            if let Some(value) = record.get(field) {
                masked.replace(field, Value::String(self.masker.mask(field, value)));
            }
        }

        let result = RedactedRecord::new(record_id, masked, classification);

        tracing::debug!(
            record_id = %result.record_id,
            fields = ?result.classification.fields_to_redact().collect::<Vec<_>>(),
            "Record redacted"
        );

        if let Some(ref logger) = self.audit_logger {
            logger.log_redaction(&record, &result)?;
        }

        Ok(result)
    }

    /// Check if audit logging is enabled
    pub fn is_audited(&self) -> bool {
        self.audit_logger.is_some()
    }
}

impl Default for RedactionEngine {
    fn default() -> Self {
        Self::new()
    }
}
