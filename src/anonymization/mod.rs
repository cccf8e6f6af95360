//! PII detection and masking
//!
//! This module holds the record-level engine: the classifier that decides
//! which fields of a record are PII, and the masker that turns each flagged
//! value into its redacted form.
//!
//! # Architecture
//!
//! - **Detection**: name-gated shape rules, direct identifiers and
//!   quasi-identifier combinations ([`detector`])
//! - **Masking**: ordered, field-specific mask rules with a placeholder
//!   fallback ([`anonymizer`])
//! - **Audit**: optional log of redacted fields with hashed values ([`audit`])
//! - **Reporting**: run-level statistics and masked samples ([`report`])
//!
//! # Usage
//!
//! ```rust
//! use scrubber::anonymization::{detector::classify, anonymizer::mask};
//! use scrubber::domain::Record;
//! use serde_json::json;
//!
//! let record = Record::from_value(json!({"phone": "9876543210"})).unwrap();
//! let classification = classify(&record);
//! for field in classification.fields_to_redact() {
//!     let masked = mask(field, record.get(field).unwrap());
//!     assert_eq!(masked, "98XXXXXX10");
//! }
//! ```

pub mod anonymizer;
pub mod audit;
pub mod config;
pub mod detector;
pub mod engine;
pub mod models;
pub mod report;

pub use config::AuditConfig;
pub use engine::RedactionEngine;
pub use models::{Classification, DetectionRule, RedactedRecord, ShapeKind};
pub use report::ScanReport;
