// Scrubber - PII detection and redaction for CSV record batches
// Copyright (c) 2025 Scrubber Contributors
// Licensed under the MIT License

//! # Scrubber - PII detection and redaction
//!
//! Scrubber reads a CSV file whose rows carry a record identifier and a JSON
//! object of loosely structured key/value data, decides per record which
//! fields are personally identifiable, masks those fields, and writes a CSV
//! with the redacted object and a PII flag.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Batch orchestration (decode, redact, write, summarize)
//! - [`anonymization`] - Classifier, masker, audit log and scan report
//! - [`adapters`] - CSV reader and writer
//! - [`domain`] - Records, identifiers and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust
//! use scrubber::anonymization::RedactionEngine;
//! use scrubber::domain::{Record, RecordId};
//! use serde_json::json;
//!
//! # fn main() -> anyhow::Result<()> {
//! let engine = RedactionEngine::new();
//! let record = Record::from_value(json!({"phone": "9876543210", "city": "Pune"})).unwrap();
//!
//! let redacted = engine.redact(RecordId::new("1"), record)?;
//! assert!(redacted.is_pii());
//! assert_eq!(
//!     redacted.record.to_json_string()?,
//!     r#"{"phone":"98XXXXXX10","city":"Pune"}"#
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Detection Rules
//!
//! A field is flagged by the first rule that applies:
//!
//! 1. **Direct identifiers**: `upi_id` is always PII.
//! 2. **Shape matches**: fields whose name contains `aadhar`, `phone` or
//!    `passport` are PII when the value has the matching shape.
//! 3. **Quasi-identifiers**: `name`, `email`, `address`, `ip_address` and
//!    `device_id` are PII only when two or more of them appear together.
//!
//! ## Batch Runs
//!
//! ```rust,no_run
//! use scrubber::config::resolve_config;
//! use scrubber::core::sanitize::SanitizeCoordinator;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = resolve_config(None)?;
//! let coordinator = SanitizeCoordinator::new(config)?;
//! let summary = coordinator.run(Path::new("input.csv"), None)?;
//! println!("{} of {} records had PII", summary.pii_records(), summary.total_records());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod anonymization;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
