//! Audit logging module
//!
//! Provides structured audit logging for redaction operations.

pub mod logger;

pub use logger::AuditLogger;
