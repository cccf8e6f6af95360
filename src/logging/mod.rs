//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Configurable log levels (`--log-level`, `RUST_LOG`)
//! - Console output on stderr
//! - JSON file logging with rotation
//!
//! Field values are never logged; only field names, record identifiers and
//! counts.
//!
//! # Example
//!
//! ```no_run
//! use scrubber::logging::init_logging;
//! use scrubber::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log a record that was flagged as PII
///
/// # Example
///
/// ```no_run
/// use scrubber::log_record_flagged;
///
/// log_record_flagged!("rec-17", 2);
/// ```
#[macro_export]
macro_rules! log_record_flagged {
    ($record_id:expr, $field_count:expr) => {
        tracing::info!(
            record_id = %$record_id,
            fields = $field_count,
            "Record contains PII"
        );
    };
}

/// Log the completion of a run
///
/// # Example
///
/// ```no_run
/// use scrubber::log_run_complete;
/// use std::time::Duration;
///
/// log_run_complete!(1000, 42, Duration::from_secs(2));
/// ```
#[macro_export]
macro_rules! log_run_complete {
    ($total:expr, $pii:expr, $duration:expr) => {
        tracing::info!(
            total_records = $total,
            pii_records = $pii,
            duration_ms = $duration.as_millis() as u64,
            "Run completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use scrubber::log_error_with_context;
/// use scrubber::domain::ScrubberError;
///
/// let error = ScrubberError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
