//! Run summary and reporting
//!
//! This module defines the structure returned by a sanitize run.

use crate::anonymization::ScanReport;
use std::path::PathBuf;
use std::time::Duration;

/// Summary of a sanitize run
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Detection statistics gathered while processing
    pub report: ScanReport,

    /// Rows written to the output file
    pub rows_written: usize,

    /// Output destination, `None` for dry runs
    pub output_path: Option<PathBuf>,

    /// Whether the run skipped writing output
    pub dry_run: bool,

    /// Duration of the run
    pub duration: Duration,
}

impl RunSummary {
    /// Create a new empty run summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Total records processed
    pub fn total_records(&self) -> usize {
        self.report.total_records
    }

    /// Records flagged as PII
    pub fn pii_records(&self) -> usize {
        self.report.pii_records
    }

    /// Records whose embedded object could not be decoded
    pub fn malformed_records(&self) -> usize {
        self.report.malformed_records
    }

    /// Check if every record was decoded cleanly
    pub fn is_successful(&self) -> bool {
        self.report.malformed_records == 0
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            total_records = self.total_records(),
            pii_records = self.pii_records(),
            malformed_records = self.malformed_records(),
            fields_redacted = self.report.total_fields_redacted,
            rows_written = self.rows_written,
            duration_ms = self.duration.as_millis() as u64,
            dry_run = self.dry_run,
            "Sanitize completed"
        );

        if !self.is_successful() {
            tracing::warn!(
                malformed_records = self.malformed_records(),
                "Some records could not be decoded and were written as empty objects"
            );
        }
    }

    /// Format summary for console output
    pub fn format_console(&self) -> String {
        let mut output = String::new();

        output.push_str("📊 Redaction Summary\n");
        output.push_str("====================\n");
        output.push_str(&format!("Total records:      {}\n", self.total_records()));
        output.push_str(&format!("Records with PII:   {}\n", self.pii_records()));
        output.push_str(&format!("Clean records:      {}\n", self.report.clean_records()));
        output.push_str(&format!("Malformed records:  {}\n", self.malformed_records()));
        output.push_str(&format!(
            "Fields redacted:    {}\n",
            self.report.total_fields_redacted
        ));

        if !self.report.detections_by_field.is_empty() {
            output.push_str("\nRedacted fields:\n");
            for (field, count) in &self.report.detections_by_field {
                output.push_str(&format!("  {field:<20} {count}\n"));
            }
        }

        output.push_str(&format!(
            "\nDuration: {:.2}s\n",
            self.duration.as_secs_f64()
        ));

        if let Some(path) = &self.output_path {
            output.push_str(&format!("Output saved to {}\n", path.display()));
        }

        output
    }
}
