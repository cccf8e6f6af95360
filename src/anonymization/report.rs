//! Scan reporting
//!
//! Aggregates classification results across a run: how many records carried
//! PII, which rules fired, which fields were redacted, and a handful of masked
//! samples. Original values never enter the report.

use crate::anonymization::models::RedactedRecord;
use crate::domain::{value_text, RecordId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const MAX_SAMPLES: usize = 20;
const SAMPLES_PER_RECORD: usize = 3;
const MAX_WARNINGS: usize = 20;

/// Scan report with PII detection statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    /// Total records processed (including malformed ones)
    pub total_records: usize,

    /// Records flagged as PII
    pub pii_records: usize,

    /// Records whose embedded object could not be decoded
    pub malformed_records: usize,

    /// Total fields redacted across all records
    pub total_fields_redacted: usize,

    /// Detections keyed by rule label
    pub detections_by_rule: BTreeMap<String, usize>,

    /// Detections keyed by field name
    pub detections_by_field: BTreeMap<String, usize>,

    /// Masked value samples
    pub samples: Vec<MaskSample>,

    /// First warnings raised during the run
    pub warnings: Vec<String>,

    /// Warnings not kept because the cap was reached
    pub warnings_dropped: usize,
}

/// A masked value, for eyeballing what the output will look like
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaskSample {
    /// Record the sample came from
    pub record_id: RecordId,
    /// Field name
    pub field: String,
    /// Rule that flagged the field
    pub rule: String,
    /// Masked replacement
    pub masked: String,
}

impl ScanReport {
    /// Create a new empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a processed record
    pub fn add_record(&mut self, redacted: &RedactedRecord) {
        self.total_records += 1;

        if !redacted.is_pii() {
            return;
        }

        self.pii_records += 1;
        for (index, (field, rule)) in redacted.classification.detections().enumerate() {
            self.total_fields_redacted += 1;
            *self.detections_by_rule.entry(rule.label()).or_insert(0) += 1;
            *self
                .detections_by_field
                .entry(field.to_string())
                .or_insert(0) += 1;

            if index < SAMPLES_PER_RECORD && self.samples.len() < MAX_SAMPLES {
                if let Some(value) = redacted.record.get(field) {
                    self.samples.push(MaskSample {
                        record_id: redacted.record_id.clone(),
                        field: field.to_string(),
                        rule: rule.label(),
                        masked: value_text(value).into_owned(),
                    });
                }
            }
        }
    }

    /// Count a record whose embedded object could not be decoded
    ///
    /// The record itself is still added via [`add_record`](Self::add_record)
    /// as an empty, non-PII record.
    pub fn add_malformed(&mut self, record_id: &RecordId, reason: &str) {
        self.malformed_records += 1;
        self.add_warning(format!("Record '{record_id}' could not be decoded: {reason}"));
    }

    /// Add a warning, keeping at most `MAX_WARNINGS` of them
    pub fn add_warning(&mut self, warning: String) {
        if self.warnings.len() < MAX_WARNINGS {
            self.warnings.push(warning);
        } else {
            self.warnings_dropped += 1;
        }
    }

    /// Records without PII
    pub fn clean_records(&self) -> usize {
        self.total_records - self.pii_records
    }

    /// Percentage of records flagged as PII
    pub fn pii_rate(&self) -> f64 {
        if self.total_records == 0 {
            return 0.0;
        }
        (self.pii_records as f64 / self.total_records as f64) * 100.0
    }

    /// Format report for console output
    pub fn format_console(&self) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push_str("                      PII SCAN REPORT                          \n");
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        output.push_str("📊 SUMMARY\n");
        output.push_str("───────────────────────────────────────────────────────────────\n");
        output.push_str(&format!(
            "  Total Records Scanned:  {}\n",
            self.total_records
        ));
        output.push_str(&format!(
            "  Records with PII:       {} ({:.2}%)\n",
            self.pii_records,
            self.pii_rate()
        ));
        output.push_str(&format!(
            "  Records without PII:    {}\n",
            self.clean_records()
        ));
        output.push_str(&format!(
            "  Malformed Records:      {}\n",
            self.malformed_records
        ));
        output.push_str(&format!(
            "  Fields Redacted:        {}\n",
            self.total_fields_redacted
        ));
        output.push('\n');

        if !self.detections_by_rule.is_empty() {
            output.push_str("🔍 DETECTIONS BY RULE\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            for (rule, count) in sorted_by_count(&self.detections_by_rule) {
                output.push_str(&format!("  {rule:30} {count:>5}\n"));
            }
            output.push('\n');
        }

        if !self.detections_by_field.is_empty() {
            output.push_str("🏷️  DETECTIONS BY FIELD\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            for (field, count) in sorted_by_count(&self.detections_by_field) {
                output.push_str(&format!("  {field:30} {count:>5}\n"));
            }
            output.push('\n');
        }

        if !self.samples.is_empty() {
            output.push_str("📝 SAMPLE MASKS\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            for sample in self.samples.iter().take(10) {
                output.push_str(&format!(
                    "  [{}] {} ({}) -> \"{}\"\n",
                    sample.record_id, sample.field, sample.rule, sample.masked
                ));
            }
            output.push('\n');
        }

        if !self.warnings.is_empty() {
            output.push_str("⚠️  WARNINGS\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            for warning in &self.warnings {
                output.push_str(&format!("  • {warning}\n"));
            }
            if self.warnings_dropped > 0 {
                output.push_str(&format!("  … and {} more\n", self.warnings_dropped));
            }
            output.push('\n');
        }

        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        output
    }

    /// Format report as JSON
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Entries sorted by count descending, then by key
fn sorted_by_count(counts: &BTreeMap<String, usize>) -> Vec<(&String, &usize)> {
    let mut entries: Vec<_> = counts.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    entries
}
