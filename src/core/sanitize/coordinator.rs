//! Sanitize coordinator - main orchestrator for the batch run
//!
//! Reads input rows in order, decodes each embedded object, runs it through
//! the [`RedactionEngine`] and writes the fully redacted row before moving on
//! to the next one.

use crate::adapters::csv::{InputRow, RowReader, RowWriter};
use crate::anonymization::{RedactionEngine, ScanReport};
use crate::config::ScrubberConfig;
use crate::core::sanitize::decode::decode_record;
use crate::core::sanitize::summary::RunSummary;
use crate::domain::{Record, Result, ScrubberError};
use crate::{log_record_flagged, log_run_complete};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use std::time::Instant;

/// Sanitize coordinator
pub struct SanitizeCoordinator {
    config: ScrubberConfig,
    engine: RedactionEngine,
    dry_run: bool,
}

impl SanitizeCoordinator {
    /// Create a coordinator for a run that writes output
    ///
    /// The engine writes audit entries when `audit.enabled` is set.
    pub fn new(config: ScrubberConfig) -> Result<Self> {
        let engine = RedactionEngine::from_audit_config(&config.audit).map_err(|e| {
            ScrubberError::Configuration(format!("Failed to initialize audit log: {e}"))
        })?;

        Ok(Self {
            config,
            engine,
            dry_run: false,
        })
    }

    /// Create a coordinator that only classifies
    ///
    /// Dry runs never create the output file and never write audit entries.
    pub fn dry_run(config: ScrubberConfig) -> Self {
        Self {
            config,
            engine: RedactionEngine::new(),
            dry_run: true,
        }
    }

    /// Use a custom engine
    pub fn with_engine(mut self, engine: RedactionEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Whether this coordinator skips writing output
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Execute the run
    ///
    /// `output` overrides `output.path` from the configuration. The input is
    /// opened before the output is created, so a missing input never leaves an
    /// empty output file behind.
    ///
    /// # Errors
    ///
    /// Returns [`ScrubberError::InputNotFound`] if the input file does not
    /// exist, or an input/output error if a row cannot be read or written.
    /// Malformed embedded objects are not errors.
    pub fn run(&self, input: &Path, output: Option<&Path>) -> Result<RunSummary> {
        let start_time = Instant::now();

        tracing::info!(input = %input.display(), dry_run = self.dry_run, "Starting sanitize run");

        let rows = RowReader::from_path(input, &self.config.input)?;

        let mut summary = if self.dry_run {
            let mut summary = RunSummary::new();
            summary.report = self.process(rows, None::<&mut RowWriter<File>>)?;
            summary.dry_run = true;
            summary
        } else {
            let output_path = output.unwrap_or(self.config.output.path.as_path());
            let mut writer = RowWriter::create(output_path, &self.config.output)?;

            let mut summary = RunSummary::new();
            summary.report = self.process(rows, Some(&mut writer))?;
            summary.rows_written = writer.rows_written();
            writer.flush()?;
            summary.output_path = Some(output_path.to_path_buf());
            summary
        };

        summary = summary.with_duration(start_time.elapsed());

        log_run_complete!(
            summary.total_records(),
            summary.pii_records(),
            summary.duration
        );
        summary.log_summary();

        Ok(summary)
    }

    /// Process every row from `rows`, writing each redacted row to `writer`
    ///
    /// Rows are handled strictly in input order. Passing `None` for the
    /// writer classifies without producing output.
    pub fn process<R: Read, W: Write>(
        &self,
        rows: RowReader<R>,
        mut writer: Option<&mut RowWriter<W>>,
    ) -> Result<ScanReport> {
        let mut report = ScanReport::new();

        for row in rows {
            let row = row?;
            let record = self.decode_row(&row, &mut report);

            let redacted = self
                .engine
                .redact(row.record_id, record)
                .map_err(|e| ScrubberError::Io(format!("Audit log write failed: {e}")))?;

            if redacted.is_pii() {
                log_record_flagged!(redacted.record_id, redacted.classification.len());
            }

            report.add_record(&redacted);

            if let Some(writer) = writer.as_deref_mut() {
                writer.write_row(&redacted)?;
            }
        }

        Ok(report)
    }

    fn decode_row(&self, row: &InputRow, report: &mut ScanReport) -> Record {
        match decode_record(&row.data) {
            Ok(record) => record,
            Err(reason) => {
                tracing::warn!(
                    row = row.row_number,
                    record_id = %row.record_id,
                    reason = %reason,
                    "Embedded JSON could not be decoded, treating record as empty"
                );
                report.add_malformed(&row.record_id, &reason);
                Record::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "record_id,data_json\n\
        1,\"{\"\"phone\"\": \"\"9876543210\"\", \"\"city\"\": \"\"Pune\"\"}\"\n\
        2,\"{\"\"name\"\": \"\"Rahul Kumar\"\"}\"\n\
        3,not json\n";

    fn run_in_memory(coordinator: &SanitizeCoordinator) -> (ScanReport, String) {
        let rows = RowReader::from_reader(INPUT.as_bytes(), &coordinator.config.input).unwrap();
        let mut writer =
            RowWriter::from_writer(Vec::new(), &coordinator.config.output).unwrap();
        let report = coordinator.process(rows, Some(&mut writer)).unwrap();
        let output = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        (report, output)
    }

    #[test]
    fn test_process_writes_rows_in_order() {
        let coordinator = SanitizeCoordinator::new(ScrubberConfig::default()).unwrap();
        let (report, output) = run_in_memory(&coordinator);

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "record_id,redacted_data_json,is_pii");
        assert_eq!(
            lines[1],
            "1,\"{\"\"phone\"\":\"\"98XXXXXX10\"\",\"\"city\"\":\"\"Pune\"\"}\",true"
        );
        assert_eq!(lines[2], "2,\"{\"\"name\"\":\"\"Rahul Kumar\"\"}\",false");
        assert_eq!(lines[3], "3,{},false");
        assert_eq!(lines.len(), 4);

        assert_eq!(report.total_records, 3);
        assert_eq!(report.pii_records, 1);
        assert_eq!(report.malformed_records, 1);
    }

    #[test]
    fn test_process_without_writer() {
        let coordinator = SanitizeCoordinator::dry_run(ScrubberConfig::default());
        assert!(coordinator.is_dry_run());

        let rows = RowReader::from_reader(INPUT.as_bytes(), &coordinator.config.input).unwrap();
        let report = coordinator
            .process(rows, None::<&mut RowWriter<Vec<u8>>>)
            .unwrap();

        assert_eq!(report.total_records, 3);
        assert_eq!(report.detections_by_field.get("phone"), Some(&1));
    }
}
