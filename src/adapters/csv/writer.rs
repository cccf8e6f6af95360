//! CSV output rows
//!
//! Writes one row per processed record: identifier, redacted JSON object and
//! PII flag.

use crate::anonymization::RedactedRecord;
use crate::config::OutputConfig;
use crate::domain::{Result, ScrubberError};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writer for redacted output rows
pub struct RowWriter<W: Write> {
    writer: csv::Writer<W>,
    rows_written: usize,
}

impl RowWriter<File> {
    /// Create (or truncate) the output file and write the header row
    pub fn create(path: impl AsRef<Path>, config: &OutputConfig) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| {
            ScrubberError::Output(format!("Failed to create {}: {}", path.display(), e))
        })?;
        Self::from_writer(file, config)
    }
}

impl<W: Write> RowWriter<W> {
    /// Wrap any writer and write the header row
    pub fn from_writer(sink: W, config: &OutputConfig) -> Result<Self> {
        let mut writer = csv::Writer::from_writer(sink);
        writer
            .write_record([&config.id_column, &config.data_column, &config.flag_column])
            .map_err(|e| ScrubberError::Output(format!("Failed to write header: {e}")))?;

        Ok(Self {
            writer,
            rows_written: 0,
        })
    }

    /// Write one fully redacted record
    pub fn write_row(&mut self, redacted: &RedactedRecord) -> Result<()> {
        let data = redacted.record.to_json_string()?;
        let flag = if redacted.is_pii() { "true" } else { "false" };

        self.writer
            .write_record([redacted.record_id.as_str(), data.as_str(), flag])
            .map_err(|e| {
                ScrubberError::Output(format!(
                    "Failed to write record '{}': {}",
                    redacted.record_id, e
                ))
            })?;
        self.rows_written += 1;
        Ok(())
    }

    /// Number of data rows written so far
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flush buffered rows
    pub fn flush(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| ScrubberError::Output(format!("Failed to flush output: {e}")))
    }

    /// Flush and return the underlying writer
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| ScrubberError::Output(format!("Failed to flush output: {}", e.error())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anonymization::Classification;
    use crate::domain::{Record, RecordId};
    use serde_json::json;

    #[test]
    fn test_writes_header_and_rows() {
        let mut writer = RowWriter::from_writer(Vec::new(), &OutputConfig::default()).unwrap();

        let record = Record::from_value(json!({"city": "Pune", "pin": 411001})).unwrap();
        let redacted = RedactedRecord::new(RecordId::new("1"), record, Classification::new());
        writer.write_row(&redacted).unwrap();
        assert_eq!(writer.rows_written(), 1);

        let output = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(
            output,
            "record_id,redacted_data_json,is_pii\n1,\"{\"\"city\"\":\"\"Pune\"\",\"\"pin\"\":411001}\",false\n"
        );
    }

    #[test]
    fn test_empty_record_row() {
        let mut writer = RowWriter::from_writer(Vec::new(), &OutputConfig::default()).unwrap();
        let redacted = RedactedRecord::new(RecordId::new("2"), Record::new(), Classification::new());
        writer.write_row(&redacted).unwrap();

        let output = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert!(output.ends_with("2,{},false\n"));
    }
}
