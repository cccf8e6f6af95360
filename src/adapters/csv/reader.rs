//! CSV input rows
//!
//! Reads a header-led CSV file and yields one [`InputRow`] per data row,
//! carrying the record identifier and the raw embedded JSON text.

use crate::config::InputConfig;
use crate::domain::{RecordId, Result, ScrubberError};
use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Embedded object text used when a row has no data cell
const EMPTY_OBJECT: &str = "{}";

/// One raw input row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRow {
    /// 1-based data row number (header excluded)
    pub row_number: usize,
    /// Record identifier, empty if the column or cell is missing
    pub record_id: RecordId,
    /// Raw embedded JSON text, `{}` if the column or cell is missing
    pub data: String,
}

/// Streaming reader over input rows
pub struct RowReader<R: Read> {
    reader: csv::Reader<R>,
    id_index: Option<usize>,
    data_index: Option<usize>,
    record: StringRecord,
    row_number: usize,
}

impl RowReader<File> {
    /// Open an input file
    ///
    /// # Errors
    ///
    /// Returns [`ScrubberError::InputNotFound`] if nothing exists at `path`,
    /// or an input error if it cannot be opened or its header row cannot be
    /// read.
    pub fn from_path(path: impl AsRef<Path>, config: &InputConfig) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ScrubberError::InputNotFound(path.to_path_buf()));
        }

        let file = File::open(path).map_err(|e| {
            ScrubberError::Input(format!("Failed to open {}: {}", path.display(), e))
        })?;
        Self::from_reader(file, config)
    }
}

impl<R: Read> RowReader<R> {
    /// Wrap any reader producing CSV text
    pub fn from_reader(source: R, config: &InputConfig) -> Result<Self> {
        let delimiter = config
            .delimiter_byte()
            .map_err(ScrubberError::Configuration)?;

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(source);

        let headers = reader.headers()?.clone();
        let id_index = headers.iter().position(|h| h == config.id_column);
        let data_index = headers.iter().position(|h| h == config.data_column);

        if id_index.is_none() {
            tracing::warn!(
                column = %config.id_column,
                "Record identifier column not found, identifiers will be empty"
            );
        }
        if data_index.is_none() {
            tracing::warn!(
                column = %config.data_column,
                "Data column not found, every record will be empty"
            );
        }

        Ok(Self {
            reader,
            id_index,
            data_index,
            record: StringRecord::new(),
            row_number: 0,
        })
    }

    fn cell(&self, index: Option<usize>) -> Option<&str> {
        index.and_then(|i| self.record.get(i))
    }
}

impl<R: Read> Iterator for RowReader<R> {
    type Item = Result<InputRow>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.record) {
            Ok(false) => None,
            Ok(true) => {
                self.row_number += 1;
                Some(Ok(InputRow {
                    row_number: self.row_number,
                    record_id: RecordId::new(self.cell(self.id_index).unwrap_or_default()),
                    data: self
                        .cell(self.data_index)
                        .unwrap_or(EMPTY_OBJECT)
                        .to_string(),
                }))
            }
            Err(e) => Some(Err(ScrubberError::Input(format!(
                "Failed to read row {}: {}",
                self.row_number + 1,
                e
            )))),
        }
    }
}
