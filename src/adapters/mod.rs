//! External data formats for Scrubber.
//!
//! - [`csv`] - Row-oriented CSV reader and writer
//!
//! Adapters isolate file formats from the redaction engine. The engine only
//! sees [`Record`](crate::domain::Record) values; the adapters own the column
//! layout, delimiter and quoting.
//!
//! ```rust,no_run
//! use scrubber::adapters::csv::RowReader;
//! use scrubber::config::InputConfig;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let rows = RowReader::from_path("input.csv", &InputConfig::default())?;
//! for row in rows {
//!     let row = row?;
//!     println!("{} -> {}", row.record_id, row.data);
//! }
//! # Ok(())
//! # }
//! ```

pub mod csv;
