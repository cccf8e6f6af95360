//! CSV input and output
//!
//! The input file carries a record identifier column and a column holding one
//! JSON object per row. The output mirrors it with the redacted object and a
//! PII flag.

pub mod reader;
pub mod writer;

pub use reader::{InputRow, RowReader};
pub use writer::RowWriter;
