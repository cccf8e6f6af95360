//! Domain models and types for Scrubber.
//!
//! The domain layer provides:
//! - **Records** ([`Record`], [`RecordId`]) and the canonical text form of
//!   field values ([`value_text`])
//! - **Error types** ([`ScrubberError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible I/O operations return [`Result<T, ScrubberError>`]:
//!
//! ```rust
//! use scrubber::domain::{Record, Result};
//! use serde_json::json;
//!
//! fn encode() -> Result<String> {
//!     let record = Record::from_value(json!({"city": "Pune"})).unwrap_or_default();
//!     record.to_json_string()
//! }
//! ```

pub mod errors;
pub mod record;
pub mod result;

pub use errors::ScrubberError;
pub use record::{value_text, Record, RecordId};
pub use result::Result;
