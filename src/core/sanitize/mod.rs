//! Batch sanitize workflow
//!
//! Drives a CSV file through decoding, classification and masking, and
//! produces a [`RunSummary`].

pub mod coordinator;
pub mod decode;
pub mod summary;

pub use coordinator::SanitizeCoordinator;
pub use decode::decode_record;
pub use summary::RunSummary;
