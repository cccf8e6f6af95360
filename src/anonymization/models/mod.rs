//! Data models shared by the classifier, masker and reporting

pub mod classification;

pub use classification::{Classification, DetectionRule, RedactedRecord, ShapeKind};
