//! PII classification module
//!
//! Provides the trait-based classification interface and the rule-based
//! implementation used by the engine.

pub mod classifier;
pub mod patterns;

use crate::anonymization::models::Classification;
use crate::domain::Record;

pub use classifier::RuleClassifier;

/// Trait for record classifiers
///
/// Implementations must be total: every record yields a classification,
/// never an error.
pub trait RecordClassifier: Send + Sync {
    /// Decide which fields of the record must be redacted
    fn classify(&self, record: &Record) -> Classification;
}

/// Classify a record with the built-in rules
///
/// # Examples
///
/// ```
/// use scrubber::anonymization::detector::classify;
/// use scrubber::domain::Record;
/// use serde_json::json;
///
/// let record = Record::from_value(json!({"phone": "9876543210"})).unwrap();
/// let result = classify(&record);
/// assert!(result.is_pii());
/// assert_eq!(result.fields_to_redact().collect::<Vec<_>>(), vec!["phone"]);
/// ```
pub fn classify(record: &Record) -> Classification {
    RuleClassifier.classify(record)
}
