//! Masking module
//!
//! Turns the value of a flagged field into its redacted replacement.

pub mod redaction;

use serde_json::Value;

pub use redaction::{MaskRule, RuleMasker, MASK_CHAR};

/// Trait for masking implementations
///
/// Masking is total and deterministic: the same field name and value always
/// produce the same string.
pub trait Masker: Send + Sync {
    /// Mask a field value
    fn mask(&self, field: &str, value: &Value) -> String;
}

/// Mask a value with the built-in rules
///
/// # Examples
///
/// ```
/// use scrubber::anonymization::anonymizer::mask;
/// use serde_json::json;
///
/// assert_eq!(mask("phone", &json!("9876543210")), "98XXXXXX10");
/// assert_eq!(mask("upi_id", &json!("rahul@okbank")), "[REDACTED_UPI_ID]");
/// ```
pub fn mask(field: &str, value: &Value) -> String {
    RuleMasker.mask(field, value)
}
