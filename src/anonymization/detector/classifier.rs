//! Rule-based record classifier

use super::patterns::{self, SHAPE_PATTERNS};
use super::RecordClassifier;
use crate::anonymization::models::{Classification, DetectionRule, ShapeKind};
use crate::domain::{value_text, Record};

/// Classifier applying the direct-identifier, shape and quasi-identifier rules
///
/// Rules run in a fixed order and the first rule to flag a field wins:
///
/// 1. Direct identifiers (`upi_id`) are flagged whatever their value.
/// 2. A field whose name contains a shape fragment (`aadhar`, `phone`,
///    `passport`) is flagged when its value contains that shape.
/// 3. When two or more quasi-identifiers (`name`, `email`, `address`,
///    `ip_address`, `device_id`) are present, all of them are flagged. An
///    `email` only counts if its value starts with an email address.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleClassifier;

impl RuleClassifier {
    /// Create a new rule classifier
    pub fn new() -> Self {
        Self
    }

    /// First shape whose fragment is in the field name and whose pattern matches
    fn shape_match(field: &str, text: &str) -> Option<ShapeKind> {
        SHAPE_PATTERNS
            .iter()
            .filter(|pattern| pattern.applies_to(field))
            .find(|pattern| pattern.matches(text))
            .map(|pattern| pattern.kind)
    }

    /// Whether a present field counts towards the quasi-identifier combination
    fn counts_as_quasi_identifier(record: &Record, field: &str) -> bool {
        if !patterns::is_quasi_identifier(field) {
            return false;
        }
        if field == patterns::EMAIL_FIELD {
            return record
                .text(field)
                .is_some_and(|text| patterns::starts_with_email(&text));
        }
        true
    }
}

impl RecordClassifier for RuleClassifier {
    fn classify(&self, record: &Record) -> Classification {
        let mut classification = Classification::new();

        for (field, value) in record.iter() {
            if patterns::is_direct_identifier(field) {
                classification.flag(field.as_str(), DetectionRule::DirectIdentifier);
                continue;
            }

            let text = value_text(value);
            if let Some(kind) = Self::shape_match(field, &text) {
                classification.flag(field.as_str(), DetectionRule::ShapeMatch(kind));
            }
        }

        let quasi_identifiers: Vec<&String> = record
            .field_names()
            .filter(|field| Self::counts_as_quasi_identifier(record, field))
            .collect();

        if quasi_identifiers.len() >= 2 {
            for field in quasi_identifiers {
                classification.flag(field.as_str(), DetectionRule::QuasiIdentifier);
            }
        }

        classification
    }
}
