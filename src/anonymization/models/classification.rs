//! Classification data models

use crate::domain::{Record, RecordId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Value shapes the classifier recognises, each gated on a field-name fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// 12-digit national identifier (Aadhaar style)
    NationalId,
    /// 10-digit phone number
    Phone,
    /// One uppercase letter followed by seven digits
    Passport,
}

impl ShapeKind {
    /// Field-name fragment that enables this shape check
    pub fn fragment(&self) -> &'static str {
        match self {
            Self::NationalId => "aadhar",
            Self::Phone => "phone",
            Self::Passport => "passport",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::NationalId => "NATIONAL_ID",
            Self::Phone => "PHONE",
            Self::Passport => "PASSPORT",
        }
    }
}

/// Rule that caused a field to be flagged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "rule", content = "shape", rename_all = "snake_case")]
pub enum DetectionRule {
    /// Field is a direct identifier by name alone (payment handle)
    DirectIdentifier,
    /// Field name carries a fragment and the value contains the matching shape
    ShapeMatch(ShapeKind),
    /// Field is one of two or more co-occurring quasi-identifiers
    QuasiIdentifier,
}

impl DetectionRule {
    /// Stable label used in reports and audit entries
    pub fn label(&self) -> String {
        match self {
            Self::DirectIdentifier => "DIRECT_IDENTIFIER".to_string(),
            Self::ShapeMatch(kind) => format!("SHAPE_{}", kind.label()),
            Self::QuasiIdentifier => "QUASI_IDENTIFIER".to_string(),
        }
    }
}

impl fmt::Display for DetectionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Per-record classification outcome
///
/// Holds the set of fields to redact, in the order they were first flagged,
/// along with the rule that flagged each one. A field is recorded once; later
/// rules that would flag it again are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    detections: IndexMap<String, DetectionRule>,
}

impl Classification {
    /// Create an empty (not PII) classification
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag a field, keeping the first rule if it was already flagged
    ///
    /// Returns true if the field was newly flagged.
    pub fn flag(&mut self, field: impl Into<String>, rule: DetectionRule) -> bool {
        let field = field.into();
        if self.detections.contains_key(&field) {
            return false;
        }
        self.detections.insert(field, rule);
        true
    }

    /// True iff at least one field is flagged
    pub fn is_pii(&self) -> bool {
        !self.detections.is_empty()
    }

    /// Fields to redact, in detection order
    pub fn fields_to_redact(&self) -> impl Iterator<Item = &str> {
        self.detections.keys().map(String::as_str)
    }

    /// Fields paired with the rule that flagged them
    pub fn detections(&self) -> impl Iterator<Item = (&str, DetectionRule)> {
        self.detections.iter().map(|(field, rule)| (field.as_str(), *rule))
    }

    /// Returns true if the field must be redacted
    pub fn contains(&self, field: &str) -> bool {
        self.detections.contains_key(field)
    }

    /// Rule that flagged the field, if any
    pub fn rule_for(&self, field: &str) -> Option<DetectionRule> {
        self.detections.get(field).copied()
    }

    /// Number of flagged fields
    pub fn len(&self) -> usize {
        self.detections.len()
    }

    /// True if nothing is flagged
    pub fn is_empty(&self) -> bool {
        self.detections.is_empty()
    }
}

/// Record after masking, with the classification that drove it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactedRecord {
    /// Identifier carried over from the input row
    pub record_id: RecordId,
    /// Record with every flagged field masked
    pub record: Record,
    /// Classification of the original record
    pub classification: Classification,
}

impl RedactedRecord {
    /// Bundle a masked record with its classification
    pub fn new(record_id: RecordId, record: Record, classification: Classification) -> Self {
        Self {
            record_id,
            record,
            classification,
        }
    }

    /// PII flag emitted alongside the record
    pub fn is_pii(&self) -> bool {
        self.classification.is_pii()
    }
}
