//! Static rule tables for PII classification
//!
//! These tables are fixed at build time and compiled once on first use.

use crate::anonymization::models::ShapeKind;
use regex::Regex;
use std::sync::LazyLock;

/// Field names that are PII by name alone
pub const DIRECT_IDENTIFIER_FIELDS: &[&str] = &["upi_id"];

/// Field names that only count as PII when two or more appear together
pub const QUASI_IDENTIFIER_FIELDS: &[&str] = &["name", "email", "address", "ip_address", "device_id"];

/// Quasi-identifier that must also look like an email address to count
pub const EMAIL_FIELD: &str = "email";

/// Compiled shape rule gated on a field-name fragment
#[derive(Debug)]
pub struct ShapePattern {
    /// Shape this pattern detects
    pub kind: ShapeKind,
    /// Compiled, word-bounded regex
    pub regex: Regex,
}

impl ShapePattern {
    fn compile(kind: ShapeKind, pattern: &str) -> Self {
        let regex = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("invalid built-in {} pattern: {e}", kind.label()));
        Self { kind, regex }
    }

    /// True if `field` contains this pattern's fragment (case-sensitive substring)
    pub fn applies_to(&self, field: &str) -> bool {
        field.contains(self.kind.fragment())
    }

    /// True if `text` contains a word-bounded match of the shape
    pub fn matches(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Shape rules in evaluation order
pub static SHAPE_PATTERNS: LazyLock<Vec<ShapePattern>> = LazyLock::new(|| {
    vec![
        ShapePattern::compile(ShapeKind::NationalId, r"\b\d{12}\b"),
        ShapePattern::compile(ShapeKind::Phone, r"\b\d{10}\b"),
        ShapePattern::compile(ShapeKind::Passport, r"\b[A-Z][0-9]{7}\b"),
    ]
});

/// Email shape anchored at the start of the value (prefix match)
pub static EMAIL_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
        .unwrap_or_else(|e| panic!("invalid built-in email pattern: {e}"))
});

/// Returns true if the field name is a quasi-identifier
pub fn is_quasi_identifier(field: &str) -> bool {
    QUASI_IDENTIFIER_FIELDS.contains(&field)
}

/// Returns true if the field name is a direct identifier
pub fn is_direct_identifier(field: &str) -> bool {
    DIRECT_IDENTIFIER_FIELDS.contains(&field)
}

/// Returns true if the value begins with a valid email address
pub fn starts_with_email(text: &str) -> bool {
    EMAIL_PREFIX.is_match(text)
}
