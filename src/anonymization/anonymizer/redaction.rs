//! Rule-based masking
//!
//! Masking rules are tried in order; the first rule whose field name matches
//! and whose guard accepts the value produces the mask. Anything left over
//! gets the generic `[REDACTED_<FIELD>]` placeholder.

use super::Masker;
use crate::domain::value_text;
use serde_json::Value;

/// Character used to hide masked positions
pub const MASK_CHAR: char = 'X';

/// Field-specific masking rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskRule {
    /// Exactly 10 characters: keep the first two and last two
    Phone,
    /// Exactly 12 characters: keep the last four
    NationalId,
    /// Two or more words: keep the initials of the first and last words
    PersonName,
}

/// Rules in evaluation order
pub const MASK_RULES: &[MaskRule] = &[MaskRule::Phone, MaskRule::NationalId, MaskRule::PersonName];

impl MaskRule {
    /// Field name this rule applies to (exact match)
    pub fn field(&self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::NationalId => "aadhar",
            Self::PersonName => "name",
        }
    }

    /// Apply the rule, or `None` if the value fails its guard
    pub fn apply(&self, text: &str) -> Option<String> {
        match self {
            Self::Phone => {
                let chars: Vec<char> = text.chars().collect();
                if chars.len() != 10 {
                    return None;
                }
                let mut masked: String = chars[..2].iter().collect();
                masked.push_str(&mask_run(6));
                masked.extend(&chars[8..]);
                Some(masked)
            }
            Self::NationalId => {
                let chars: Vec<char> = text.chars().collect();
                if chars.len() != 12 {
                    return None;
                }
                let mut masked = mask_run(8);
                masked.extend(&chars[8..]);
                Some(masked)
            }
            Self::PersonName => {
                let parts: Vec<&str> = text.split_whitespace().collect();
                match parts.as_slice() {
                    [first, .., last] => Some(format!("{} {}", mask_word(first), mask_word(last))),
                    _ => None,
                }
            }
        }
    }
}

/// Generic placeholder embedding the upper-cased field name
pub fn placeholder(field: &str) -> String {
    format!("[REDACTED_{}]", field.to_uppercase())
}

fn mask_run(len: usize) -> String {
    std::iter::repeat(MASK_CHAR).take(len).collect()
}

/// First character followed by one mask character per remaining character
fn mask_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(initial) => {
            let mut masked = String::from(initial);
            masked.push_str(&mask_run(chars.count()));
            masked
        }
        None => String::new(),
    }
}

/// Masker applying [`MASK_RULES`] with the placeholder fallback
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleMasker;

impl RuleMasker {
    /// Create a new rule masker
    pub fn new() -> Self {
        Self
    }

    /// Mask an already normalized value
    pub fn mask_text(&self, field: &str, text: &str) -> String {
        MASK_RULES
            .iter()
            .filter(|rule| rule.field() == field)
            .find_map(|rule| rule.apply(text))
            .unwrap_or_else(|| placeholder(field))
    }
}

impl Masker for RuleMasker {
    fn mask(&self, field: &str, value: &Value) -> String {
        self.mask_text(field, &value_text(value))
    }
}
