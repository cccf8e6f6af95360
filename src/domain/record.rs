//! Record model
//!
//! A [`Record`] is one decoded key/value object from the input dataset. Field
//! order is preserved from the source so that re-encoded output lines up with
//! the input.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::fmt;

/// Canonical text form of a field value
///
/// Strings are used as-is. Every other JSON value is rendered the way
/// `serde_json` prints it (`9876543210`, `true`, `null`, `[1,2]`), so numbers,
/// booleans and nested values can be pattern-checked like text.
pub fn value_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}

/// Opaque record identifier carried through from the input row
///
/// Unlike the field values, the identifier is never inspected. An absent
/// identifier is represented by an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Creates a new record identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Ordered mapping from field name to value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Creates an empty record
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Wraps an already decoded JSON object
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Builds a record from a JSON value, returning `None` unless it is an object
    ///
    /// # Examples
    ///
    /// ```
    /// use scrubber::domain::Record;
    /// use serde_json::json;
    ///
    /// let record = Record::from_value(json!({"phone": "9876543210"})).unwrap();
    /// assert_eq!(record.len(), 1);
    /// assert!(Record::from_value(json!([1, 2, 3])).is_none());
    /// ```
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Returns the raw value of a field
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Returns the canonical text of a field
    pub fn text(&self, field: &str) -> Option<Cow<'_, str>> {
        self.0.get(field).map(value_text)
    }

    /// Returns true if the record has the field
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Iterates over fields in source order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Iterates over field names in source order
    pub fn field_names(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the record has no fields
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Overwrites an existing field, keeping its position
    ///
    /// Returns false (and leaves the record untouched) if the field is absent;
    /// redaction never adds fields.
    pub fn replace(&mut self, field: &str, value: Value) -> bool {
        match self.0.get_mut(field) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Encodes the record as a compact JSON object string
    pub fn to_json_string(&self) -> crate::domain::Result<String> {
        Ok(serde_json::to_string(&self.0)?)
    }

    /// Consumes self and returns the inner map
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
