//! Embedded JSON decoding
//!
//! Input cells normally hold a JSON object. Some upstream exports double the
//! quotes a second time, so a cell that fails to parse is retried once with
//! `""` collapsed to `"`.

use crate::domain::Record;
use serde_json::Value;
use std::borrow::Cow;

/// Decode an embedded JSON cell into a record
///
/// A blank cell decodes as the empty record.
///
/// # Errors
///
/// Returns a short reason when the text is not JSON (in either form) or when
/// the decoded value is not an object.
pub fn decode_record(raw: &str) -> Result<Record, String> {
    if raw.trim().is_empty() {
        return Ok(Record::new());
    }

    let value = parse_json(raw)?;
    let kind = value_kind(&value);
    Record::from_value(value).ok_or_else(|| format!("expected a JSON object, found {kind}"))
}

fn parse_json(raw: &str) -> Result<Value, String> {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => Ok(value),
        Err(first) => {
            let collapsed = collapse_doubled_quotes(raw);
            if matches!(collapsed, Cow::Borrowed(_)) {
                return Err(first.to_string());
            }
            serde_json::from_str::<Value>(&collapsed).map_err(|_| first.to_string())
        }
    }
}

fn collapse_doubled_quotes(raw: &str) -> Cow<'_, str> {
    if raw.contains("\"\"") {
        Cow::Owned(raw.replace("\"\"", "\""))
    } else {
        Cow::Borrowed(raw)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_plain_object() {
        let record = decode_record(r#"{"phone": "9876543210", "age": 31}"#).unwrap();
        assert_eq!(record.len(), 2);
        assert_eq!(record.text("age").unwrap(), "31");
    }

    #[test]
    fn test_decodes_double_escaped_object() {
        let record = decode_record(r#"{""name"": ""Rahul Kumar""}"#).unwrap();
        assert_eq!(record.text("name").unwrap(), "Rahul Kumar");
    }

    #[test]
    fn test_blank_cell_is_empty_record() {
        assert!(decode_record("").unwrap().is_empty());
        assert!(decode_record("   ").unwrap().is_empty());
    }

    #[test]
    fn test_empty_string_value_survives_plain_parse() {
        // `""` is legitimate inside valid JSON and must not be collapsed
        let record = decode_record(r#"{"note": ""}"#).unwrap();
        assert_eq!(record.text("note").unwrap(), "");
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(decode_record("not json at all").is_err());
        assert!(decode_record(r#"{"phone": "98765"#).is_err());
    }

    #[test]
    fn test_rejects_non_object() {
        let err = decode_record("[1, 2, 3]").unwrap_err();
        assert!(err.contains("array"));
        assert!(decode_record("42").is_err());
        assert!(decode_record("null").is_err());
    }

    #[test]
    fn test_key_order_preserved() {
        let record = decode_record(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        assert_eq!(record.field_names().collect::<Vec<_>>(), vec!["z", "a", "m"]);
    }
}
