//! Integration tests for field masking

use regex::Regex;
use scrubber::anonymization::anonymizer::{mask, MASK_CHAR};
use serde_json::json;
use test_case::test_case;

#[test_case("phone", json!("9876543210"), "98XXXXXX10" ; "phone")]
#[test_case("phone", json!(9876543210_u64), "98XXXXXX10" ; "numeric phone")]
#[test_case("phone", json!("+91 9876543210"), "[REDACTED_PHONE]" ; "phone with prefix")]
#[test_case("aadhar", json!("123456789012"), "XXXXXXXX9012" ; "aadhar")]
#[test_case("aadhar", json!("1234"), "[REDACTED_AADHAR]" ; "short aadhar")]
#[test_case("name", json!("Rahul Kumar"), "RXXXX KXXXX" ; "two word name")]
#[test_case("name", json!("Rahul Dev Kumar"), "RXXXX KXXXX" ; "middle name dropped")]
#[test_case("name", json!("Rahul"), "[REDACTED_NAME]" ; "single word name")]
#[test_case("email", json!("r@x.com"), "[REDACTED_EMAIL]" ; "email placeholder")]
#[test_case("upi_id", json!("rahul@upi"), "[REDACTED_UPI_ID]" ; "upi placeholder")]
#[test_case("home_phone", json!("9876543210"), "[REDACTED_HOME_PHONE]" ; "mask rules match exact field names")]
#[test_case("passport", json!("A1234567"), "[REDACTED_PASSPORT]" ; "passport placeholder")]
#[test_case("ip_address", json!(null), "[REDACTED_IP_ADDRESS]" ; "null value")]
fn test_mask(field: &str, value: serde_json::Value, expected: &str) {
    assert_eq!(mask(field, &value), expected);
}

#[test]
fn test_mask_counts_characters_not_bytes() {
    assert_eq!(mask("phone", &json!("९८७६५४३२१०")), "९८XXXXXX१०");
    assert_eq!(mask("name", &json!("Éva Łukasz")), "ÉXX ŁXXXXX");
}

#[test]
fn test_masks_never_reintroduce_shapes() {
    let ten_digits = Regex::new(r"\b\d{10}\b").unwrap();
    let twelve_digits = Regex::new(r"\b\d{12}\b").unwrap();

    for phone in ["9876543210", "0000000000", "1234567890"] {
        assert!(!ten_digits.is_match(&mask("phone", &json!(phone))));
    }
    for aadhar in ["123456789012", "999999999999"] {
        assert!(!twelve_digits.is_match(&mask("aadhar", &json!(aadhar))));
    }
}

#[test]
fn test_mask_char() {
    assert_eq!(MASK_CHAR, 'X');
    assert_eq!(
        mask("phone", &json!("9876543210"))
            .chars()
            .filter(|c| *c == MASK_CHAR)
            .count(),
        6
    );
}
