//! Integration tests for configuration loading and validation
//!
//! Tests that modify environment variables hold `ENV_MUTEX` to avoid
//! interference between tests.

use scrubber::config::{load_config, load_config_from_str, ScrubberConfig};
use scrubber::domain::ScrubberError;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("SCRUBBER_APPLICATION_LOG_LEVEL");
    std::env::remove_var("SCRUBBER_INPUT_DATA_COLUMN");
    std::env::remove_var("SCRUBBER_OUTPUT_PATH");
    std::env::remove_var("SCRUBBER_AUDIT_ENABLED");
    std::env::remove_var("TEST_SCRUBBER_EXPORT_DIR");
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
[application]
log_level = "debug"

[input]
id_column = "id"
data_column = "payload"
delimiter = ";"

[output]
path = "/tmp/scrubbed.csv"
id_column = "id"
data_column = "payload_redacted"
flag_column = "has_pii"

[audit]
enabled = true
log_path = "/tmp/scrubber-audit.log"
json_format = false

[logging]
local_enabled = false
local_path = "/tmp/scrubber-logs"
local_rotation = "hourly"
"#,
    );

    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.input.id_column, "id");
    assert_eq!(config.input.data_column, "payload");
    assert_eq!(config.input.delimiter_byte(), Ok(b';'));
    assert_eq!(config.output.path, PathBuf::from("/tmp/scrubbed.csv"));
    assert_eq!(config.output.flag_column, "has_pii");
    assert!(config.audit.enabled);
    assert!(!config.audit.json_format);
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_empty_config_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let config = load_config_from_str("").unwrap();
    assert_eq!(config, ScrubberConfig::default());
    assert_eq!(config.input.id_column, "record_id");
    assert_eq!(config.input.data_column, "data_json");
    assert_eq!(config.output.path, PathBuf::from("redacted_output.csv"));
    assert_eq!(config.output.data_column, "redacted_data_json");
    assert_eq!(config.output.flag_column, "is_pii");
    assert!(!config.audit.enabled);
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("TEST_SCRUBBER_EXPORT_DIR", "/data/exports");

    let config = load_config_from_str(
        r#"
# path = "${NOT_SET_BUT_COMMENTED}"
[output]
path = "${TEST_SCRUBBER_EXPORT_DIR}/redacted.csv"
"#,
    )
    .unwrap();

    assert_eq!(config.output.path, PathBuf::from("/data/exports/redacted.csv"));
    cleanup_env_vars();
}

#[test]
fn test_missing_env_var_is_configuration_error() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let result = load_config_from_str("[output]\npath = \"${TEST_SCRUBBER_EXPORT_DIR}/x.csv\"\n");
    match result {
        Err(err @ ScrubberError::Configuration(_)) => {
            assert_eq!(err.exit_code(), 2);
            assert!(err.to_string().contains("TEST_SCRUBBER_EXPORT_DIR"));
        }
        other => panic!("expected configuration error, got {other:?}"),
    }
}

#[test]
fn test_env_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("SCRUBBER_APPLICATION_LOG_LEVEL", "warn");
    std::env::set_var("SCRUBBER_INPUT_DATA_COLUMN", "json");
    std::env::set_var("SCRUBBER_OUTPUT_PATH", "override.csv");
    std::env::set_var("SCRUBBER_AUDIT_ENABLED", "true");

    let config = load_config_from_str("[output]\npath = \"file.csv\"\n").unwrap();

    assert_eq!(config.application.log_level, "warn");
    assert_eq!(config.input.data_column, "json");
    assert_eq!(config.output.path, PathBuf::from("override.csv"));
    assert!(config.audit.enabled);

    cleanup_env_vars();
}

#[test]
fn test_invalid_env_override_fails_validation() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("SCRUBBER_APPLICATION_LOG_LEVEL", "verbose");

    let result = load_config_from_str("");
    assert!(matches!(result, Err(ScrubberError::Configuration(_))));

    cleanup_env_vars();
}

#[test]
fn test_invalid_values_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let cases = [
        "[application]\nlog_level = \"loud\"\n",
        "[input]\ndelimiter = \"\"\n",
        "[input]\nid_column = \"x\"\ndata_column = \"x\"\n",
        "[logging]\nlocal_rotation = \"weekly\"\n",
        "not = [valid toml",
    ];

    for contents in cases {
        let result = load_config_from_str(contents);
        assert!(
            matches!(result, Err(ScrubberError::Configuration(_))),
            "expected failure for {contents:?}"
        );
    }
}

#[test]
fn test_missing_file_is_configuration_error() {
    let result = load_config("/nonexistent/scrubber.toml");
    assert!(matches!(result, Err(ScrubberError::Configuration(_))));
}
