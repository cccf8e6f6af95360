//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::ScrubberConfig;
use crate::domain::errors::ScrubberError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Configuration file used when none is named explicitly
pub const DEFAULT_CONFIG_PATH: &str = "scrubber.toml";

static ENV_VAR_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .unwrap_or_else(|e| panic!("invalid env placeholder pattern: {e}"))
});

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into ScrubberConfig
/// 4. Applies environment variable overrides (SCRUBBER_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns a configuration error if the file is missing or unreadable, the
/// TOML is invalid, a referenced environment variable is unset, or
/// validation fails.
///
/// # Examples
///
/// ```no_run
/// use scrubber::config::loader::load_config;
///
/// let config = load_config("scrubber.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ScrubberConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ScrubberError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ScrubberError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    load_config_from_str(&contents)
}

/// Loads configuration from TOML text
pub fn load_config_from_str(contents: &str) -> Result<ScrubberConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: ScrubberConfig = toml::from_str(&contents)
        .map_err(|e| ScrubberError::Configuration(format!("Failed to parse TOML: {e}")))?;

    finalize(&mut config)?;
    Ok(config)
}

/// Resolves the configuration the CLI should run with
///
/// An explicitly named file must exist. Without one, `scrubber.toml` in the
/// working directory is used if present, and built-in defaults otherwise.
/// Environment overrides apply in every case.
pub fn resolve_config(explicit: Option<&str>) -> Result<ScrubberConfig> {
    match explicit {
        Some(path) => load_config(path),
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_PATH);
            if default_path.exists() {
                load_config(default_path)
            } else {
                tracing::debug!("No configuration file found, using defaults");
                let mut config = ScrubberConfig::default();
                finalize(&mut config)?;
                Ok(config)
            }
        }
    }
}

fn finalize(config: &mut ScrubberConfig) -> Result<()> {
    apply_env_overrides(config)?;

    config.validate().map_err(|e| {
        ScrubberError::Configuration(format!("Configuration validation failed: {e}"))
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in ENV_VAR_PLACEHOLDER.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ScrubberError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using SCRUBBER_* prefix
///
/// Environment variables follow the pattern: SCRUBBER_<SECTION>_<KEY>
/// For example: SCRUBBER_OUTPUT_PATH, SCRUBBER_INPUT_DATA_COLUMN
fn apply_env_overrides(config: &mut ScrubberConfig) -> Result<()> {
    if let Ok(val) = std::env::var("SCRUBBER_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("SCRUBBER_INPUT_ID_COLUMN") {
        config.input.id_column = val;
    }
    if let Ok(val) = std::env::var("SCRUBBER_INPUT_DATA_COLUMN") {
        config.input.data_column = val;
    }
    if let Ok(val) = std::env::var("SCRUBBER_INPUT_DELIMITER") {
        config.input.delimiter = val;
    }

    if let Ok(val) = std::env::var("SCRUBBER_OUTPUT_PATH") {
        config.output.path = PathBuf::from(val);
    }
    if let Ok(val) = std::env::var("SCRUBBER_OUTPUT_ID_COLUMN") {
        config.output.id_column = val;
    }
    if let Ok(val) = std::env::var("SCRUBBER_OUTPUT_DATA_COLUMN") {
        config.output.data_column = val;
    }
    if let Ok(val) = std::env::var("SCRUBBER_OUTPUT_FLAG_COLUMN") {
        config.output.flag_column = val;
    }

    config
        .audit
        .apply_env_overrides()
        .map_err(|e| ScrubberError::Configuration(format!("{e:#}")))?;

    if let Ok(val) = std::env::var("SCRUBBER_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("SCRUBBER_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("SCRUBBER_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("SCRUBBER_LOADER_TEST_VAR", "out.csv");
        let input = "path = \"${SCRUBBER_LOADER_TEST_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "path = \"out.csv\"\n");
        std::env::remove_var("SCRUBBER_LOADER_TEST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("SCRUBBER_LOADER_MISSING_VAR");
        let input = "path = \"${SCRUBBER_LOADER_MISSING_VAR}\"";
        let result = substitute_env_vars(input);
        assert!(result.is_err());
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        let input = "# path = \"${SCRUBBER_LOADER_COMMENTED_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("${SCRUBBER_LOADER_COMMENTED_VAR}"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent-scrubber.toml");
        assert!(matches!(result, Err(ScrubberError::Configuration(_))));
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[input]
id_column = "id"
data_column = "payload"

[output]
path = "clean.csv"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.input.id_column, "id");
        assert_eq!(config.input.data_column, "payload");
        assert_eq!(config.output.path, PathBuf::from("clean.csv"));
        assert_eq!(config.output.data_column, "redacted_data_json");
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let result = load_config_from_str("[input\nid_column = ");
        assert!(matches!(result, Err(ScrubberError::Configuration(_))));
    }
}
