//! Redact command implementation
//!
//! This module implements the `redact` command, the batch transform from an
//! input CSV to a redacted output CSV.

use crate::cli::commands::load_or_exit_code;
use crate::cli::commands::scan::ScanArgs;
use crate::core::sanitize::SanitizeCoordinator;
use crate::log_error_with_context;
use clap::Args;
use std::path::Path;

/// Arguments for the redact command
#[derive(Args, Debug)]
pub struct RedactArgs {
    /// Input CSV file
    pub input: String,

    /// Output CSV file (overrides output.path from the configuration)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Same as `scan`: classify every record and print the report without
    /// writing output or audit entries
    #[arg(long)]
    pub dry_run: bool,
}

impl RedactArgs {
    /// Execute the redact command
    pub fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        tracing::info!(input = %self.input, dry_run = self.dry_run, "Starting redact command");

        if self.dry_run {
            println!("🔍 DRY RUN MODE - No output will be written");
            println!();
            let scan = ScanArgs {
                input: self.input.clone(),
                json: false,
            };
            return scan.execute(config_path);
        }

        let config = match load_or_exit_code(config_path) {
            Ok(c) => c,
            Err(code) => return Ok(code),
        };

        let coordinator = match SanitizeCoordinator::new(config) {
            Ok(c) => c,
            Err(e) => {
                log_error_with_context!(&e, "Failed to initialize redaction");
                eprintln!("Failed to initialize redaction: {e}");
                return Ok(e.exit_code());
            }
        };

        let output = self.output.as_deref().map(Path::new);
        let summary = match coordinator.run(Path::new(&self.input), output) {
            Ok(s) => s,
            Err(e) => {
                log_error_with_context!(&e, "Redaction failed");
                eprintln!("{e}");
                return Ok(e.exit_code());
            }
        };

        println!();
        print!("{}", summary.format_console());
        println!();

        if summary.is_successful() {
            println!("✅ Redaction completed successfully!");
        } else {
            println!(
                "⚠️  Redaction completed, {} record(s) could not be decoded and were written as empty objects",
                summary.malformed_records()
            );
        }

        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_input_returns_exit_code_3() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("out.csv");

        let args = RedactArgs {
            input: temp_dir.path().join("missing.csv").display().to_string(),
            output: Some(output.display().to_string()),
            dry_run: false,
        };

        let config_path = temp_dir.path().join("scrubber.toml");
        std::fs::write(&config_path, "").unwrap();

        let code = args.execute(config_path.to_str()).unwrap();
        assert_eq!(code, 3);
        assert!(!output.exists());
    }

    #[test]
    fn test_dry_run_writes_no_output() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("input.csv");
        std::fs::write(&input, "record_id,data_json\n1,\"{\"\"phone\"\": \"\"9876543210\"\"}\"\n")
            .unwrap();
        let output = temp_dir.path().join("out.csv");
        let config_path = temp_dir.path().join("scrubber.toml");
        std::fs::write(&config_path, "").unwrap();

        let args = RedactArgs {
            input: input.display().to_string(),
            output: Some(output.display().to_string()),
            dry_run: true,
        };

        assert_eq!(args.execute(config_path.to_str()).unwrap(), 0);
        assert!(!output.exists());
    }

    #[test]
    fn test_missing_config_returns_exit_code_2() {
        let args = RedactArgs {
            input: "input.csv".to_string(),
            output: None,
            dry_run: true,
        };

        let code = args.execute(Some("does/not/exist.toml")).unwrap();
        assert_eq!(code, 2);
    }
}
