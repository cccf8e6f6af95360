//! Scan command implementation
//!
//! Classifies every record of an input file and prints the detection report.
//! Nothing is written besides the report.

use crate::cli::commands::load_or_exit_code;
use crate::core::sanitize::SanitizeCoordinator;
use crate::log_error_with_context;
use clap::Args;
use std::path::Path;

/// Arguments for the scan command
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Input CSV file
    pub input: String,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl ScanArgs {
    /// Execute the scan command
    pub fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        tracing::info!(input = %self.input, "Starting scan command");

        let config = match load_or_exit_code(config_path) {
            Ok(c) => c,
            Err(code) => return Ok(code),
        };

        let coordinator = SanitizeCoordinator::dry_run(config);
        let summary = match coordinator.run(Path::new(&self.input), None) {
            Ok(s) => s,
            Err(e) => {
                log_error_with_context!(&e, "Scan failed");
                eprintln!("{e}");
                return Ok(e.exit_code());
            }
        };

        if self.json {
            println!("{}", summary.report.format_json()?);
        } else {
            println!("{}", summary.report.format_console());
        }

        Ok(0)
    }
}
