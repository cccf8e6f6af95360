//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use crate::config::DEFAULT_CONFIG_PATH;
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Scrubber configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} to match your CSV layout", self.output);
                println!("  2. Validate configuration: scrubber validate-config");
                println!("  3. Preview detections: scrubber scan input.csv");
                println!("  4. Run: scrubber redact input.csv");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }

    /// Generate the sample configuration
    fn generate_config() -> String {
        r#"# Scrubber Configuration File
# PII detection and redaction for CSV record batches
#
# Every setting is optional. Any value can be overridden with an environment
# variable named SCRUBBER_<SECTION>_<KEY>, e.g. SCRUBBER_OUTPUT_PATH.

[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

[input]
# Column holding the record identifier
id_column = "record_id"

# Column holding one JSON object per row
data_column = "data_json"

# Single-character field delimiter
delimiter = ","

[output]
# Output file, overridden by `scrubber redact -o`
path = "redacted_output.csv"

id_column = "record_id"
data_column = "redacted_data_json"
flag_column = "is_pii"

[audit]
# Record every redacted field with a SHA-256 hash of its original value
enabled = false
log_path = "./audit/redaction.log"

# JSON lines (true) or plain text (false)
json_format = true

[logging]
# JSON file logging in addition to console output
local_enabled = false
local_path = "./logs"

# daily | hourly | never
local_rotation = "daily"
"#
        .to_string()
    }
}
