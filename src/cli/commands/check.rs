//! Check command implementation
//!
//! Runs a single inline JSON record through the classifier and masker and
//! prints what would be written for it.

use crate::anonymization::RedactionEngine;
use crate::core::sanitize::decode_record;
use crate::domain::RecordId;
use clap::Args;

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// JSON object to classify, e.g. '{"phone": "9876543210"}'
    pub record: String,

    /// Print only the redacted JSON object
    #[arg(long)]
    pub quiet: bool,
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self) -> anyhow::Result<i32> {
        let record = match decode_record(&self.record) {
            Ok(r) => r,
            Err(reason) => {
                eprintln!("❌ Not a JSON object: {reason}");
                return Ok(5);
            }
        };

        let engine = RedactionEngine::new();
        let redacted = engine.redact(RecordId::new("inline"), record)?;
        let output = redacted.record.to_json_string()?;

        if self.quiet {
            println!("{output}");
            return Ok(0);
        }

        println!("PII: {}", redacted.is_pii());
        for (field, rule) in redacted.classification.detections() {
            println!("  {field:<20} {rule}");
        }
        println!();
        println!("{output}");

        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_valid_record() {
        let args = CheckArgs {
            record: r#"{"name": "Rahul Kumar", "email": "r@x.com"}"#.to_string(),
            quiet: true,
        };
        assert_eq!(args.execute().unwrap(), 0);
    }

    #[test]
    fn test_check_rejects_non_object() {
        let args = CheckArgs {
            record: "[1, 2]".to_string(),
            quiet: false,
        };
        assert_eq!(args.execute().unwrap(), 5);
    }
}
