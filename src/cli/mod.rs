//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Scrubber using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Scrubber - PII detection and redaction for CSV record batches
#[derive(Parser, Debug)]
#[command(name = "scrubber")]
#[command(version, about, long_about = None)]
#[command(author = "Scrubber Contributors")]
pub struct Cli {
    /// Path to configuration file (defaults to ./scrubber.toml if present)
    #[arg(short, long, env = "SCRUBBER_CONFIG", global = true)]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "SCRUBBER_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Redact PII from every record of a CSV file
    Redact(commands::redact::RedactArgs),

    /// Report PII detections without writing output
    Scan(commands::scan::ScanArgs),

    /// Classify and mask a single inline JSON record
    Check(commands::check::CheckArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_redact() {
        let cli = Cli::parse_from(["scrubber", "redact", "input.csv"]);
        assert!(cli.config.is_none());
        match cli.command {
            Commands::Redact(args) => {
                assert_eq!(args.input, "input.csv");
                assert!(args.output.is_none());
                assert!(!args.dry_run);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_redact_with_output() {
        let cli = Cli::parse_from(["scrubber", "redact", "in.csv", "-o", "out.csv", "--dry-run"]);
        match cli.command {
            Commands::Redact(args) => {
                assert_eq!(args.output.as_deref(), Some("out.csv"));
                assert!(args.dry_run);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["scrubber", "--config", "custom.toml", "scan", "in.csv"]);
        assert_eq!(cli.config.as_deref(), Some("custom.toml"));
        assert!(matches!(cli.command, Commands::Scan(_)));
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["scrubber", "--log-level", "debug", "validate-config"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::parse_from(["scrubber", "check", r#"{"phone": "9876543210"}"#]);
        assert!(matches!(cli.command, Commands::Check(_)));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["scrubber", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["scrubber", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["scrubber"]).is_err());
    }
}
