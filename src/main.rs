// Scrubber - PII detection and redaction for CSV record batches
// Copyright (c) 2025 Scrubber Contributors
// Licensed under the MIT License

use clap::Parser;
use scrubber::cli::{Cli, Commands};
use scrubber::config::{resolve_config, LoggingConfig};
use scrubber::logging::init_logging;
use std::process;

fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Logging settings come from the configuration when it loads; commands
    // report configuration errors themselves after logging is up
    let (config_level, logging_config) = match resolve_config(cli.config.as_deref()) {
        Ok(config) => (Some(config.application.log_level), config.logging),
        Err(_) => (None, LoggingConfig::default()),
    };

    let log_level = cli
        .log_level
        .clone()
        .or(config_level)
        .unwrap_or_else(|| "info".to_string());

    let guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Scrubber - PII detection and redaction"
    );

    let exit_code = match execute_command(&cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5
        }
    };

    // Flush the file logger before exiting
    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    let config_path = cli.config.as_deref();
    match &cli.command {
        Commands::Redact(args) => args.execute(config_path),
        Commands::Scan(args) => args.execute(config_path),
        Commands::Check(args) => args.execute(),
        Commands::ValidateConfig(args) => args.execute(config_path),
        Commands::Init(args) => args.execute(),
    }
}
