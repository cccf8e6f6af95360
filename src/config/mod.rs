//! Configuration management for Scrubber.
//!
//! Scrubber reads an optional TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for every setting
//! - `SCRUBBER_<SECTION>_<KEY>` environment overrides
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use scrubber::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("scrubber.toml")?;
//! println!("Output: {}", config.output.path.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [input]
//! id_column = "record_id"
//! data_column = "data_json"
//!
//! [output]
//! path = "${EXPORT_DIR}/redacted_output.csv"
//!
//! [audit]
//! enabled = true
//! log_path = "./audit/redaction.log"
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_from_str, resolve_config, DEFAULT_CONFIG_PATH};
pub use schema::{ApplicationConfig, InputConfig, LoggingConfig, OutputConfig, ScrubberConfig};
