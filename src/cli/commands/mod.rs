//! CLI command implementations
//!
//! Every command returns the process exit code: 0 success, 2 configuration
//! error, 3 missing input, 5 fatal error.

pub mod check;
pub mod init;
pub mod redact;
pub mod scan;
pub mod validate;

use crate::config::{resolve_config, ScrubberConfig};

/// Load and validate the configuration, printing the failure if any
///
/// On failure returns the configuration error exit code.
pub(crate) fn load_or_exit_code(config_path: Option<&str>) -> Result<ScrubberConfig, i32> {
    resolve_config(config_path).map_err(|e| {
        tracing::error!(error = %e, "Failed to load configuration");
        eprintln!("{e}");
        e.exit_code()
    })
}
