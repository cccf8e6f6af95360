//! Core business logic for Scrubber.
//!
//! # Modules
//!
//! - [`sanitize`] - Batch orchestration: decode, classify, mask, write
//!
//! # Sanitize Workflow
//!
//! 1. **Open input**: fail with exit code 3 if the file is missing
//! 2. **Decode**: parse each embedded object, falling back to the empty record
//! 3. **Redact**: classify the record and mask flagged fields
//! 4. **Write**: emit the fully redacted row before reading the next one
//! 5. **Report**: return a [`sanitize::RunSummary`]
//!
//! # Example
//!
//! ```rust,no_run
//! use scrubber::config::ScrubberConfig;
//! use scrubber::core::sanitize::SanitizeCoordinator;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let coordinator = SanitizeCoordinator::new(ScrubberConfig::default())?;
//! let summary = coordinator.run(Path::new("input.csv"), None)?;
//!
//! println!("Total: {}", summary.total_records());
//! println!("With PII: {}", summary.pii_records());
//! # Ok(())
//! # }
//! ```

pub mod sanitize;
