//! Result type alias for Scrubber
//!
//! This module provides a convenient Result type alias that uses
//! [`ScrubberError`] as the error type.

use super::errors::ScrubberError;

/// Result type alias for Scrubber operations
///
/// # Examples
///
/// ```
/// use scrubber::domain::result::Result;
/// use scrubber::domain::errors::ScrubberError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(ScrubberError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ScrubberError>;
