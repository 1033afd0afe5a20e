//! Result type alias for Harvest
//!
//! This module provides a convenient Result type alias that uses
//! HarvestError as the error type.

use super::errors::HarvestError;

/// Result type alias for Harvest operations
///
/// This is a convenience type alias that uses `HarvestError` as the error
/// type. Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use harvest::domain::result::Result;
/// use harvest::domain::errors::HarvestError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(HarvestError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, HarvestError>;
