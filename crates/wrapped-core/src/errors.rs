//! Validation error types.
//!
//! Raised before any query is issued. Query and configuration failures are
//! defined in their own crates (`QueryError` in wrapped-db, `ConfigError` in
//! wrapped-config).

use thiserror::Error;

/// A user-supplied parameter violates a report precondition.
///
/// The `Display` output is user-facing and rendered as-is by the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The start year of a range is after its end year.
    #[error("Start year {start} can not be greater than the end year {end}")]
    InvertedYearRange { start: i32, end: i32 },
}
