//! Inclusive year ranges.

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// An inclusive `[start, end]` range of years with `start <= end`.
///
/// The only way to build one is [`YearRange::new`], so a report that takes a
/// `YearRange` can never be issued with an inverted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearRange {
    start: i32,
    end: i32,
}

impl YearRange {
    /// Validate and build a range.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvertedYearRange`] when `start > end`.
    pub const fn new(start: i32, end: i32) -> Result<Self, ValidationError> {
        if start > end {
            return Err(ValidationError::InvertedYearRange { start, end });
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub const fn start(self) -> i32 {
        self.start
    }

    #[must_use]
    pub const fn end(self) -> i32 {
        self.end
    }
}
