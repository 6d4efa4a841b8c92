//! Natural keys of the entities a drill-down can start from.
//!
//! Users are not unique by name and songs are not unique by title, so every
//! drill-down carries the full pair.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A user identified by `(name, dob)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserKey {
    pub name: String,
    pub dob: i64,
}

impl UserKey {
    #[must_use]
    pub fn new(name: impl Into<String>, dob: i64) -> Self {
        Self {
            name: name.into(),
            dob,
        }
    }
}

impl fmt::Display for UserKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.name, self.dob)
    }
}

/// A song identified by `(name, release_date)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SongKey {
    pub name: String,
    pub release: i64,
}

impl SongKey {
    #[must_use]
    pub fn new(name: impl Into<String>, release: i64) -> Self {
        Self {
            name: name.into(),
            release,
        }
    }
}

impl fmt::Display for SongKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.release)
    }
}
