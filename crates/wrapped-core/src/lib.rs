//! # wrapped-core
//!
//! Core types shared across all Music Wrapped crates:
//! - Table names of the listening store, as a typed enumeration
//! - Natural keys for users and songs (the drill-down parameters)
//! - Report identifiers and report filter enums
//! - Year ranges with start/end validation
//! - The integer timestamp encoding used by play and library rows
//! - Cross-cutting validation errors

pub mod errors;
pub mod keys;
pub mod reports;
pub mod tables;
pub mod timestamp;
pub mod years;

pub use errors::ValidationError;
pub use keys::{SongKey, UserKey};
pub use reports::{AwardFilter, ReportKind};
pub use tables::{Table, TableNames};
pub use years::YearRange;
