//! # wrapped-db
//!
//! Report execution for Music Wrapped.
//!
//! Reports are single SQL statements over the listening store, run through
//! `DuckDB` either against a local database file or against a `PostgreSQL`
//! server attached through the `postgres` extension.
//!
//! - [`catalog`] builds one [`Statement`] per report from typed parameters
//! - [`executor`] runs statements and collects a [`ResultTable`]
//! - [`cache`] memoizes results per session, keyed by report and arguments
//! - [`service`] ties the three together as [`Reports`]
//! - [`navigation`] turns a selected row into the next report's parameters
//! - [`demo`] installs a small sample store

pub mod cache;
pub mod catalog;
pub mod demo;
pub mod error;
pub mod executor;
pub mod navigation;
pub mod service;
pub mod statement;
pub mod table;

mod test_support;

pub use cache::{CacheKey, ResultCache};
pub use catalog::{ReportCatalog, ReportRequest};
pub use error::{NavigationError, QueryError};
pub use executor::{DuckDbExecutor, QueryExecutor};
pub use navigation::{SongSpotlight, UserSpotlight};
pub use service::Reports;
pub use statement::{SqlParam, Statement};
pub use table::{Cell, ResultTable};
