//! Error types for wrapped-db.

use thiserror::Error;

/// Errors from opening the store or running a report statement.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The store could not be opened or attached.
    #[error("Cannot connect to {target}: {source}")]
    Connection {
        target: String,
        #[source]
        source: duckdb::Error,
    },

    /// A statement failed (malformed SQL, constraint or connectivity failure).
    #[error("Query failed: {source}\n{sql}")]
    Execution {
        sql: String,
        #[source]
        source: duckdb::Error,
    },

    /// A result column holds a type the result table cannot represent.
    #[error("Unsupported value in column '{column}': {type_name}")]
    UnsupportedValue { column: String, type_name: String },

    /// Underlying `DuckDB` error.
    #[error("DuckDB error: {0}")]
    DuckDb(#[from] duckdb::Error),
}

/// Errors from projecting a selected row into drill-down parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// The selected row index is past the end of the table.
    #[error("Row {index} is out of range (table has {len} rows)")]
    RowOutOfRange { index: usize, len: usize },

    /// The table lacks a column the next report needs.
    #[error("Column '{0}' is not part of the selected table")]
    MissingColumn(String),

    /// The key column holds a value of the wrong type.
    #[error("Column '{column}' holds {found}, expected {expected}")]
    InvalidValue {
        column: String,
        expected: &'static str,
        found: String,
    },
}
