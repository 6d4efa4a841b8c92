//! Statement execution against `DuckDB`.
//!
//! Every call to [`QueryExecutor::execute`] gets its own connection cloned from
//! the base handle, runs inside a transaction and commits on success, read-only
//! or not. Dropping the transaction on an error path rolls it back.

use duckdb::Connection;
use duckdb::types::ValueRef;
use wrapped_config::ConnectionConfig;
use wrapped_core::TableNames;

use crate::error::QueryError;
use crate::statement::Statement;
use crate::table::{Cell, ResultTable};

/// Alias of the attached `PostgreSQL` catalog.
pub const ATTACHED_CATALOG: &str = "store";

/// Schema of the attached catalog that holds the store tables.
pub const ATTACHED_SCHEMA: &str = "store.public";

/// Runs statements and returns their full result.
pub trait QueryExecutor {
    /// Execute one statement and collect all of its rows.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] when the statement cannot be prepared or run, or
    /// when a result value has no [`Cell`] representation.
    fn execute(&self, statement: &Statement) -> Result<ResultTable, QueryError>;

    /// How tables are named on this connection.
    fn table_names(&self) -> TableNames {
        TableNames::default()
    }
}

/// [`QueryExecutor`] over a `DuckDB` database.
pub struct DuckDbExecutor {
    base: Connection,
    tables: TableNames,
}

impl DuckDbExecutor {
    /// Open (or create) a local `DuckDB` file.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Connection`] if the file cannot be opened.
    pub fn open_local(path: &str) -> Result<Self, QueryError> {
        let base = Connection::open(path).map_err(|source| QueryError::Connection {
            target: path.to_string(),
            source,
        })?;
        tracing::debug!(path, "opened local store");
        Ok(Self {
            base,
            tables: TableNames::default(),
        })
    }

    /// Open an empty in-memory database (tests, demo data).
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Connection`] if `DuckDB` cannot start.
    pub fn open_in_memory() -> Result<Self, QueryError> {
        let base = Connection::open_in_memory().map_err(|source| QueryError::Connection {
            target: ":memory:".to_string(),
            source,
        })?;
        Ok(Self {
            base,
            tables: TableNames::default(),
        })
    }

    /// Open the store described by a configuration section.
    ///
    /// A section with `path` opens that file. Otherwise the `postgres`
    /// extension is loaded into an in-memory database and the server is
    /// attached read-only as `store`, with table names qualified accordingly.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Connection`] if the file cannot be opened, the
    /// extension cannot be loaded, or the server cannot be attached.
    pub fn connect(config: &ConnectionConfig) -> Result<Self, QueryError> {
        if config.is_local() {
            return Self::open_local(&config.path);
        }

        let target = format!("{}:{}/{}", config.host, config.port, config.database);
        let connection_err = |source| QueryError::Connection {
            target: target.clone(),
            source,
        };

        let base = Connection::open_in_memory().map_err(connection_err)?;
        base.execute_batch("INSTALL postgres; LOAD postgres;")
            .map_err(connection_err)?;
        let attach = format!(
            "ATTACH '{}' AS {ATTACHED_CATALOG} (TYPE POSTGRES, READ_ONLY)",
            config.conninfo().replace('\'', "''")
        );
        base.execute_batch(&attach).map_err(connection_err)?;
        tracing::debug!(%target, "attached remote store");

        Ok(Self {
            base,
            tables: TableNames::qualified(ATTACHED_SCHEMA),
        })
    }

    /// The base connection.
    ///
    /// Used to install the demo schema; reports go through [`QueryExecutor`].
    #[must_use]
    pub const fn conn(&self) -> &Connection {
        &self.base
    }
}

impl QueryExecutor for DuckDbExecutor {
    fn execute(&self, statement: &Statement) -> Result<ResultTable, QueryError> {
        tracing::debug!(sql = %statement.sql, params = ?statement.params, "executing statement");

        let result = run_scoped(&self.base, statement);
        match &result {
            Ok(table) => tracing::debug!(
                rows = table.len(),
                columns = table.columns.len(),
                "statement finished"
            ),
            Err(e) => tracing::warn!(error = %e, "statement failed"),
        }
        result
    }

    fn table_names(&self) -> TableNames {
        self.tables.clone()
    }
}

fn run_scoped(base: &Connection, statement: &Statement) -> Result<ResultTable, QueryError> {
    let exec_err = |source| QueryError::Execution {
        sql: statement.sql.clone(),
        source,
    };

    let mut conn = base.try_clone()?;
    let tx = conn.transaction().map_err(exec_err)?;

    let table = {
        let mut stmt = tx.prepare(&statement.sql).map_err(exec_err)?;
        let mut rows = stmt
            .query(duckdb::params_from_iter(statement.params.iter()))
            .map_err(exec_err)?;

        let columns = rows
            .as_ref()
            .map(|s| s.column_names())
            .unwrap_or_default();

        let mut out = Vec::new();
        while let Some(row) = rows.next().map_err(exec_err)? {
            let mut cells = Vec::with_capacity(columns.len());
            for (idx, column) in columns.iter().enumerate() {
                let value = row.get_ref(idx).map_err(exec_err)?;
                cells.push(to_cell(column, value)?);
            }
            out.push(cells);
        }
        ResultTable::new(columns, out)
    };

    tx.commit().map_err(exec_err)?;
    Ok(table)
}

fn to_cell(column: &str, value: ValueRef<'_>) -> Result<Cell, QueryError> {
    let unsupported = |type_name: String| QueryError::UnsupportedValue {
        column: column.to_string(),
        type_name,
    };

    let cell = match value {
        ValueRef::Null => Cell::Null,
        ValueRef::Boolean(v) => Cell::Bool(v),
        ValueRef::TinyInt(v) => Cell::Int(i64::from(v)),
        ValueRef::SmallInt(v) => Cell::Int(i64::from(v)),
        ValueRef::Int(v) => Cell::Int(i64::from(v)),
        ValueRef::BigInt(v) => Cell::Int(v),
        ValueRef::UTinyInt(v) => Cell::Int(i64::from(v)),
        ValueRef::USmallInt(v) => Cell::Int(i64::from(v)),
        ValueRef::UInt(v) => Cell::Int(i64::from(v)),
        ValueRef::HugeInt(v) => {
            Cell::Int(i64::try_from(v).map_err(|_| unsupported(format!("HUGEINT {v}")))?)
        }
        ValueRef::UBigInt(v) => {
            Cell::Int(i64::try_from(v).map_err(|_| unsupported(format!("UBIGINT {v}")))?)
        }
        ValueRef::Float(v) => Cell::Float(f64::from(v)),
        ValueRef::Double(v) => Cell::Float(v),
        ValueRef::Decimal(v) => {
            let text = v.to_string();
            Cell::Float(
                text.parse::<f64>()
                    .map_err(|_| unsupported(format!("DECIMAL {text}")))?,
            )
        }
        ValueRef::Text(bytes) => Cell::Text(String::from_utf8_lossy(bytes).into_owned()),
        other => return Err(unsupported(format!("{:?}", other.data_type()))),
    };
    Ok(cell)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn executor() -> DuckDbExecutor {
        let executor = DuckDbExecutor::open_in_memory().unwrap();
        executor
            .conn()
            .execute_batch(
                "CREATE TABLE t (name VARCHAR, n BIGINT);
                 INSERT INTO t VALUES ('a', 1), ('b', 2), ('c', NULL);",
            )
            .unwrap();
        executor
    }

    #[test]
    fn collects_rows_and_column_names() {
        let table = executor()
            .execute(&Statement::new("SELECT name, n AS num FROM t ORDER BY name"))
            .unwrap();
        assert_eq!(table.columns, vec!["name", "num"]);
        assert_eq!(
            table.rows,
            vec![
                vec![Cell::from("a"), Cell::Int(1)],
                vec![Cell::from("b"), Cell::Int(2)],
                vec![Cell::from("c"), Cell::Null],
            ]
        );
    }

    #[test]
    fn binds_positional_parameters() {
        let table = executor()
            .execute(
                &Statement::new("SELECT name FROM t WHERE n >= ? AND name <> ?")
                    .bind(1_i64)
                    .bind("b"),
            )
            .unwrap();
        assert_eq!(table.rows, vec![vec![Cell::from("a")]]);
    }

    #[test]
    fn empty_result_keeps_columns() {
        let table = executor()
            .execute(&Statement::new("SELECT name, n FROM t WHERE n > 100"))
            .unwrap();
        assert!(table.is_empty());
        assert_eq!(table.columns, vec!["name", "n"]);
    }

    #[test]
    fn count_aggregates_are_integers() {
        let table = executor()
            .execute(&Statement::new("SELECT COUNT(*) AS c FROM t"))
            .unwrap();
        assert_eq!(table.cell(0, "c"), Some(&Cell::Int(3)));
    }

    #[test]
    fn malformed_sql_is_an_execution_error() {
        let err = executor()
            .execute(&Statement::new("SELEC name FROM t"))
            .unwrap_err();
        match err {
            QueryError::Execution { sql, .. } => assert_eq!(sql, "SELEC name FROM t"),
            other => panic!("expected execution error, got {other:?}"),
        }
    }

    #[test]
    fn failed_statement_leaves_no_partial_state() {
        let executor = executor();
        let err = executor.execute(&Statement::new(
            "INSERT INTO t VALUES ('d', 4), ('e', 'not a number')",
        ));
        assert!(err.is_err());
        let table = executor
            .execute(&Statement::new("SELECT COUNT(*) AS c FROM t"))
            .unwrap();
        assert_eq!(table.cell(0, "c"), Some(&Cell::Int(3)));
    }

    #[test]
    fn writes_are_committed() {
        let executor = executor();
        executor
            .execute(&Statement::new("INSERT INTO t VALUES (?, ?)").bind("d").bind(4_i64))
            .unwrap();
        let table = executor
            .execute(&Statement::new("SELECT COUNT(*) AS c FROM t"))
            .unwrap();
        assert_eq!(table.cell(0, "c"), Some(&Cell::Int(4)));
    }

    #[test]
    fn local_file_round_trips_between_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("music.duckdb");
        let path = path.to_str().unwrap();
        {
            let executor = DuckDbExecutor::open_local(path).unwrap();
            executor
                .conn()
                .execute_batch("CREATE TABLE Genres (genre VARCHAR); INSERT INTO Genres VALUES ('jazz');")
                .unwrap();
        }
        let executor = DuckDbExecutor::connect(&ConnectionConfig::local(path)).unwrap();
        assert_eq!(executor.table_names(), TableNames::default());
        let table = executor
            .execute(&Statement::new("SELECT genre FROM Genres"))
            .unwrap();
        assert_eq!(table.rows, vec![vec![Cell::from("jazz")]]);
    }
}
