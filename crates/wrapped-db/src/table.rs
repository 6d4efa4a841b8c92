//! Tabular report results.
//!
//! A [`ResultTable`] is what every report returns: ordered column names plus
//! ordered rows. Zero rows is a valid, successful result.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One cell of a result row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Cell {
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }

    /// Short type name for error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
        }
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Rows and column names of one executed statement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl ResultTable {
    #[must_use]
    pub const fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self { columns, rows }
    }

    /// A zero-row table with the given columns.
    #[must_use]
    pub fn empty<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by exact name.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// All values of one column, top to bottom.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<Vec<&Cell>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().filter_map(|row| row.get(idx)).collect())
    }

    /// One cell by row index and column name.
    #[must_use]
    pub fn cell(&self, row: usize, column: &str) -> Option<&Cell> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx)
    }

    /// Rows as JSON objects keyed by column name, preserving row order.
    #[must_use]
    pub fn to_records(&self) -> Vec<serde_json::Map<String, serde_json::Value>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .zip(row)
                    .map(|(column, cell)| {
                        let value = serde_json::to_value(cell).unwrap_or(serde_json::Value::Null);
                        (column.clone(), value)
                    })
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> ResultTable {
        ResultTable::new(
            vec!["user".into(), "numPlays".into()],
            vec![
                vec!["Alice".into(), 5.into()],
                vec!["Bob".into(), 4.into()],
            ],
        )
    }

    #[test]
    fn lookups_by_column_name() {
        let table = sample();
        assert_eq!(table.column_index("numPlays"), Some(1));
        assert_eq!(table.cell(1, "user"), Some(&Cell::from("Bob")));
        assert_eq!(table.cell(2, "user"), None);
        assert_eq!(table.column("missing"), None);
        let plays: Vec<i64> = table
            .column("numPlays")
            .unwrap()
            .into_iter()
            .filter_map(Cell::as_i64)
            .collect();
        assert_eq!(plays, vec![5, 4]);
    }

    #[test]
    fn empty_table_keeps_columns() {
        let table = ResultTable::empty(["artist", "dob"]);
        assert!(table.is_empty());
        assert_eq!(table.columns, vec!["artist", "dob"]);
    }

    #[test]
    fn records_serialize_untagged_cells() {
        let records = sample().to_records();
        let json = serde_json::to_string(&records).unwrap();
        assert_eq!(
            json,
            r#"[{"user":"Alice","numPlays":5},{"user":"Bob","numPlays":4}]"#
        );
    }
}
