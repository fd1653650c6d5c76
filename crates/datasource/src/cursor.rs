//! Forward cursor protocol and the in-memory record set

use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Forward-only cursor over tabular data.
///
/// This is the whole contract a report item needs: position at the
/// first record, step forward, detect the end, and read one column of
/// the current record. Implementations are free to stream from a
/// database, a file, or memory.
pub trait DataCursor {
    /// Position the cursor on the first record.
    fn first(&mut self);

    /// Advance to the next record.
    fn next(&mut self);

    /// True once the cursor has moved past the last record.
    fn eof(&self) -> bool;

    /// Read a column of the current record. Unknown columns and reads
    /// past the end yield [`Value::Null`].
    fn data(&self, column: &str) -> Value;
}

/// Resolves a datasource name to a cursor. Implemented by the host's
/// data manager; a plain map works for tests and simple hosts.
pub trait DataSourceProvider {
    /// Look up a cursor by datasource name.
    fn cursor(&mut self, name: &str) -> Option<&mut dyn DataCursor>;
}

impl DataSourceProvider for HashMap<String, RecordSet> {
    fn cursor(&mut self, name: &str) -> Option<&mut dyn DataCursor> {
        self.get_mut(name).map(|r| r as &mut dyn DataCursor)
    }
}

/// In-memory table with cursor access.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordSet {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
    #[serde(skip)]
    position: usize,
}

impl RecordSet {
    /// Create an empty record set with the given column names.
    pub fn new<S: Into<String>>(columns: Vec<S>) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            position: 0,
        }
    }

    /// Append a row. Missing trailing cells read as null; extra cells
    /// are kept but unreachable by name.
    pub fn push_row(&mut self, row: Vec<Value>) {
        self.rows.push(row);
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Column names in declaration order.
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }
}

impl DataCursor for RecordSet {
    fn first(&mut self) {
        self.position = 0;
    }

    fn next(&mut self) {
        self.position += 1;
    }

    fn eof(&self) -> bool {
        self.position >= self.rows.len()
    }

    fn data(&self, column: &str) -> Value {
        let Some(col) = self.column_index(column) else {
            return Value::Null;
        };
        self.rows
            .get(self.position)
            .and_then(|row| row.get(col))
            .cloned()
            .unwrap_or(Value::Null)
    }
}
