//! Core data model: a [`Table`] of named, row-aligned [`Column`]s holding [`Value`] cells.
//!
//! Tables are produced by the [`crate::loader`] and consumed read-only by
//! [`crate::comparison`].

use std::fmt;

use crate::error::{LoadError, LoadResult};

/// A single cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing/empty value.
    Null,
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// Boolean.
    Bool(bool),
    /// UTF-8 string.
    Utf8(String),
    /// Date, time or duration cell, kept as its textual rendering.
    DateTime(String),
}

impl Value {
    /// Returns `true` for the missing-value sentinel.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Int64(v) => write!(f, "{v}"),
            Value::Float64(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Utf8(s) | Value::DateTime(s) => f.write_str(s),
        }
    }
}

/// A named column of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column name (header).
    pub name: String,
    /// Cells in row order.
    pub values: Vec<Value>,
}

impl Column {
    /// Create a new column.
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Number of cells that are not [`Value::Null`].
    pub fn non_null_count(&self) -> usize {
        self.values.iter().filter(|v| !v.is_null()).count()
    }

    /// Returns `true` if the name looks like an identifier (contains `id`, case-insensitive).
    pub fn is_identifier_like(&self) -> bool {
        is_identifier_like(&self.name)
    }
}

/// Returns `true` if `name`, lower-cased, contains the substring `id`.
pub fn is_identifier_like(name: &str) -> bool {
    name.to_lowercase().contains("id")
}

/// In-memory tabular data: an ordered list of row-aligned columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Create a table from columns.
    ///
    /// # Panics
    ///
    /// Panics if the columns do not all have the same length. Use [`Table::try_new`] for
    /// columns that are not known to line up.
    pub fn new(columns: Vec<Column>) -> Self {
        match Self::try_new(columns) {
            Ok(table) => table,
            Err(e) => panic!("{e}"),
        }
    }

    /// Create a table from columns, rejecting columns of unequal length.
    pub fn try_new(columns: Vec<Column>) -> LoadResult<Self> {
        if let Some(first) = columns.first() {
            let expected = first.values.len();
            if let Some(c) = columns.iter().find(|c| c.values.len() != expected) {
                return Err(LoadError::Malformed {
                    message: format!(
                        "column '{}' has {} cells, expected {}",
                        c.name,
                        c.values.len(),
                        expected
                    ),
                });
            }
        }
        Ok(Self { columns })
    }

    /// Build a table from a header list and row-major cells.
    ///
    /// Rows shorter than `headers` are padded with [`Value::Null`]; extra cells are dropped.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        let mut columns: Vec<Column> = headers
            .into_iter()
            .map(|name| Column::new(name, Vec::with_capacity(rows.len())))
            .collect();
        for row in rows {
            let mut cells = row.into_iter();
            for col in columns.iter_mut() {
                col.values.push(cells.next().unwrap_or(Value::Null));
            }
        }
        Self { columns }
    }

    /// Columns in order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Iterate column names in order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Look up a column by exact (case-sensitive) name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.columns.first().map(|c| c.values.len()).unwrap_or(0)
    }

    /// Returns `true` if the table has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
