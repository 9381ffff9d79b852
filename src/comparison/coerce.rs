//! Numeric coercion and reduction for measure columns.
//!
//! Coercion always produces a derived copy; the caller's [`Column`] is never touched.

use crate::types::{Column, Value};

/// Coerce a single cell to a number.
///
/// - `Null`, `DateTime` and NaN map to `None`.
/// - `Bool` maps to `1.0` / `0.0`.
/// - `Utf8` is trimmed and parsed; a failed parse maps to `None` (silently).
pub fn coerce_value(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Null | Value::DateTime(_) => return None,
        Value::Int64(v) => *v as f64,
        Value::Float64(v) => *v,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Utf8(s) => s.trim().parse::<f64>().ok()?,
    };
    if n.is_nan() { None } else { Some(n) }
}

/// Coerce every cell of `column` into a new vector, preserving row alignment.
pub fn coerce_column(column: &Column) -> Vec<Option<f64>> {
    column.values.iter().map(coerce_value).collect()
}

/// Count and sum of the successfully coerced cells of a column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericSummary {
    /// Number of cells that coerced to a number.
    pub count: usize,
    /// Sum of coerced cells; `0.0` when there are none.
    pub sum: f64,
}

/// Summarize a coerced column, ignoring missing entries.
pub fn summarize(coerced: &[Option<f64>]) -> NumericSummary {
    coerced.iter().flatten().fold(
        NumericSummary { count: 0, sum: 0.0 },
        |acc, v| NumericSummary {
            count: acc.count + 1,
            sum: acc.sum + v,
        },
    )
}
