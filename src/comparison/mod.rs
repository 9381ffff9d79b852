//! Column-by-column comparison of two [`crate::types::Table`]s.
//!
//! All operations here are pure functions of their inputs: they never mutate the tables they
//! are given and never fail.
//!
//! - [`compare()`]: per-column counts, sums and [`MatchStatus`]
//! - [`diff_columns()`]: columns present on only one side
//! - [`mismatch_notes()`]: one readable line per non-matching column
//!
//! ## Example
//!
//! ```rust
//! use compare_files::comparison::{compare, mismatch_notes, ComparePolicy, MatchStatus};
//! use compare_files::types::{Column, Table, Value};
//!
//! let left = Table::new(vec![
//!     Column::new("ID", vec![Value::Int64(1), Value::Int64(2)]),
//!     Column::new("Amount", vec![Value::Int64(10), Value::Utf8("abc".to_string())]),
//! ]);
//! let right = Table::new(vec![
//!     Column::new("ID", vec![Value::Int64(1), Value::Int64(2)]),
//!     Column::new("Amount", vec![Value::Int64(10), Value::Int64(5)]),
//! ]);
//!
//! let result = compare(&left, &right, &ComparePolicy::default());
//! assert_eq!(result.reports[0].status, MatchStatus::Match);
//! assert_eq!(result.reports[1].status, MatchStatus::Mismatch);
//! assert_eq!(
//!     mismatch_notes(&result),
//!     vec!["Amount: Mismatch (left 1 row, right 2 rows)".to_string()]
//! );
//! ```

pub mod coerce;
pub mod compare;
pub mod diff;
pub mod notes;
pub mod policy;
pub mod report;

pub use compare::compare;
pub use diff::diff_columns;
pub use notes::mismatch_notes;
pub use policy::{ColumnUniverse, ComparePolicy, MAX_SUM_DECIMALS, SumEquality};
pub use report::{ColumnCount, ColumnDiff, ColumnReport, ComparisonResult, MatchStatus};
