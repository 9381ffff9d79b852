//! `compare-files` loads two tabular files and compares them column by column.
//!
//! For every column it reports the number of non-missing cells on each side, the numeric sum on
//! each side, and a [`comparison::MatchStatus`]; it also lists the columns present in only one
//! of the files.
//!
//! ## Inputs
//!
//! - **CSV / delimited text**: `.csv`, `.tsv`, `.txt`
//! - **Excel/workbooks** (Cargo feature `excel`, on by default): `.xlsx`, `.xls`, `.xlsm`, `.xlsb`, `.ods`
//!
//! Files with other or no extensions are sniffed by content. Empty cells and common null markers
//! (`NA`, `N/A`, `NULL`, `#N/A`, …) load as [`types::Value::Null`].
//!
//! ## Column rules
//!
//! - A column whose name contains `id` (any case) is *identifier-like*: only non-missing cells
//!   are counted. `Match` if the counts agree, else `Mismatch`.
//! - Every other column is a *measure*: cells are coerced to numbers (cells that do not parse
//!   are treated as missing), then counted and summed. `Match` if counts and sums agree,
//!   `PartialMatch` if only the counts agree, else `Mismatch`.
//! - A column missing from one file is always `Mismatch`, and its count on that side is
//!   [`comparison::ColumnCount::Absent`] rather than zero.
//!
//! ## Example
//!
//! ```no_run
//! use compare_files::comparison::{compare, mismatch_notes, ComparePolicy};
//! use compare_files::loader::{load_from_path, LoadOptions};
//!
//! # fn main() -> Result<(), compare_files::LoadError> {
//! let opts = LoadOptions::default();
//! let left = load_from_path("january.xlsx", &opts)?;
//! let right = load_from_path("january_export.csv", &opts)?;
//!
//! let result = compare(&left, &right, &ComparePolicy::default());
//! for note in mismatch_notes(&result) {
//!     println!("{note}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`loader`]: file/bytes to [`types::Table`], with format detection and observer hooks
//! - [`types`]: the in-memory table model
//! - [`comparison`]: `compare`, `diff_columns`, `mismatch_notes`
//! - [`formatters`]: text and JSON renderings of a comparison
//! - [`error`]: error types
//! - [`logging`]: `tracing` subscriber setup for stderr and an optional log file

pub mod comparison;
pub mod error;
pub mod formatters;
pub mod loader;
pub mod logging;
pub mod types;

pub use error::{FormatError, FormatResult, LoadError, LoadResult};
