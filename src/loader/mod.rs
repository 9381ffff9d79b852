//! Loading entrypoints and implementations.
//!
//! Most callers should use [`load_from_path`] (from [`unified`]) which:
//!
//! - picks the format from options, the file extension, or the file's leading bytes
//! - reads the file into an in-memory [`crate::types::Table`]
//! - optionally reports success/failure/alerts to a [`LoadObserver`]
//!
//! Format-specific functions are also available under:
//! - [`csv`]
//! - `excel` (feature `excel`)
//!
//! Loading is the only fallible step of a comparison; a [`crate::LoadError`] short-circuits
//! before any comparison is attempted.

pub mod cells;
pub mod csv;
#[cfg(feature = "excel")]
pub mod excel;
pub mod observability;
pub mod unified;

pub use observability::{LoadContext, LoadObserver, LoadSeverity, LoadStats, TracingObserver};
pub use unified::{LoadOptions, LoadRequest, SheetSelection, TableFormat, load_from_bytes, load_from_path};
