use thiserror::Error;

/// Convenience result type for loader operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Error type returned by the loader.
///
/// The comparator itself never fails; every error a user can see originates here, before any
/// comparison is attempted.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "excel")]
    /// Workbook error (feature-gated behind `excel`).
    #[error("excel error: {0}")]
    Excel(#[from] calamine::Error),

    /// Delimited-text error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The format could not be determined, or is not compiled in.
    #[error("unsupported format: {message}")]
    UnsupportedFormat { message: String },

    /// The content was readable but is not a well-formed table.
    #[error("malformed table: {message}")]
    Malformed { message: String },

    /// The content is not valid UTF-8.
    #[error("unreadable encoding at row {row}: {message}")]
    Encoding { row: usize, message: String },
}

/// Convenience result type for report formatting.
pub type FormatResult<T> = Result<T, FormatError>;

/// Error type returned by [`crate::formatters`].
#[derive(Debug, Error)]
pub enum FormatError {
    /// JSON serialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing to the output buffer failed.
    #[error("format error: {0}")]
    Fmt(#[from] std::fmt::Error),
}
