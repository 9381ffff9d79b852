//! Delimited-text loading.

use std::path::Path;

use crate::error::{LoadError, LoadResult};
use crate::types::{Table, Value};

use super::cells::{header_names, text_cell};

/// Load a delimited text file into a [`Table`].
///
/// Rules:
///
/// - The first record is the header row.
/// - Duplicate or blank headers are renamed (see [`super::cells::header_names`]).
/// - Rows shorter than the header are padded with nulls; longer rows are an error.
/// - Cells matching `null_tokens` (after trimming) are missing.
pub fn load_csv_from_path(
    path: impl AsRef<Path>,
    delimiter: u8,
    null_tokens: &[String],
) -> LoadResult<Table> {
    let mut rdr = reader_builder(delimiter).from_path(path)?;
    load_csv_from_reader(&mut rdr, null_tokens)
}

/// Load delimited text from an in-memory buffer.
pub fn load_csv_from_bytes(bytes: &[u8], delimiter: u8, null_tokens: &[String]) -> LoadResult<Table> {
    let mut rdr = reader_builder(delimiter).from_reader(bytes);
    load_csv_from_reader(&mut rdr, null_tokens)
}

/// Load delimited text from an existing CSV reader.
///
/// The reader should be built with `has_headers(true)` and `flexible(true)`.
pub fn load_csv_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
    null_tokens: &[String],
) -> LoadResult<Table> {
    let raw_headers = rdr.headers().map_err(classify_csv_error)?.clone();
    if raw_headers.is_empty() {
        return Err(LoadError::Malformed {
            message: "input is empty (no header row)".to_string(),
        });
    }
    let headers = header_names(raw_headers.iter());
    let width = headers.len();

    let mut rows: Vec<Vec<Value>> = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        // 1-based, and the header occupies row 1.
        let user_row = row_idx0 + 2;
        let record = result.map_err(classify_csv_error)?;
        if record.len() > width {
            return Err(LoadError::Malformed {
                message: format!(
                    "row {user_row} has {} fields but the header has {width}",
                    record.len()
                ),
            });
        }
        rows.push(record.iter().map(|raw| text_cell(raw, null_tokens)).collect());
    }

    Ok(Table::from_rows(headers, rows))
}

fn reader_builder(delimiter: u8) -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).flexible(true).delimiter(delimiter);
    builder
}

fn classify_csv_error(err: csv::Error) -> LoadError {
    match err.kind() {
        csv::ErrorKind::Utf8 { pos, err: utf8 } => LoadError::Encoding {
            row: pos.as_ref().map(|p| p.line() as usize).unwrap_or(0),
            message: utf8.to_string(),
        },
        _ => LoadError::Csv(err),
    }
}
