#![cfg(feature = "excel")]

use std::io::{Cursor, Read, Seek};
use std::path::Path;

use calamine::{Data, Reader, Sheets, open_workbook_auto, open_workbook_auto_from_rs};

use crate::error::{LoadError, LoadResult};
use crate::types::{Table, Value};

use super::cells::{header_names, text_cell};

/// Load one sheet of a workbook (`.xlsx`, `.xls`, `.ods`, etc.) into a [`Table`].
///
/// Behavior:
/// - Picks `sheet_name` if provided; otherwise uses the first sheet in the workbook
/// - Detects the first non-empty row as the header row
/// - Converts the remaining rows into [`Value`]s; text cells follow the CSV null/inference rules
pub fn load_excel_from_path(
    path: impl AsRef<Path>,
    sheet_name: Option<&str>,
    null_tokens: &[String],
) -> LoadResult<Table> {
    let mut workbook = open_workbook_auto(path)?;
    load_sheet(&mut workbook, sheet_name, null_tokens)
}

/// Load one sheet of an in-memory workbook.
pub fn load_excel_from_bytes(
    bytes: &[u8],
    sheet_name: Option<&str>,
    null_tokens: &[String],
) -> LoadResult<Table> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))?;
    load_sheet(&mut workbook, sheet_name, null_tokens)
}

fn load_sheet<RS: Read + Seek>(
    workbook: &mut Sheets<RS>,
    sheet_name: Option<&str>,
    null_tokens: &[String],
) -> LoadResult<Table> {
    let sheet = match sheet_name {
        Some(name) => name.to_string(),
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| LoadError::Malformed {
                message: "workbook has no sheets".to_string(),
            })?,
    };

    let range = workbook.worksheet_range(&sheet)?;
    range_to_table(&range, null_tokens).map_err(|e| wrap_err_with_sheet(&sheet, e))
}

fn wrap_err_with_sheet(sheet: &str, err: LoadError) -> LoadError {
    match err {
        LoadError::Malformed { message } => LoadError::Malformed {
            message: format!("sheet '{sheet}': {message}"),
        },
        other => other,
    }
}

fn range_to_table(range: &calamine::Range<Data>, null_tokens: &[String]) -> LoadResult<Table> {
    let mut rows = range.rows();
    let header = rows
        .by_ref()
        .find(|row| row.iter().any(|c| !matches!(c, Data::Empty)))
        .ok_or_else(|| LoadError::Malformed {
            message: "sheet has no non-empty rows (no header row found)".to_string(),
        })?;
    let headers = header_names(header.iter().map(cell_to_header_string));

    let body: Vec<Vec<Value>> = rows
        .map(|row| row.iter().map(|c| convert_cell(c, null_tokens)).collect())
        .collect();

    Ok(Table::from_rows(headers, body))
}

fn cell_to_header_string(c: &Data) -> String {
    match c {
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

fn convert_cell(c: &Data, null_tokens: &[String]) -> Value {
    match c {
        Data::Empty | Data::Error(_) => Value::Null,
        Data::Int(i) => Value::Int64(*i),
        Data::Float(f) => Value::Float64(*f),
        Data::Bool(b) => Value::Bool(*b),
        Data::String(s) => text_cell(s, null_tokens),
        Data::DateTime(dt) => Value::DateTime(dt.to_string()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Value::DateTime(s.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::cells::default_null_tokens;

    #[test]
    fn error_cells_are_null() {
        let nulls = default_null_tokens();
        assert_eq!(
            convert_cell(&Data::Error(calamine::CellErrorType::NA), &nulls),
            Value::Null
        );
        assert_eq!(convert_cell(&Data::Empty, &nulls), Value::Null);
    }

    #[test]
    fn string_cells_use_text_inference() {
        let nulls = default_null_tokens();
        assert_eq!(convert_cell(&Data::String("12".to_string()), &nulls), Value::Int64(12));
        assert_eq!(convert_cell(&Data::String("N/A".to_string()), &nulls), Value::Null);
    }

    #[test]
    fn integral_float_headers_render_without_fraction() {
        assert_eq!(cell_to_header_string(&Data::Float(2024.0)), "2024");
        assert_eq!(cell_to_header_string(&Data::Float(1.5)), "1.5");
    }

    #[test]
    fn garbage_bytes_are_not_a_workbook() {
        let err = load_excel_from_bytes(b"not a workbook", None, &default_null_tokens()).unwrap_err();
        assert!(matches!(err, LoadError::Excel(_)), "got {err:?}");
    }
}
