//! Unified loading entrypoints.
//!
//! Most callers should use [`load_from_path`] (or [`load_from_bytes`] for uploads held in
//! memory), which reads a file into a [`crate::types::Table`].
//!
//! - If [`LoadOptions::format`] is `None`, the format is inferred from the file extension, and
//!   when the extension is missing or unknown, by sniffing the leading bytes.
//! - If a [`super::observability::LoadObserver`] is provided, success/failure/alerts are reported
//!   to it.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{LoadError, LoadResult};
use crate::types::Table;

use super::cells::default_null_tokens;
use super::csv;
use super::observability::{LoadContext, LoadObserver, LoadSeverity, LoadStats};

const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
const OLE2_MAGIC: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

/// Supported table formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// Delimited text (comma by default).
    Csv,
    /// Spreadsheet/workbook formats (feature-gated behind `excel`).
    Excel,
}

impl TableFormat {
    /// Parse a format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" | "tsv" | "txt" => Some(Self::Csv),
            "xlsx" | "xls" | "xlsm" | "xlsb" | "ods" => Some(Self::Excel),
            _ => None,
        }
    }

    /// Guess a format from leading bytes: ZIP or OLE2 containers are workbooks, anything else is
    /// treated as delimited text.
    pub fn sniff(head: &[u8]) -> Self {
        if head.starts_with(ZIP_MAGIC) || head.starts_with(OLE2_MAGIC) {
            Self::Excel
        } else {
            Self::Csv
        }
    }
}

/// How to choose the sheet when loading a workbook.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SheetSelection {
    /// The first sheet (default).
    #[default]
    First,
    /// A single named sheet.
    Named(String),
}

impl SheetSelection {
    #[cfg_attr(not(feature = "excel"), allow(dead_code))]
    fn name(&self) -> Option<&str> {
        match self {
            SheetSelection::First => None,
            SheetSelection::Named(name) => Some(name.as_str()),
        }
    }
}

/// Options controlling loading.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct LoadOptions {
    /// If `None`, infer the format from the extension, then from content.
    pub format: Option<TableFormat>,
    /// Workbook sheet to read.
    pub sheet: SheetSelection,
    /// CSV field delimiter. If `None`, tab for `.tsv` paths and comma otherwise.
    pub delimiter: Option<u8>,
    /// Cell texts treated as missing values.
    pub null_tokens: Vec<String>,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn LoadObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: LoadSeverity,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("format", &self.format)
            .field("sheet", &self.sheet)
            .field("delimiter", &self.delimiter.map(char::from))
            .field("null_tokens", &self.null_tokens.len())
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            format: None,
            sheet: SheetSelection::default(),
            delimiter: None,
            null_tokens: default_null_tokens(),
            observer: None,
            alert_at_or_above: LoadSeverity::Critical,
        }
    }
}

/// Load a file into a [`Table`].
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with row/column counts
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// # Examples
///
/// ```no_run
/// use compare_files::loader::{load_from_path, LoadOptions};
///
/// # fn main() -> Result<(), compare_files::LoadError> {
/// // `.csv` selects CSV loading; unknown extensions fall back to content sniffing.
/// let table = load_from_path("ledger.csv", &LoadOptions::default())?;
/// println!("rows={} columns={}", table.row_count(), table.column_count());
/// # Ok(())
/// # }
/// ```
///
/// Selecting a workbook sheet (requires the `excel` feature, on by default):
///
/// ```no_run
/// use compare_files::loader::{load_from_path, LoadOptions, SheetSelection};
///
/// # fn main() -> Result<(), compare_files::LoadError> {
/// let opts = LoadOptions {
///     sheet: SheetSelection::Named("March".to_string()),
///     ..Default::default()
/// };
/// let table = load_from_path("ledger.xlsx", &opts)?;
/// # let _ = table;
/// # Ok(())
/// # }
/// ```
pub fn load_from_path(path: impl AsRef<Path>, options: &LoadOptions) -> LoadResult<Table> {
    let path = path.as_ref();
    let ext = path.extension().and_then(|s| s.to_str());
    let fmt = match options.format.or_else(|| ext.and_then(TableFormat::from_extension)) {
        Some(f) => f,
        None => TableFormat::sniff(&read_head(path)?),
    };

    let ctx = LoadContext {
        source: path.display().to_string(),
        format: fmt,
    };

    let result = match fmt {
        TableFormat::Csv => {
            let delimiter = options.delimiter.unwrap_or_else(|| default_delimiter(ext));
            csv::load_csv_from_path(path, delimiter, &options.null_tokens)
        }
        TableFormat::Excel => load_excel_path_dispatch(path, options),
    };

    report(options, &ctx, &result);
    result
}

/// Load an in-memory upload into a [`Table`].
///
/// `label` is the upload's file name (used for extension inference and observer context); the
/// format is sniffed from `bytes` when neither options nor the label decide it.
pub fn load_from_bytes(bytes: &[u8], label: &str, options: &LoadOptions) -> LoadResult<Table> {
    let ext = Path::new(label).extension().and_then(|s| s.to_str());
    let fmt = options
        .format
        .or_else(|| ext.and_then(TableFormat::from_extension))
        .unwrap_or_else(|| TableFormat::sniff(bytes));

    let ctx = LoadContext {
        source: label.to_string(),
        format: fmt,
    };

    let result = match fmt {
        TableFormat::Csv => {
            let delimiter = options.delimiter.unwrap_or_else(|| default_delimiter(ext));
            csv::load_csv_from_bytes(bytes, delimiter, &options.null_tokens)
        }
        TableFormat::Excel => load_excel_bytes_dispatch(bytes, options),
    };

    report(options, &ctx, &result);
    result
}

fn report(options: &LoadOptions, ctx: &LoadContext, result: &LoadResult<Table>) {
    let Some(obs) = options.observer.as_ref() else {
        return;
    };
    match result {
        Ok(table) => obs.on_success(
            ctx,
            LoadStats {
                rows: table.row_count(),
                columns: table.column_count(),
            },
        ),
        Err(e) => {
            let sev = severity_for_error(e);
            obs.on_failure(ctx, sev, e);
            if sev >= options.alert_at_or_above {
                obs.on_alert(ctx, sev, e);
            }
        }
    }
}

fn severity_for_error(e: &LoadError) -> LoadSeverity {
    match e {
        LoadError::Io(_) => LoadSeverity::Critical,
        LoadError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => LoadSeverity::Critical,
            _ => LoadSeverity::Error,
        },
        #[cfg(feature = "excel")]
        LoadError::Excel(calamine::Error::Io(_)) => LoadSeverity::Critical,
        #[cfg(feature = "excel")]
        LoadError::Excel(_) => LoadSeverity::Error,
        LoadError::UnsupportedFormat { .. } => LoadSeverity::Error,
        LoadError::Malformed { .. } => LoadSeverity::Error,
        LoadError::Encoding { .. } => LoadSeverity::Error,
    }
}

fn default_delimiter(ext: Option<&str>) -> u8 {
    match ext {
        Some(e) if e.eq_ignore_ascii_case("tsv") => b'\t',
        _ => b',',
    }
}

fn read_head(path: &Path) -> LoadResult<Vec<u8>> {
    let mut head = Vec::with_capacity(OLE2_MAGIC.len());
    File::open(path)?
        .take(OLE2_MAGIC.len() as u64)
        .read_to_end(&mut head)?;
    Ok(head)
}

fn load_excel_path_dispatch(path: &Path, options: &LoadOptions) -> LoadResult<Table> {
    // Avoid unused warnings when the feature is off.
    let _ = (path, options);

    #[cfg(feature = "excel")]
    {
        super::excel::load_excel_from_path(path, options.sheet.name(), &options.null_tokens)
    }

    #[cfg(not(feature = "excel"))]
    {
        Err(excel_disabled())
    }
}

fn load_excel_bytes_dispatch(bytes: &[u8], options: &LoadOptions) -> LoadResult<Table> {
    let _ = (bytes, options);

    #[cfg(feature = "excel")]
    {
        super::excel::load_excel_from_bytes(bytes, options.sheet.name(), &options.null_tokens)
    }

    #[cfg(not(feature = "excel"))]
    {
        Err(excel_disabled())
    }
}

#[cfg(not(feature = "excel"))]
fn excel_disabled() -> LoadError {
    LoadError::UnsupportedFormat {
        message: "excel loading not enabled (enable cargo feature 'excel')".to_string(),
    }
}

/// An owned load request, e.g. one side of a comparison.
#[derive(Clone)]
pub struct LoadRequest {
    /// Path to the input file.
    pub path: PathBuf,
    /// Options controlling loading.
    pub options: LoadOptions,
}

impl fmt::Debug for LoadRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadRequest")
            .field("path", &self.path)
            .field("options", &self.options)
            .finish()
    }
}

impl LoadRequest {
    /// Execute the request by calling [`load_from_path`].
    pub fn run(&self) -> LoadResult<Table> {
        load_from_path(&self.path, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_lookup_is_case_insensitive() {
        assert_eq!(TableFormat::from_extension("CSV"), Some(TableFormat::Csv));
        assert_eq!(TableFormat::from_extension("Xlsx"), Some(TableFormat::Excel));
        assert_eq!(TableFormat::from_extension("parquet"), None);
    }

    #[test]
    fn sniff_recognizes_workbook_containers() {
        assert_eq!(TableFormat::sniff(b"PK\x03\x04rest"), TableFormat::Excel);
        assert_eq!(TableFormat::sniff(OLE2_MAGIC), TableFormat::Excel);
        assert_eq!(TableFormat::sniff(b"id,amount\n"), TableFormat::Csv);
        assert_eq!(TableFormat::sniff(b""), TableFormat::Csv);
    }

    #[test]
    fn tsv_defaults_to_tab() {
        assert_eq!(default_delimiter(Some("TSV")), b'\t');
        assert_eq!(default_delimiter(Some("csv")), b',');
        assert_eq!(default_delimiter(None), b',');
    }

    #[test]
    fn bytes_with_unknown_label_are_sniffed_as_csv() {
        let t = load_from_bytes(b"ID,Amount\n1,10\n", "upload.dat", &LoadOptions::default()).unwrap();
        assert_eq!(t.column_names().collect::<Vec<_>>(), vec!["ID", "Amount"]);
    }
}
