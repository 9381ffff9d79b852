//! Renderings of a [`ComparisonResult`] for people and machines.
//!
//! Number formatting (fixed decimals) and status coloring live here, not in the comparator.
//!
//! # Examples
//!
//! ```rust
//! use compare_files::comparison::{compare, ComparePolicy};
//! use compare_files::formatters::{FormatterConfig, ReportFormatter, TextFormatter};
//! use compare_files::types::{Column, Table, Value};
//!
//! let t = Table::new(vec![Column::new("Amount", vec![Value::Int64(10)])]);
//! let result = compare(&t, &t, &ComparePolicy::default());
//! let text = TextFormatter::new(FormatterConfig::plain()).format(&result).unwrap();
//! assert!(text.contains("10.00"));
//! ```

use std::fmt::Write;

use serde::Serialize;

use crate::comparison::{ColumnCount, ColumnReport, ComparisonResult, MatchStatus, mismatch_notes};
use crate::error::FormatResult;

/// Options shared by the formatters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterConfig {
    /// Decimal places for sums.
    pub decimals: usize,
    /// Include the columns-missing section.
    pub include_missing: bool,
    /// Include mismatch notes.
    pub include_notes: bool,
    /// Color statuses with ANSI escapes (text formatter only).
    pub use_colors: bool,
    /// Pretty-print JSON.
    pub pretty: bool,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            decimals: 2,
            include_missing: true,
            include_notes: false,
            use_colors: true,
            pretty: true,
        }
    }
}

impl FormatterConfig {
    /// Default layout without colors, for files, pipes and tests.
    pub fn plain() -> Self {
        Self {
            use_colors: false,
            ..Self::default()
        }
    }
}

/// Turns a [`ComparisonResult`] into a string.
pub trait ReportFormatter {
    /// Render `result`.
    fn format(&self, result: &ComparisonResult) -> FormatResult<String>;
}

/// Aligned plain-text table.
#[derive(Debug, Clone, Default)]
pub struct TextFormatter {
    config: FormatterConfig,
}

impl TextFormatter {
    /// Create a text formatter with the given configuration.
    pub fn new(config: FormatterConfig) -> Self {
        Self { config }
    }
}

const HEADERS: [&str; 6] = [
    "Column",
    "Count (left)",
    "Count (right)",
    "Sum (left)",
    "Sum (right)",
    "Status",
];

impl ReportFormatter for TextFormatter {
    fn format(&self, result: &ComparisonResult) -> FormatResult<String> {
        let mut out = String::new();

        let rows: Vec<[String; 6]> = result
            .reports
            .iter()
            .map(|r| self.cells(r))
            .collect();
        let mut widths = HEADERS.map(str::len);
        for row in &rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }

        writeln!(out, "Comparison results")?;
        if rows.is_empty() {
            writeln!(out, "  (no columns to compare)")?;
        } else {
            let header: [String; 6] = HEADERS.map(str::to_owned);
            write_row(&mut out, &header, &widths, None)?;
            for (row, report) in rows.iter().zip(&result.reports) {
                let color = self.config.use_colors.then_some(report.status);
                write_row(&mut out, row, &widths, color)?;
            }
        }

        if self.config.include_missing
            && !(result.columns_only_left.is_empty() && result.columns_only_right.is_empty())
        {
            writeln!(out)?;
            writeln!(out, "Columns not present in both files:")?;
            if !result.columns_only_left.is_empty() {
                writeln!(out, "  only in left:  {}", result.columns_only_left.join(", "))?;
            }
            if !result.columns_only_right.is_empty() {
                writeln!(out, "  only in right: {}", result.columns_only_right.join(", "))?;
            }
        }

        if self.config.include_notes {
            let notes = mismatch_notes(result);
            if !notes.is_empty() {
                writeln!(out)?;
                writeln!(out, "Mismatch notes:")?;
                for note in notes {
                    writeln!(out, "  {note}")?;
                }
            }
        }

        Ok(out)
    }
}

impl TextFormatter {
    fn cells(&self, r: &ColumnReport) -> [String; 6] {
        [
            r.name.clone(),
            format_count(r.count_left),
            format_count(r.count_right),
            format_sum(r.sum_left, self.config.decimals),
            format_sum(r.sum_right, self.config.decimals),
            r.status.label().to_string(),
        ]
    }
}

fn write_row(
    out: &mut String,
    cells: &[String; 6],
    widths: &[usize; 6],
    color: Option<MatchStatus>,
) -> std::fmt::Result {
    write!(out, "{:<w$}", cells[0], w = widths[0])?;
    for (cell, &w) in cells[1..5].iter().zip(&widths[1..5]) {
        write!(out, "  {cell:>w$}")?;
    }
    let status = format!("{:<w$}", cells[5], w = widths[5]);
    match color {
        Some(s) => writeln!(out, "  {}{}\x1b[0m", ansi_color(s), status.trim_end()),
        None => writeln!(out, "  {}", status.trim_end()),
    }
}

fn ansi_color(status: MatchStatus) -> &'static str {
    match status {
        MatchStatus::Match => "\x1b[32m",
        MatchStatus::PartialMatch => "\x1b[33m",
        MatchStatus::Mismatch => "\x1b[31m",
    }
}

/// Render a count; an absent column is `absent`.
pub fn format_count(count: ColumnCount) -> String {
    match count {
        ColumnCount::Rows(n) => n.to_string(),
        ColumnCount::Absent => "absent".to_string(),
    }
}

/// Render a sum with fixed decimals; not-applicable is `-`.
pub fn format_sum(sum: Option<f64>, decimals: usize) -> String {
    match sum {
        Some(v) => format!("{v:.decimals$}"),
        None => "-".to_string(),
    }
}

/// JSON rendering of the full result.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    config: FormatterConfig,
}

impl JsonFormatter {
    /// Create a JSON formatter with the given configuration.
    pub fn new(config: FormatterConfig) -> Self {
        Self { config }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    result: &'a ComparisonResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<Vec<String>>,
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, result: &ComparisonResult) -> FormatResult<String> {
        let report = JsonReport {
            result,
            notes: self.config.include_notes.then(|| mismatch_notes(result)),
        };
        let json = if self.config.pretty {
            serde_json::to_string_pretty(&report)?
        } else {
            serde_json::to_string(&report)?
        };
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ComparisonResult {
        ComparisonResult {
            reports: vec![
                ColumnReport {
                    name: "ID".to_string(),
                    count_left: ColumnCount::Rows(3),
                    count_right: ColumnCount::Rows(3),
                    sum_left: None,
                    sum_right: None,
                    status: MatchStatus::Match,
                },
                ColumnReport {
                    name: "Amount".to_string(),
                    count_left: ColumnCount::Rows(2),
                    count_right: ColumnCount::Absent,
                    sum_left: Some(30.0),
                    sum_right: None,
                    status: MatchStatus::Mismatch,
                },
            ],
            columns_only_left: vec!["Amount".to_string()],
            columns_only_right: vec![],
        }
    }

    #[test]
    fn sums_use_fixed_decimals() {
        assert_eq!(format_sum(Some(30.0), 2), "30.00");
        assert_eq!(format_sum(Some(0.126), 2), "0.13");
        assert_eq!(format_sum(Some(1234.56), 1), "1234.6");
        assert_eq!(format_sum(None, 2), "-");
    }

    #[test]
    fn text_table_is_aligned() {
        let text = TextFormatter::new(FormatterConfig::plain()).format(&sample()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Comparison results");
        assert_eq!(
            lines[1],
            "Column  Count (left)  Count (right)  Sum (left)  Sum (right)  Status"
        );
        assert_eq!(
            lines[2],
            "ID                 3              3           -            -  Match"
        );
        assert_eq!(
            lines[3],
            "Amount             2         absent       30.00            -  Mismatch"
        );
        assert!(text.contains("only in left:  Amount"));
        assert!(!text.contains("only in right"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn text_notes_are_optional() {
        let config = FormatterConfig {
            include_notes: true,
            ..FormatterConfig::plain()
        };
        let text = TextFormatter::new(config).format(&sample()).unwrap();
        assert!(text.contains("Mismatch notes:\n  Amount: Mismatch (left 2 rows, right absent)"));
    }

    #[test]
    fn colors_wrap_status() {
        let text = TextFormatter::new(FormatterConfig::default()).format(&sample()).unwrap();
        assert!(text.contains("\x1b[32mMatch\x1b[0m"));
        assert!(text.contains("\x1b[31mMismatch\x1b[0m"));
    }

    #[test]
    fn json_flattens_result_and_adds_notes() {
        let config = FormatterConfig {
            include_notes: true,
            pretty: false,
            ..FormatterConfig::plain()
        };
        let json = JsonFormatter::new(config).format(&sample()).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["reports"][1]["count_right"], "absent");
        assert_eq!(v["reports"][1]["sum_left"], 30.0);
        assert!(v["reports"][0]["sum_left"].is_null());
        assert_eq!(v["reports"][0]["status"], "match");
        assert_eq!(v["columns_only_left"][0], "Amount");
        assert_eq!(v["notes"][0], "Amount: Mismatch (left 2 rows, right absent)");
    }

    #[test]
    fn json_omits_notes_by_default() {
        let json = JsonFormatter::new(FormatterConfig::plain()).format(&sample()).unwrap();
        assert!(!json.contains("\"notes\""));
    }
}
