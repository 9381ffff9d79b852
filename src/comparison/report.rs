//! Comparison output types.

use serde::{Serialize, Serializer};

/// Non-missing cell count for one side of a column comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnCount {
    /// The column exists on this side and has this many non-missing cells.
    Rows(usize),
    /// The column does not exist on this side. Distinct from `Rows(0)`.
    Absent,
}

impl ColumnCount {
    /// The row count, or `None` when absent.
    pub fn rows(self) -> Option<usize> {
        match self {
            ColumnCount::Rows(n) => Some(n),
            ColumnCount::Absent => None,
        }
    }
}

// Serialized as a bare number, or the string "absent".
impl Serialize for ColumnCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ColumnCount::Rows(n) => serializer.serialize_u64(*n as u64),
            ColumnCount::Absent => serializer.serialize_str("absent"),
        }
    }
}

/// Per-column comparison outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    /// Counts agree (and, for measure columns, sums agree).
    Match,
    /// Counts agree but sums differ. Measure columns only.
    PartialMatch,
    /// Counts differ, or the column is absent from one side.
    Mismatch,
}

impl MatchStatus {
    /// Short label used by formatters and notes.
    pub fn label(self) -> &'static str {
        match self {
            MatchStatus::Match => "Match",
            MatchStatus::PartialMatch => "PartialMatch",
            MatchStatus::Mismatch => "Mismatch",
        }
    }
}

/// One row of comparison output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnReport {
    /// Column name.
    pub name: String,
    /// Count in the left table.
    pub count_left: ColumnCount,
    /// Count in the right table.
    pub count_right: ColumnCount,
    /// Numeric sum in the left table; `None` means not applicable.
    pub sum_left: Option<f64>,
    /// Numeric sum in the right table; `None` means not applicable.
    pub sum_right: Option<f64>,
    /// Classification.
    pub status: MatchStatus,
}

/// Column names present on only one side.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ColumnDiff {
    /// Columns in the left table but not the right, in left column order.
    pub only_left: Vec<String>,
    /// Columns in the right table but not the left, in right column order.
    pub only_right: Vec<String>,
}

/// Full result of one [`super::compare()`] call.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ComparisonResult {
    /// One report per column in the chosen universe.
    pub reports: Vec<ColumnReport>,
    /// Columns only in the left table.
    pub columns_only_left: Vec<String>,
    /// Columns only in the right table.
    pub columns_only_right: Vec<String>,
}

impl ComparisonResult {
    /// Returns `true` if every report matches and no column is missing from either side.
    pub fn is_full_match(&self) -> bool {
        self.columns_only_left.is_empty()
            && self.columns_only_right.is_empty()
            && self.reports.iter().all(|r| r.status == MatchStatus::Match)
    }

    /// Reports whose status is not [`MatchStatus::Match`].
    pub fn non_matching(&self) -> impl Iterator<Item = &ColumnReport> {
        self.reports.iter().filter(|r| r.status != MatchStatus::Match)
    }
}
