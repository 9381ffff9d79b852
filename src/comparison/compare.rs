//! Column-by-column table comparison.

use std::collections::{HashMap, HashSet};

use crate::types::{Column, Table};

use super::coerce::{coerce_column, summarize};
use super::diff::diff_columns;
use super::policy::{ColumnUniverse, ComparePolicy, SumEquality};
use super::report::{ColumnCount, ColumnReport, ComparisonResult, MatchStatus};

/// Compare two tables column by column.
///
/// For each column in the universe selected by `policy`:
///
/// - Absent from either side: that side is [`ColumnCount::Absent`] with no sum, and the status
///   is [`MatchStatus::Mismatch`].
/// - Identifier-like name (contains `id`, case-insensitive): non-missing cells are counted, no
///   sums; `Match` if the counts agree, else `Mismatch`.
/// - Otherwise (measure column): cells are coerced to numbers (unparseable cells become
///   missing); the count is the number of coerced cells and the sum their total. `Match` if
///   counts and sums agree, `PartialMatch` if only counts agree, else `Mismatch`.
///
/// Inputs are never modified; calling this twice with the same tables yields equal results.
pub fn compare(left: &Table, right: &Table, policy: &ComparePolicy) -> ComparisonResult {
    let diff = diff_columns(left, right);
    let left_index = index_columns(left);
    let right_index = index_columns(right);

    let universe: Vec<&str> = match policy.universe {
        ColumnUniverse::UnionAll => left
            .column_names()
            .chain(diff.only_right.iter().map(String::as_str))
            .collect(),
        ColumnUniverse::CommonOnly => left
            .column_names()
            .filter(|n| right_index.contains_key(n))
            .collect(),
    };

    let mut seen = HashSet::with_capacity(universe.len());
    let reports: Vec<ColumnReport> = universe
        .into_iter()
        .filter(|name| seen.insert(*name))
        .map(|name| {
            compare_column(
                name,
                left_index.get(name).copied(),
                right_index.get(name).copied(),
                policy.sum_equality,
            )
        })
        .collect();

    tracing::debug!(
        columns = reports.len(),
        non_matching = reports.iter().filter(|r| r.status != MatchStatus::Match).count(),
        only_left = diff.only_left.len(),
        only_right = diff.only_right.len(),
        "compared tables"
    );

    ComparisonResult {
        reports,
        columns_only_left: diff.only_left,
        columns_only_right: diff.only_right,
    }
}

// First column wins on duplicate names, matching `Table::column`.
fn index_columns(table: &Table) -> HashMap<&str, &Column> {
    let mut index = HashMap::with_capacity(table.column_count());
    for c in table.columns() {
        index.entry(c.name.as_str()).or_insert(c);
    }
    index
}

#[derive(Debug, Clone, Copy)]
struct SideStats {
    count: usize,
    sum: Option<f64>,
}

fn side_stats(column: &Column, identifier: bool) -> SideStats {
    if identifier {
        SideStats {
            count: column.non_null_count(),
            sum: None,
        }
    } else {
        let summary = summarize(&coerce_column(column));
        SideStats {
            count: summary.count,
            sum: Some(summary.sum),
        }
    }
}

fn compare_column(
    name: &str,
    left: Option<&Column>,
    right: Option<&Column>,
    sum_equality: SumEquality,
) -> ColumnReport {
    let identifier = crate::types::is_identifier_like(name);
    let left = left.map(|c| side_stats(c, identifier));
    let right = right.map(|c| side_stats(c, identifier));

    let status = match (left, right) {
        (Some(l), Some(r)) => classify(l, r, sum_equality),
        // A column missing from one side never matches, whatever the other side holds.
        _ => MatchStatus::Mismatch,
    };

    ColumnReport {
        name: name.to_owned(),
        count_left: left.map_or(ColumnCount::Absent, |s| ColumnCount::Rows(s.count)),
        count_right: right.map_or(ColumnCount::Absent, |s| ColumnCount::Rows(s.count)),
        sum_left: left.and_then(|s| s.sum),
        sum_right: right.and_then(|s| s.sum),
        status,
    }
}

fn classify(left: SideStats, right: SideStats, sum_equality: SumEquality) -> MatchStatus {
    let counts_equal = left.count == right.count;
    match (left.sum, right.sum) {
        (Some(l), Some(r)) if counts_equal && sum_equality.sums_equal(l, r) => MatchStatus::Match,
        (Some(_), Some(_)) if counts_equal => MatchStatus::PartialMatch,
        (None, None) if counts_equal => MatchStatus::Match,
        _ => MatchStatus::Mismatch,
    }
}
