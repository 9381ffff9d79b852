//! Column-set difference.

use std::collections::HashSet;

use crate::types::Table;

use super::report::ColumnDiff;

/// Symmetric difference of the two tables' column-name sets.
///
/// `only_left` keeps left column order and `only_right` keeps right column order.
pub fn diff_columns(left: &Table, right: &Table) -> ColumnDiff {
    let left_names: HashSet<&str> = left.column_names().collect();
    let right_names: HashSet<&str> = right.column_names().collect();

    ColumnDiff {
        only_left: only_in(left, &right_names),
        only_right: only_in(right, &left_names),
    }
}

fn only_in(table: &Table, other: &HashSet<&str>) -> Vec<String> {
    let mut seen = HashSet::new();
    table
        .column_names()
        .filter(|n| !other.contains(n) && seen.insert(*n))
        .map(str::to_owned)
        .collect()
}
