//! Human-readable notes for non-matching columns.

use super::report::{ColumnCount, ComparisonResult};

/// One line per report whose status is not `Match`, in report order.
///
/// Example: `Amount: Mismatch (left 2 rows, right 3 rows)`.
pub fn mismatch_notes(result: &ComparisonResult) -> Vec<String> {
    result
        .non_matching()
        .map(|r| {
            format!(
                "{}: {} (left {}, right {})",
                r.name,
                r.status.label(),
                describe_count(r.count_left),
                describe_count(r.count_right)
            )
        })
        .collect()
}

fn describe_count(count: ColumnCount) -> String {
    match count {
        ColumnCount::Rows(1) => "1 row".to_string(),
        ColumnCount::Rows(n) => format!("{n} rows"),
        ColumnCount::Absent => "absent".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::{ColumnReport, MatchStatus};

    fn report(name: &str, l: ColumnCount, r: ColumnCount, status: MatchStatus) -> ColumnReport {
        ColumnReport {
            name: name.to_string(),
            count_left: l,
            count_right: r,
            sum_left: None,
            sum_right: None,
            status,
        }
    }

    #[test]
    fn notes_skip_matches_and_keep_order() {
        let result = ComparisonResult {
            reports: vec![
                report("Total", ColumnCount::Rows(2), ColumnCount::Rows(2), MatchStatus::PartialMatch),
                report("ID", ColumnCount::Rows(3), ColumnCount::Rows(3), MatchStatus::Match),
                report("Amount", ColumnCount::Rows(1), ColumnCount::Absent, MatchStatus::Mismatch),
            ],
            ..Default::default()
        };
        assert_eq!(
            mismatch_notes(&result),
            vec![
                "Total: PartialMatch (left 2 rows, right 2 rows)".to_string(),
                "Amount: Mismatch (left 1 row, right absent)".to_string(),
            ]
        );
    }

    #[test]
    fn all_matching_yields_no_notes() {
        let result = ComparisonResult {
            reports: vec![report("ID", ColumnCount::Rows(1), ColumnCount::Rows(1), MatchStatus::Match)],
            ..Default::default()
        };
        assert!(mismatch_notes(&result).is_empty());
    }
}
