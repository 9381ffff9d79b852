//! Comparison policy.

use serde::Serialize;

/// Largest useful `SumEquality::Rounded` precision; an `f64` carries about 15 significant digits.
pub const MAX_SUM_DECIMALS: u32 = 15;

/// Which column names get a [`super::ColumnReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnUniverse {
    /// Only columns present in both tables.
    CommonOnly,
    /// Every column of either table; absent sides are reported as such.
    #[default]
    UnionAll,
}

/// How measure-column sums are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SumEquality {
    /// Exact `f64` equality on the unrounded sums.
    #[default]
    Exact,
    /// Both sums are rounded (half away from zero) to `decimals` places before comparing.
    ///
    /// `decimals` above [`MAX_SUM_DECIMALS`] is treated as [`MAX_SUM_DECIMALS`].
    Rounded { decimals: u32 },
}

impl SumEquality {
    /// Returns `true` if `a` and `b` are equal under this rule.
    pub fn sums_equal(self, a: f64, b: f64) -> bool {
        match self {
            SumEquality::Exact => a == b,
            SumEquality::Rounded { decimals } => {
                let scale = 10f64.powi(decimals.min(MAX_SUM_DECIMALS) as i32);
                let (sa, sb) = (a * scale, b * scale);
                // Sums too large to scale are compared as-is.
                if !sa.is_finite() || !sb.is_finite() {
                    return a == b;
                }
                sa.round() == sb.round()
            }
        }
    }
}

/// Options controlling [`super::compare()`].
///
/// Use [`Default`] for union-of-columns, exact-sum behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ComparePolicy {
    /// Column universe to report on.
    pub universe: ColumnUniverse,
    /// Sum equality rule for measure columns.
    pub sum_equality: SumEquality,
}

impl ComparePolicy {
    /// Policy reporting only the columns common to both tables.
    pub fn common_only() -> Self {
        Self {
            universe: ColumnUniverse::CommonOnly,
            ..Default::default()
        }
    }

    /// Policy reporting the union of both tables' columns.
    pub fn union_all() -> Self {
        Self::default()
    }
}
