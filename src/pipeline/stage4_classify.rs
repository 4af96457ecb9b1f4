use crate::model::row::Row;
use crate::model::thresholds::Thresholds;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowClass {
    pub is_good: bool,
    pub is_bad: bool,
}

/// Over target on both efficiency and conversion, or a zero-order row that spent
/// at least the waste threshold.
pub fn is_bad_row(row: &Row, thresholds: &Thresholds) -> bool {
    let inefficient = row.acos > thresholds.target_acos && row.cvr < thresholds.min_cvr;
    let wasted = row.orders == 0.0 && row.cost >= thresholds.zero_order_waste;
    inefficient || wasted
}

/// On-target efficiency and conversion. Ignores the waste rule; see [`classify`].
pub fn is_good_row(row: &Row, thresholds: &Thresholds) -> bool {
    row.acos <= thresholds.target_acos && row.cvr >= thresholds.min_cvr
}

/// Bad takes precedence: a row that trips either bad rule is never good.
///
/// The two predicates overlap only when `min_cvr` is 0, where a zero-order row
/// with spend over the waste threshold would otherwise satisfy both.
pub fn classify(row: &Row, thresholds: &Thresholds) -> RowClass {
    let is_bad = is_bad_row(row, thresholds);
    let is_good = !is_bad && is_good_row(row, thresholds);
    RowClass { is_good, is_bad }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_classify.rs"]
mod tests;
