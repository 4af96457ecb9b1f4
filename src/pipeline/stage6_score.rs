use crate::model::metrics::{Ratios, clamp10, round1};
use crate::model::row::Row;
use crate::model::score::{OverallMetrics, ScoreBreakdown, ScoreLabel, ScoreResult, Totals};
use crate::model::thresholds::{Normalization, ScoringProfile, Thresholds, Weights};
use crate::pipeline::fold_chunks;

/// Batch-wide sums feeding the score.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreTotals {
    pub totals: Totals,
    /// Cost of rows with zero orders.
    pub zero_order_cost: f64,
}

impl ScoreTotals {
    pub fn push(&mut self, row: &Row) {
        self.totals.impressions += row.impressions;
        self.totals.clicks += row.clicks;
        self.totals.cost += row.cost;
        self.totals.sales += row.sales;
        self.totals.orders += row.orders;
        if row.orders == 0.0 {
            self.zero_order_cost += row.cost;
        }
    }

    pub fn merge(mut self, other: ScoreTotals) -> ScoreTotals {
        self.totals.impressions += other.totals.impressions;
        self.totals.clicks += other.totals.clicks;
        self.totals.cost += other.totals.cost;
        self.totals.sales += other.totals.sales;
        self.totals.orders += other.totals.orders;
        self.zero_order_cost += other.zero_order_cost;
        self
    }

    pub fn overall(&self) -> OverallMetrics {
        let t = &self.totals;
        let ratios = Ratios::from_counts(t.impressions, t.clicks, t.cost, t.sales, t.orders);
        let wasted_spend_share = if t.cost > 0.0 {
            self.zero_order_cost / t.cost
        } else {
            0.0
        };
        OverallMetrics {
            acos: ratios.acos,
            ctr: ratios.ctr,
            cvr: ratios.cvr,
            wasted_spend_share,
            totals: *t,
        }
    }
}

pub fn accumulate_totals(rows: &[Row]) -> ScoreTotals {
    fold_chunks(
        rows,
        |acc: &mut ScoreTotals, row| acc.push(row),
        ScoreTotals::merge,
    )
}

/// Overall health score with the default curve anchors.
pub fn compute_overall_score(rows: &[Row], thresholds: &Thresholds, weights: &Weights) -> ScoreResult {
    compute_overall_score_with(rows, &ScoringProfile::new(*thresholds, *weights))
}

pub fn compute_overall_score_with(rows: &[Row], profile: &ScoringProfile) -> ScoreResult {
    score_from_totals(&accumulate_totals(rows), profile)
}

pub fn score_from_totals(totals: &ScoreTotals, profile: &ScoringProfile) -> ScoreResult {
    let overall = totals.overall();
    let t = &profile.thresholds;
    let w = &profile.weights;
    let n: &Normalization = &profile.normalization;

    let efficiency = efficiency_score(overall.acos, t.target_acos, n.efficiency_zero_at_multiplier);
    let conversion = ramp_score(overall.cvr, t.min_cvr * n.cvr_good_multiplier);
    let relevance = ramp_score(overall.ctr, t.min_ctr * n.ctr_good_multiplier);
    let waste = waste_score(
        overall.wasted_spend_share,
        n.waste_good_share,
        n.waste_bad_share,
    );

    let score = round1(
        efficiency * w.efficiency
            + conversion * w.conversion
            + relevance * w.relevance
            + waste * w.waste,
    );

    ScoreResult {
        score,
        label: ScoreLabel::from_score(score),
        breakdown: ScoreBreakdown {
            efficiency: round1(efficiency),
            conversion: round1(conversion),
            relevance: round1(relevance),
            waste: round1(waste),
        },
        overall,
    }
}

/// 10 at the target ACOS falling linearly to 0 at `target * zero_at_multiplier`.
/// Unbounded ACOS scores 0.
pub fn efficiency_score(acos: f64, target: f64, zero_at_multiplier: f64) -> f64 {
    if !acos.is_finite() {
        return 0.0;
    }
    let span = target * zero_at_multiplier - target;
    if span <= 0.0 {
        return if acos <= target { 10.0 } else { 0.0 };
    }
    clamp10(10.0 * (1.0 - (acos - target) / span))
}

/// 0 at a zero rate rising linearly to 10 at `good_at`. A non-positive bar is always met.
pub fn ramp_score(rate: f64, good_at: f64) -> f64 {
    if good_at <= 0.0 {
        return 10.0;
    }
    clamp10(10.0 * (rate / good_at))
}

/// 10 up to `good_share`, 0 from `bad_share`, linear in between.
pub fn waste_score(share: f64, good_share: f64, bad_share: f64) -> f64 {
    if share <= good_share {
        10.0
    } else if share >= bad_share {
        0.0
    } else {
        let span = bad_share - good_share;
        clamp10(10.0 * (1.0 - (share - good_share) / span))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_score.rs"]
mod tests;
