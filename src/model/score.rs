use serde::Serialize;

use crate::model::metrics::serialize_ratio;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreLabel {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreLabel {
    /// Inclusive lower bounds, checked from the top.
    pub fn from_score(score: f64) -> Self {
        if score >= 8.5 {
            ScoreLabel::Excellent
        } else if score >= 7.0 {
            ScoreLabel::Good
        } else if score >= 5.5 {
            ScoreLabel::Fair
        } else {
            ScoreLabel::Poor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreLabel::Excellent => "Excellent",
            ScoreLabel::Good => "Good",
            ScoreLabel::Fair => "Fair",
            ScoreLabel::Poor => "Poor",
        }
    }
}

/// Component sub-scores, each in [0, 10] and rounded to one decimal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub efficiency: f64,
    pub conversion: f64,
    pub relevance: f64,
    pub waste: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Totals {
    pub impressions: f64,
    pub clicks: f64,
    pub cost: f64,
    pub sales: f64,
    pub orders: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct OverallMetrics {
    #[serde(serialize_with = "serialize_ratio")]
    pub acos: f64,
    pub ctr: f64,
    pub cvr: f64,
    /// Zero-order cost as a fraction of total cost.
    pub wasted_spend_share: f64,
    pub totals: Totals,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreResult {
    pub score: f64,
    pub label: ScoreLabel,
    pub breakdown: ScoreBreakdown,
    pub overall: OverallMetrics,
}
