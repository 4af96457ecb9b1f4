use serde::Serialize;

use crate::model::metrics::serialize_ratio;

/// Per-campaign totals with ratios recomputed from the summed counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CampaignAggregate {
    pub campaign: String,
    pub impressions: f64,
    pub clicks: f64,
    pub cost: f64,
    pub sales: f64,
    pub orders: f64,
    /// Cost of rows that produced zero orders.
    pub wasted_spend: f64,
    pub good_count: usize,
    pub bad_count: usize,
    pub total_rows: usize,
    pub ctr: f64,
    pub cvr: f64,
    #[serde(serialize_with = "serialize_ratio")]
    pub acos: f64,
}
