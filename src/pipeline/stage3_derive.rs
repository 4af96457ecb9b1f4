use rayon::prelude::*;

use crate::model::metrics::Ratios;
use crate::model::row::{RawRow, Row};
use crate::model::thresholds::Thresholds;
use crate::pipeline::stage1_headers::{
    AD_GROUP_NAME, CAMPAIGN_NAME, CLICKS, COST, IMPRESSIONS, MATCH_TYPE, ORDERS_7D, SALES_7D,
    SEARCH_TERM,
};
use crate::pipeline::stage2_coerce::coerce_number;
use crate::pipeline::stage4_classify::classify;

/// Derives metrics and flags for one record. Depends on no other record.
pub fn derive_row(raw: &RawRow, thresholds: &Thresholds) -> Row {
    let impressions = coerce_number(raw.get(IMPRESSIONS));
    let clicks = coerce_number(raw.get(CLICKS));
    let cost = coerce_number(raw.get(COST));
    let sales = coerce_number(raw.get(SALES_7D));
    let orders = coerce_number(raw.get(ORDERS_7D));

    let ratios = Ratios::from_counts(impressions, clicks, cost, sales, orders);

    let mut row = Row {
        campaign: raw.get(CAMPAIGN_NAME).as_text(),
        ad_group: raw.get(AD_GROUP_NAME).as_text(),
        match_type: raw.get(MATCH_TYPE).as_text(),
        term: raw.get(SEARCH_TERM).as_text(),
        impressions,
        clicks,
        cost,
        sales,
        orders,
        ctr: ratios.ctr,
        cvr: ratios.cvr,
        acos: ratios.acos,
        is_good: false,
        is_bad: false,
    };
    let class = classify(&row, thresholds);
    row.is_good = class.is_good;
    row.is_bad = class.is_bad;
    row
}

/// Parallel map over a batch; output order matches input order.
pub fn derive_rows(records: &[RawRow], thresholds: &Thresholds) -> Vec<Row> {
    records
        .par_iter()
        .map(|raw| derive_row(raw, thresholds))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_derive.rs"]
mod tests;
