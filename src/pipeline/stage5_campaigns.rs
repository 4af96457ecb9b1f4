use std::collections::BTreeMap;

use crate::model::campaign::CampaignAggregate;
use crate::model::metrics::Ratios;
use crate::model::row::Row;
use crate::pipeline::fold_chunks;

/// Running sums for one campaign.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CampaignTotals {
    pub impressions: f64,
    pub clicks: f64,
    pub cost: f64,
    pub sales: f64,
    pub orders: f64,
    pub wasted_spend: f64,
    pub good_count: usize,
    pub bad_count: usize,
    pub total_rows: usize,
}

impl CampaignTotals {
    pub fn push(&mut self, row: &Row) {
        self.impressions += row.impressions;
        self.clicks += row.clicks;
        self.cost += row.cost;
        self.sales += row.sales;
        self.orders += row.orders;
        if row.orders == 0.0 {
            self.wasted_spend += row.cost;
        }
        if row.is_good {
            self.good_count += 1;
        }
        if row.is_bad {
            self.bad_count += 1;
        }
        self.total_rows += 1;
    }

    pub fn merge(&mut self, other: &CampaignTotals) {
        self.impressions += other.impressions;
        self.clicks += other.clicks;
        self.cost += other.cost;
        self.sales += other.sales;
        self.orders += other.orders;
        self.wasted_spend += other.wasted_spend;
        self.good_count += other.good_count;
        self.bad_count += other.bad_count;
        self.total_rows += other.total_rows;
    }

    pub fn finish(self, campaign: String) -> CampaignAggregate {
        let ratios = Ratios::from_counts(
            self.impressions,
            self.clicks,
            self.cost,
            self.sales,
            self.orders,
        );
        CampaignAggregate {
            campaign,
            impressions: self.impressions,
            clicks: self.clicks,
            cost: self.cost,
            sales: self.sales,
            orders: self.orders,
            wasted_spend: self.wasted_spend,
            good_count: self.good_count,
            bad_count: self.bad_count,
            total_rows: self.total_rows,
            ctr: ratios.ctr,
            cvr: ratios.cvr,
            acos: ratios.acos,
        }
    }
}

/// Campaign groups keyed by the raw campaign string (case-sensitive, untrimmed).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CampaignAccumulator {
    groups: BTreeMap<String, CampaignTotals>,
}

impl CampaignAccumulator {
    pub fn push(&mut self, row: &Row) {
        match self.groups.get_mut(&row.campaign) {
            Some(totals) => totals.push(row),
            None => {
                let mut totals = CampaignTotals::default();
                totals.push(row);
                self.groups.insert(row.campaign.clone(), totals);
            }
        }
    }

    /// Field-wise addition; partials over disjoint rows merge to the full result.
    pub fn merge(mut self, other: CampaignAccumulator) -> CampaignAccumulator {
        for (campaign, totals) in other.groups {
            match self.groups.get_mut(&campaign) {
                Some(existing) => existing.merge(&totals),
                None => {
                    self.groups.insert(campaign, totals);
                }
            }
        }
        self
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// One aggregate per campaign, ascending by name.
    pub fn finish(self) -> Vec<CampaignAggregate> {
        self.groups
            .into_iter()
            .map(|(campaign, totals)| totals.finish(campaign))
            .collect()
    }
}

pub fn aggregate_campaigns(rows: &[Row]) -> Vec<CampaignAggregate> {
    fold_chunks(
        rows,
        |acc: &mut CampaignAccumulator, row| acc.push(row),
        CampaignAccumulator::merge,
    )
    .finish()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_campaigns.rs"]
mod tests;
