use std::cmp::Ordering;

use clap::ValueEnum;

use crate::model::row::Row;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortKey {
    Campaign,
    AdGroup,
    MatchType,
    Term,
    Impressions,
    Clicks,
    #[default]
    Cost,
    Sales,
    Orders,
    Ctr,
    Cvr,
    Acos,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

/// Search box and column sort over derived rows.
#[derive(Debug, Clone, Default)]
pub struct RowQuery {
    /// Case-insensitive substring matched against campaign, term, ad group and match type.
    pub filter: Option<String>,
    pub sort_by: SortKey,
    pub direction: SortDirection,
}

pub fn apply_query<'a>(rows: &'a [Row], query: &RowQuery) -> Vec<&'a Row> {
    let needle = query
        .filter
        .as_deref()
        .map(str::to_lowercase)
        .filter(|s| !s.is_empty());

    let mut out: Vec<&Row> = match &needle {
        Some(k) => rows.iter().filter(|r| row_matches(r, k)).collect(),
        None => rows.iter().collect(),
    };

    // stable: ties keep input order in either direction
    out.sort_by(|a, b| {
        let ord = compare_by(a, b, query.sort_by);
        match query.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    out
}

pub fn good_rows(rows: &[Row]) -> Vec<&Row> {
    rows.iter().filter(|r| r.is_good).collect()
}

pub fn bad_rows(rows: &[Row]) -> Vec<&Row> {
    rows.iter().filter(|r| r.is_bad).collect()
}

fn row_matches(row: &Row, needle: &str) -> bool {
    row.campaign.to_lowercase().contains(needle)
        || row.term.to_lowercase().contains(needle)
        || row.ad_group.to_lowercase().contains(needle)
        || row.match_type.to_lowercase().contains(needle)
}

fn compare_by(a: &Row, b: &Row, key: SortKey) -> Ordering {
    match key {
        SortKey::Campaign => a.campaign.cmp(&b.campaign),
        SortKey::AdGroup => a.ad_group.cmp(&b.ad_group),
        SortKey::MatchType => a.match_type.cmp(&b.match_type),
        SortKey::Term => a.term.cmp(&b.term),
        SortKey::Impressions => cmp_f64(a.impressions, b.impressions),
        SortKey::Clicks => cmp_f64(a.clicks, b.clicks),
        SortKey::Cost => cmp_f64(a.cost, b.cost),
        SortKey::Sales => cmp_f64(a.sales, b.sales),
        SortKey::Orders => cmp_f64(a.orders, b.orders),
        SortKey::Ctr => cmp_f64(a.ctr, b.ctr),
        SortKey::Cvr => cmp_f64(a.cvr, b.cvr),
        SortKey::Acos => cmp_f64(a.acos, b.acos),
    }
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/view.rs"]
mod tests;
