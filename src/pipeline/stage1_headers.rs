use thiserror::Error;

pub const CAMPAIGN_NAME: &str = "Campaign Name";
pub const AD_GROUP_NAME: &str = "Ad Group Name";
pub const MATCH_TYPE: &str = "Match Type";
pub const SEARCH_TERM: &str = "Customer Search Term";
pub const IMPRESSIONS: &str = "Impressions";
pub const CLICKS: &str = "Clicks";
pub const COST: &str = "Cost";
pub const SALES_7D: &str = "7 Day Total Sales";
pub const ORDERS_7D: &str = "7 Day Total Orders (#)";

pub const REQUIRED_COLUMNS: [&str; 9] = [
    CAMPAIGN_NAME,
    AD_GROUP_NAME,
    MATCH_TYPE,
    SEARCH_TERM,
    IMPRESSIONS,
    CLICKS,
    COST,
    SALES_7D,
    ORDERS_7D,
];

/// The source header lacks required columns; no row of the batch is derived.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing columns: {}", .missing.join(", "))]
pub struct SchemaError {
    pub missing: Vec<String>,
}

/// Required columns absent from `headers`, in required order. Exact match only.
pub fn validate_headers<S: AsRef<str>>(headers: &[S]) -> Vec<&'static str> {
    REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|required| !headers.iter().any(|h| h.as_ref() == *required))
        .collect()
}

pub fn ensure_headers<S: AsRef<str>>(headers: &[S]) -> Result<(), SchemaError> {
    let missing = validate_headers(headers);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(SchemaError {
            missing: missing.into_iter().map(str::to_string).collect(),
        })
    }
}
