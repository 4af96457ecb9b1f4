use serde::{Serialize, Serializer};

/// Efficiency ratios shared by rows, campaign aggregates and the overall score.
///
/// Always computed from summed counts, never averaged from per-row ratios.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Ratios {
    pub ctr: f64,
    pub cvr: f64,
    #[serde(serialize_with = "serialize_ratio")]
    pub acos: f64,
}

impl Ratios {
    pub fn from_counts(impressions: f64, clicks: f64, cost: f64, sales: f64, orders: f64) -> Self {
        Self {
            ctr: ctr(clicks, impressions),
            cvr: cvr(orders, clicks),
            acos: acos(cost, sales),
        }
    }
}

pub fn ctr(clicks: f64, impressions: f64) -> f64 {
    if impressions > 0.0 {
        clicks / impressions
    } else {
        0.0
    }
}

pub fn cvr(orders: f64, clicks: f64) -> f64 {
    if clicks > 0.0 { orders / clicks } else { 0.0 }
}

/// Spend with no attributed sales has unbounded cost of sales.
pub fn acos(cost: f64, sales: f64) -> f64 {
    if sales > 0.0 {
        cost / sales
    } else if cost > 0.0 {
        f64::INFINITY
    } else {
        0.0
    }
}

pub fn clamp10(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else if x < 0.0 {
        0.0
    } else if x > 10.0 {
        10.0
    } else {
        x
    }
}

/// Rounds the exact binary value to one decimal.
///
/// `8.45` is stored just below 8.45 and rounds to 8.4. Exact ties (quarters
/// such as 0.25 or 8.75) round away from zero.
pub fn round1(x: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let quarters = x * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        return (x * 10.0).round() / 10.0;
    }
    format!("{x:.1}").parse().unwrap_or(x)
}

/// JSON has no infinity; unbounded ratios are written as the string `"Infinity"`.
pub fn serialize_ratio<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_infinite() {
        let text = if *value > 0.0 { "Infinity" } else { "-Infinity" };
        serializer.serialize_str(text)
    } else {
        serializer.serialize_f64(*value)
    }
}
