pub mod json;
pub mod text;
pub mod view;

use crate::model::campaign::CampaignAggregate;
use crate::model::row::Row;
use crate::model::score::ScoreResult;
use crate::model::thresholds::ScoringProfile;

#[derive(Debug, Clone)]
pub struct SummaryData {
    pub tool_name: String,
    pub tool_version: String,
    pub input_path: String,
    pub profile: ScoringProfile,
    pub score: ScoreResult,
    pub n_rows: usize,
    pub n_campaigns: usize,
    pub good_rows: usize,
    pub bad_rows: usize,
    pub wasted_spend: f64,
}

#[derive(Debug, Clone)]
pub struct ReportContext {
    pub summary: SummaryData,
    /// Campaigns with the most zero-order spend, largest first.
    pub top_waste: Vec<CampaignAggregate>,
    /// Bad rows with the highest cost, largest first.
    pub top_bad_terms: Vec<Row>,
}

/// `$1234.50`; NaN reads as zero.
pub fn format_currency(v: f64) -> String {
    let v = if v.is_nan() { 0.0 } else { v };
    format!("${:.2}", v)
}

/// Percent with two decimals; unbounded ratios print as `∞`.
pub fn format_pct(v: f64) -> String {
    if !v.is_finite() {
        return "∞".to_string();
    }
    format!("{:.2}%", v * 100.0)
}

pub fn format_ratio(v: f64) -> String {
    if !v.is_finite() {
        return "∞".to_string();
    }
    format!("{:.3}", v)
}

/// Thousands separators, at most three fraction digits.
pub fn format_number(v: f64) -> String {
    if v.is_nan() {
        return "0".to_string();
    }
    if v.is_infinite() {
        return "∞".to_string();
    }
    let fixed = format!("{:.3}", v.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if v < 0.0 && (grouped != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    out.push_str(&grouped);
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Plain number for data files: shortest round-trip form, `Infinity` when unbounded.
pub fn format_plain(v: f64) -> String {
    if v.is_infinite() {
        if v > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if v.is_nan() {
        "0".to_string()
    } else {
        v.to_string()
    }
}

/// Quotes a CSV cell when it holds a quote, comma or line break.
pub fn escape_csv(value: &str) -> String {
    if value.contains('"') || value.contains(',') || value.contains('\n') || value.contains('\r') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
