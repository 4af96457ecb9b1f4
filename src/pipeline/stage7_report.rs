use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::model::campaign::CampaignAggregate;
use crate::model::row::Row;
use crate::model::score::ScoreResult;
use crate::model::thresholds::ScoringProfile;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::view::{RowQuery, apply_query, bad_rows, good_rows};
use crate::report::{ReportContext, SummaryData, escape_csv, format_plain};

const TOP_WASTE_CAMPAIGNS: usize = 5;
const TOP_BAD_TERMS: usize = 10;

pub const ROW_COLUMNS: [&str; 14] = [
    "Campaign",
    "Ad Group",
    "Match",
    "Term",
    "Impressions",
    "Clicks",
    "Cost",
    "Sales7d",
    "Orders7d",
    "CTR",
    "CVR",
    "ACOS",
    "Good",
    "Bad",
];

pub const CAMPAIGN_COLUMNS: [&str; 13] = [
    "Campaign",
    "Impressions",
    "Clicks",
    "Cost",
    "Sales7d",
    "Orders7d",
    "WastedSpend",
    "GoodRows",
    "BadRows",
    "TotalRows",
    "CTR",
    "CVR",
    "ACOS",
];

#[derive(Debug, Clone)]
pub struct ReportInput<'a> {
    pub input_path: String,
    pub rows: &'a [Row],
    pub campaigns: &'a [CampaignAggregate],
    pub score: &'a ScoreResult,
    pub profile: &'a ScoringProfile,
    pub query: &'a RowQuery,
    pub tool_name: String,
    pub tool_version: String,
}

pub fn write_reports(input: &ReportInput<'_>, out_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(out_dir)?;

    let viewed = apply_query(input.rows, input.query);
    write_rows_file(&out_dir.join("rows.csv"), &viewed)?;
    write_rows_file(&out_dir.join("good_rows.csv"), &good_rows(input.rows))?;
    write_rows_file(&out_dir.join("bad_rows.csv"), &bad_rows(input.rows))?;

    let mut w = BufWriter::new(File::create(out_dir.join("campaigns.csv"))?);
    write_campaigns_csv(&mut w, input.campaigns)?;
    w.flush()?;

    let summary = build_summary(input);
    let json = render_summary_json(&summary).map_err(io::Error::other)?;
    write_text(&out_dir.join("summary.json"), &json)?;

    let ctx = build_report_context(input, summary);
    write_text(&out_dir.join("report.txt"), &render_report_text(&ctx))?;

    Ok(())
}

pub fn write_rows_csv<W: Write>(w: &mut W, rows: &[&Row]) -> io::Result<()> {
    writeln!(w, "{}", ROW_COLUMNS.join(","))?;
    for row in rows {
        let cells = [
            escape_csv(&row.campaign),
            escape_csv(&row.ad_group),
            escape_csv(&row.match_type),
            escape_csv(&row.term),
            format_plain(row.impressions),
            format_plain(row.clicks),
            format_plain(row.cost),
            format_plain(row.sales),
            format_plain(row.orders),
            format_plain(row.ctr),
            format_plain(row.cvr),
            format_plain(row.acos),
            row.is_good.to_string(),
            row.is_bad.to_string(),
        ];
        writeln!(w, "{}", cells.join(","))?;
    }
    Ok(())
}

pub fn write_campaigns_csv<W: Write>(w: &mut W, campaigns: &[CampaignAggregate]) -> io::Result<()> {
    writeln!(w, "{}", CAMPAIGN_COLUMNS.join(","))?;
    for c in campaigns {
        let cells = [
            escape_csv(&c.campaign),
            format_plain(c.impressions),
            format_plain(c.clicks),
            format_plain(c.cost),
            format_plain(c.sales),
            format_plain(c.orders),
            format_plain(c.wasted_spend),
            c.good_count.to_string(),
            c.bad_count.to_string(),
            c.total_rows.to_string(),
            format_plain(c.ctr),
            format_plain(c.cvr),
            format_plain(c.acos),
        ];
        writeln!(w, "{}", cells.join(","))?;
    }
    Ok(())
}

fn write_rows_file(path: &Path, rows: &[&Row]) -> io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    write_rows_csv(&mut w, rows)?;
    w.flush()
}

fn write_text(path: &Path, contents: &str) -> io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

pub fn build_summary(input: &ReportInput<'_>) -> SummaryData {
    let good = input.rows.iter().filter(|r| r.is_good).count();
    let bad = input.rows.iter().filter(|r| r.is_bad).count();
    let wasted_spend = input.campaigns.iter().map(|c| c.wasted_spend).sum();
    SummaryData {
        tool_name: input.tool_name.clone(),
        tool_version: input.tool_version.clone(),
        input_path: input.input_path.clone(),
        profile: *input.profile,
        score: *input.score,
        n_rows: input.rows.len(),
        n_campaigns: input.campaigns.len(),
        good_rows: good,
        bad_rows: bad,
        wasted_spend,
    }
}

pub fn build_report_context(input: &ReportInput<'_>, summary: SummaryData) -> ReportContext {
    let mut top_waste: Vec<CampaignAggregate> = input
        .campaigns
        .iter()
        .filter(|c| c.wasted_spend > 0.0)
        .cloned()
        .collect();
    top_waste.sort_by(|a, b| {
        match b
            .wasted_spend
            .partial_cmp(&a.wasted_spend)
            .unwrap_or(std::cmp::Ordering::Equal)
        {
            std::cmp::Ordering::Equal => a.campaign.cmp(&b.campaign),
            other => other,
        }
    });
    top_waste.truncate(TOP_WASTE_CAMPAIGNS);

    let worst = RowQuery::default();
    let top_bad_terms = apply_query(input.rows, &worst)
        .into_iter()
        .filter(|r| r.is_bad)
        .take(TOP_BAD_TERMS)
        .cloned()
        .collect();

    ReportContext {
        summary,
        top_waste,
        top_bad_terms,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage7_report.rs"]
mod tests;
