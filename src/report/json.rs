use serde::Serialize;

use crate::model::score::ScoreResult;
use crate::model::thresholds::ScoringProfile;
use crate::report::SummaryData;

#[derive(Debug, Serialize)]
struct SummaryJson<'a> {
    tool: ToolJson<'a>,
    input: InputJson<'a>,
    profile: &'a ScoringProfile,
    rows: RowCountsJson,
    wasted_spend: f64,
    health: &'a ScoreResult,
}

#[derive(Debug, Serialize)]
struct ToolJson<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
struct InputJson<'a> {
    path: &'a str,
    n_rows: usize,
    n_campaigns: usize,
}

#[derive(Debug, Serialize)]
struct RowCountsJson {
    good: usize,
    bad: usize,
    neither: usize,
}

pub fn render_summary_json(data: &SummaryData) -> serde_json::Result<String> {
    let doc = SummaryJson {
        tool: ToolJson {
            name: &data.tool_name,
            version: &data.tool_version,
        },
        input: InputJson {
            path: &data.input_path,
            n_rows: data.n_rows,
            n_campaigns: data.n_campaigns,
        },
        profile: &data.profile,
        rows: RowCountsJson {
            good: data.good_rows,
            bad: data.bad_rows,
            neither: data
                .n_rows
                .saturating_sub(data.good_rows)
                .saturating_sub(data.bad_rows),
        },
        wasted_spend: data.wasted_spend,
        health: &data.score,
    };
    serde_json::to_string_pretty(&doc)
}
