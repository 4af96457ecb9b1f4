use super::*;
use crate::model::score::{OverallMetrics, ScoreBreakdown, ScoreLabel, ScoreResult, Totals};
use crate::model::thresholds::ScoringProfile;
use crate::report::SummaryData;

fn context(acos: f64) -> ReportContext {
    ReportContext {
        summary: SummaryData {
            tool_name: "ppc-healthqc".to_string(),
            tool_version: "0.0.0".to_string(),
            input_path: "terms.csv".to_string(),
            profile: ScoringProfile::default(),
            score: ScoreResult {
                score: 7.2,
                label: ScoreLabel::Good,
                breakdown: ScoreBreakdown {
                    efficiency: 8.0,
                    conversion: 6.5,
                    relevance: 10.0,
                    waste: 5.0,
                },
                overall: OverallMetrics {
                    acos,
                    ctr: 0.004,
                    cvr: 0.1,
                    wasted_spend_share: 0.3,
                    totals: Totals {
                        impressions: 125_000.0,
                        clicks: 500.0,
                        cost: 400.0,
                        sales: 1000.0,
                        orders: 50.0,
                    },
                },
            },
            n_rows: 1200,
            n_campaigns: 3,
            good_rows: 400,
            bad_rows: 100,
            wasted_spend: 120.0,
        },
        top_waste: Vec::new(),
        top_bad_terms: Vec::new(),
    }
}

#[test]
fn test_score_card_lines() {
    let text = render_report_text(&context(0.4));
    assert!(text.contains("Score: 7.2/10 (Good)"));
    assert!(text.contains("Breakdown: Eff 8.0 | Conv 6.5 | Rel 10.0 | Waste 5.0"));
    assert!(text.contains("ACOS: 40.00%"));
    assert!(text.contains("Impressions: 125,000"));
    assert!(text.contains("Rows: 1,200 | Good: 400 | Bad: 100 | Campaigns: 3"));
    assert!(text.contains("No bad search terms."));
    assert!(text.contains("Total zero-order spend: $120.00"));
}

#[test]
fn test_infinite_acos_renders_symbol() {
    let text = render_report_text(&context(f64::INFINITY));
    assert!(text.contains("ACOS: ∞"));
}
