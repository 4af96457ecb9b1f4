use crate::report::{ReportContext, format_currency, format_number, format_pct};

pub fn render_report_text(ctx: &ReportContext) -> String {
    let s = &ctx.summary;
    let score = &s.score;
    let t = &s.profile.thresholds;
    let mut out = String::new();

    out.push_str("PPC Search Term Health Report\n");
    out.push_str("=============================\n\n");

    out.push_str("1. Health score\n");
    out.push_str(&format!(
        "Score: {:.1}/10 ({})\n",
        score.score,
        score.label.as_str()
    ));
    out.push_str(&format!(
        "Breakdown: Eff {:.1} | Conv {:.1} | Rel {:.1} | Waste {:.1}\n\n",
        score.breakdown.efficiency,
        score.breakdown.conversion,
        score.breakdown.relevance,
        score.breakdown.waste
    ));

    out.push_str("2. Overall metrics\n");
    out.push_str(&format!("ACOS: {}\n", format_pct(score.overall.acos)));
    out.push_str(&format!("CTR: {}\n", format_pct(score.overall.ctr)));
    out.push_str(&format!("CVR: {}\n", format_pct(score.overall.cvr)));
    out.push_str(&format!(
        "% Spend w/ 0 Orders: {}\n",
        format_pct(score.overall.wasted_spend_share)
    ));
    let totals = &score.overall.totals;
    out.push_str(&format!(
        "Spend: {} | Sales: {} | Clicks: {} | Impressions: {} | Orders: {}\n\n",
        format_currency(totals.cost),
        format_currency(totals.sales),
        format_number(totals.clicks),
        format_number(totals.impressions),
        format_number(totals.orders)
    ));

    out.push_str("3. Search terms\n");
    out.push_str(&format!(
        "Rows: {} | Good: {} | Bad: {} | Campaigns: {}\n",
        format_number(s.n_rows as f64),
        format_number(s.good_rows as f64),
        format_number(s.bad_rows as f64),
        format_number(s.n_campaigns as f64)
    ));
    out.push_str(&format!(
        "Rules: target ACOS {}, min CTR {}, min CVR {}, zero-order spend {}\n",
        format_pct(t.target_acos),
        format_pct(t.min_ctr),
        format_pct(t.min_cvr),
        format_currency(t.zero_order_waste)
    ));
    if ctx.top_bad_terms.is_empty() {
        out.push_str("No bad search terms.\n\n");
    } else {
        out.push_str("Costliest bad terms:\n");
        for row in &ctx.top_bad_terms {
            out.push_str(&format!(
                "  - {} [{} / {}]: cost {}, orders {}, ACOS {}\n",
                row.term,
                row.campaign,
                row.match_type,
                format_currency(row.cost),
                format_number(row.orders),
                format_pct(row.acos)
            ));
        }
        out.push('\n');
    }

    out.push_str("4. Wasted spend by campaign\n");
    out.push_str(&format!(
        "Total zero-order spend: {}\n",
        format_currency(s.wasted_spend)
    ));
    for c in &ctx.top_waste {
        out.push_str(&format!(
            "  - {}: wasted {}, ACOS {}, CTR {}, CVR {}\n",
            c.campaign,
            format_currency(c.wasted_spend),
            format_pct(c.acos),
            format_pct(c.ctr),
            format_pct(c.cvr)
        ));
    }

    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
