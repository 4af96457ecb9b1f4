use super::*;

fn row(campaign: &str, cost: f64, orders: f64) -> Row {
    let clicks = 10.0;
    let sales = orders * 40.0;
    Row {
        campaign: campaign.to_string(),
        ad_group: "G".to_string(),
        match_type: "BROAD".to_string(),
        term: format!("term {cost}"),
        impressions: 1000.0,
        clicks,
        cost,
        sales,
        orders,
        ctr: clicks / 1000.0,
        cvr: orders / clicks,
        acos: crate::model::metrics::acos(cost, sales),
        is_good: orders > 0.0,
        is_bad: orders == 0.0 && cost >= 25.0,
    }
}

fn find<'a>(aggs: &'a [CampaignAggregate], name: &str) -> &'a CampaignAggregate {
    aggs.iter().find(|a| a.campaign == name).unwrap()
}

#[test]
fn test_wasted_spend_and_counts() {
    let rows = vec![row("Alpha", 10.0, 0.0), row("Alpha", 20.0, 1.0)];
    let aggs = aggregate_campaigns(&rows);
    assert_eq!(aggs.len(), 1);
    let a = &aggs[0];
    assert_eq!(a.wasted_spend, 10.0);
    assert_eq!(a.total_rows, 2);
    assert_eq!(a.cost, 30.0);
    assert_eq!(a.good_count, 1);
    assert_eq!(a.bad_count, 0);
}

#[test]
fn test_ratios_from_summed_totals() {
    let mut a = row("Alpha", 10.0, 1.0);
    a.impressions = 100.0;
    a.clicks = 50.0;
    let mut b = row("Alpha", 30.0, 1.0);
    b.impressions = 900.0;
    b.clicks = 10.0;
    let aggs = aggregate_campaigns(&[a, b]);
    let agg = &aggs[0];
    assert_eq!(agg.ctr, 60.0 / 1000.0);
    assert_eq!(agg.cvr, 2.0 / 60.0);
    assert_eq!(agg.acos, 40.0 / 80.0);
}

#[test]
fn test_grouping_is_case_sensitive_and_untrimmed() {
    let rows = vec![
        row("Alpha", 1.0, 1.0),
        row("alpha", 2.0, 1.0),
        row("Alpha ", 3.0, 1.0),
    ];
    let aggs = aggregate_campaigns(&rows);
    assert_eq!(aggs.len(), 3);
    assert_eq!(find(&aggs, "alpha").cost, 2.0);
    assert_eq!(find(&aggs, "Alpha ").cost, 3.0);
}

#[test]
fn test_campaign_without_sales_has_infinite_acos() {
    let aggs = aggregate_campaigns(&[row("Waste", 40.0, 0.0)]);
    assert!(aggs[0].acos.is_infinite());
    assert_eq!(aggs[0].wasted_spend, 40.0);
    assert_eq!(aggs[0].bad_count, 1);
}

#[test]
fn test_order_independent() {
    let names = ["A", "B", "C", "D", "E"];
    let rows: Vec<Row> = (0..10_000)
        .map(|i| row(names[i % names.len()], (i % 97) as f64, (i % 3) as f64))
        .collect();
    let forward = aggregate_campaigns(&rows);

    let mut shuffled = rows.clone();
    shuffled.reverse();
    let (left, right) = shuffled.split_at(3_333);
    let mut interleaved = right.to_vec();
    interleaved.extend_from_slice(left);
    let backward = aggregate_campaigns(&interleaved);

    assert_eq!(forward.len(), names.len());
    for (a, b) in forward.iter().zip(backward.iter()) {
        assert_eq!(a.campaign, b.campaign);
        assert_eq!(a.total_rows, b.total_rows);
        assert_eq!(a.good_count, b.good_count);
        assert_eq!(a.bad_count, b.bad_count);
        assert!((a.cost - b.cost).abs() < 1e-9);
        assert!((a.wasted_spend - b.wasted_spend).abs() < 1e-9);
        assert!((a.sales - b.sales).abs() < 1e-9);
    }
}

#[test]
fn test_merge_of_partials_matches_single_pass() {
    let rows: Vec<Row> = (0..50)
        .map(|i| row(if i % 2 == 0 { "Even" } else { "Odd" }, i as f64, (i % 4) as f64))
        .collect();

    let mut whole = CampaignAccumulator::default();
    for r in &rows {
        whole.push(r);
    }

    let (head, tail) = rows.split_at(17);
    let mut left = CampaignAccumulator::default();
    head.iter().for_each(|r| left.push(r));
    let mut right = CampaignAccumulator::default();
    tail.iter().for_each(|r| right.push(r));

    let merged = right.merge(left);
    assert_eq!(merged.len(), 2);
    assert_eq!(merged.finish(), whole.finish());
}

#[test]
fn test_empty_input() {
    assert!(aggregate_campaigns(&[]).is_empty());
    assert!(CampaignAccumulator::default().is_empty());
}
