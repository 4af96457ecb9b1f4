use super::*;

fn row(campaign: &str, term: &str, cost: f64, acos: f64) -> Row {
    Row {
        campaign: campaign.to_string(),
        ad_group: "Group".to_string(),
        match_type: "PHRASE".to_string(),
        term: term.to_string(),
        impressions: 100.0,
        clicks: 10.0,
        cost,
        sales: 0.0,
        orders: 0.0,
        ctr: 0.1,
        cvr: 0.0,
        acos,
        is_good: acos <= 0.35,
        is_bad: acos > 0.35,
    }
}

fn sample() -> Vec<Row> {
    vec![
        row("Brand", "red shoes", 5.0, 0.2),
        row("Generic", "Blue Shoes", 20.0, f64::INFINITY),
        row("Brand", "hat", 12.0, 0.5),
        row("Generic", "socks", 12.0, 0.1),
    ]
}

#[test]
fn test_default_sorts_by_cost_descending() {
    let rows = sample();
    let out = apply_query(&rows, &RowQuery::default());
    let costs: Vec<f64> = out.iter().map(|r| r.cost).collect();
    assert_eq!(costs, vec![20.0, 12.0, 12.0, 5.0]);
    // equal costs keep input order
    assert_eq!(out[1].term, "hat");
    assert_eq!(out[2].term, "socks");
}

#[test]
fn test_filter_is_case_insensitive_across_text_columns() {
    let rows = sample();
    let query = RowQuery {
        filter: Some("SHOES".to_string()),
        ..RowQuery::default()
    };
    let out = apply_query(&rows, &query);
    assert_eq!(out.len(), 2);

    let by_campaign = RowQuery {
        filter: Some("brand".to_string()),
        ..RowQuery::default()
    };
    assert_eq!(apply_query(&rows, &by_campaign).len(), 2);

    let empty = RowQuery {
        filter: Some(String::new()),
        ..RowQuery::default()
    };
    assert_eq!(apply_query(&rows, &empty).len(), 4);
}

#[test]
fn test_infinite_acos_sorts_last_ascending() {
    let rows = sample();
    let query = RowQuery {
        filter: None,
        sort_by: SortKey::Acos,
        direction: SortDirection::Ascending,
    };
    let out = apply_query(&rows, &query);
    assert_eq!(out[0].term, "socks");
    assert!(out[3].acos.is_infinite());
}

#[test]
fn test_partitions() {
    let rows = sample();
    assert_eq!(good_rows(&rows).len(), 2);
    assert_eq!(bad_rows(&rows).len(), 2);
}
