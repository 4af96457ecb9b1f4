use super::*;

fn thresholds() -> Thresholds {
    Thresholds {
        target_acos: 0.35,
        min_ctr: 0.003,
        min_cvr: 0.08,
        zero_order_waste: 25.0,
    }
}

fn base_row() -> Row {
    Row {
        campaign: "C".to_string(),
        ad_group: "G".to_string(),
        match_type: "phrase".to_string(),
        term: "x".to_string(),
        impressions: 1000.0,
        clicks: 100.0,
        cost: 30.0,
        sales: 200.0,
        orders: 8.0,
        ctr: 0.1,
        cvr: 0.08,
        acos: 0.15,
        is_good: false,
        is_bad: false,
    }
}

#[test]
fn test_bad_when_acos_over_target_and_cvr_under_min() {
    let t = thresholds();
    let row = Row {
        acos: 0.45,
        cvr: 0.07,
        ..base_row()
    };
    assert!(is_bad_row(&row, &t));
    assert_eq!(
        classify(&row, &t),
        RowClass {
            is_good: false,
            is_bad: true
        }
    );
}

#[test]
fn test_bad_when_zero_orders_and_spend_at_threshold() {
    let t = thresholds();
    let row = Row {
        orders: 0.0,
        cost: 26.0,
        sales: 0.0,
        cvr: 0.0,
        acos: f64::INFINITY,
        ..base_row()
    };
    assert!(is_bad_row(&row, &t));

    let at_threshold = Row {
        cost: 25.0,
        ..row.clone()
    };
    assert!(is_bad_row(&at_threshold, &t));

    let under = Row {
        cost: 24.99,
        acos: f64::INFINITY,
        cvr: 0.1,
        ..row
    };
    assert!(!is_bad_row(&under, &t));
}

#[test]
fn test_good_when_on_target() {
    let t = thresholds();
    let row = Row {
        acos: 0.30,
        cvr: 0.10,
        ..base_row()
    };
    assert!(is_good_row(&row, &t));
    assert!(classify(&row, &t).is_good);

    let exact = Row {
        acos: 0.35,
        cvr: 0.08,
        ..base_row()
    };
    assert!(classify(&exact, &t).is_good);
}

#[test]
fn test_middle_band_is_neither() {
    let t = thresholds();
    let on_target_low_cvr = Row {
        acos: 0.20,
        cvr: 0.05,
        ..base_row()
    };
    assert_eq!(classify(&on_target_low_cvr, &t), RowClass::default());

    let over_target_high_cvr = Row {
        acos: 0.60,
        cvr: 0.20,
        ..base_row()
    };
    assert_eq!(classify(&over_target_high_cvr, &t), RowClass::default());
}

#[test]
fn test_zero_min_cvr_overlap_resolves_to_bad() {
    let t = Thresholds {
        min_cvr: 0.0,
        ..thresholds()
    };
    let row = Row {
        orders: 0.0,
        cost: 30.0,
        sales: 200.0,
        cvr: 0.0,
        acos: 0.15,
        ..base_row()
    };
    assert!(is_good_row(&row, &t));
    assert!(is_bad_row(&row, &t));

    let class = classify(&row, &t);
    assert!(class.is_bad);
    assert!(!class.is_good);
}
