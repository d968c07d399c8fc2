use navlens::core::NavError;
use navlens::model::{fair_value, FairValueInputs};

fn inputs(premium: f64, software: Option<f64>) -> FairValueInputs {
    FairValueInputs {
        btc_price: 101_141.77,
        btc_holdings: 641_205.0,
        shares_outstanding: 320_000_000.0,
        premium_target: premium,
        software_value_per_share: software,
    }
}

#[test]
fn formula_matches_direct_arithmetic() {
    let cases = [
        (50_000.0, 100_000.0, 10_000_000.0, 1.0, 0.0),
        (101_141.77, 641_205.0, 320_000_000.0, 1.79, 0.0),
        (125_000.0, 700_000.0, 350_000_000.0, 2.1, 15.0),
        (60_000.0, 1.0, 1.0, 0.5, 3.0),
    ];
    for (p, h, s, premium, sw) in cases {
        let b = fair_value(&FairValueInputs {
            btc_price: p,
            btc_holdings: h,
            shares_outstanding: s,
            premium_target: premium,
            software_value_per_share: Some(sw),
        })
        .unwrap();
        let expected = (p * h / s) * premium + sw;
        assert!(
            (b.fair_price - expected).abs() < 1e-9,
            "fair price {} != {}",
            b.fair_price,
            expected
        );
        assert!((b.nav_per_share - p * h / s).abs() < 1e-9);
    }
}

#[test]
fn historical_median_premium_example() {
    // current state at 1.79x premium, no software component
    let b = fair_value(&inputs(1.79, None)).unwrap();
    assert!((b.nav_per_share - 202.6644).abs() < 1e-3);
    assert!((b.fair_price - 362.7693).abs() < 1e-3);
    assert_eq!(b.software_component, 0.0);
}

#[test]
fn software_component_is_additive() {
    let bare = fair_value(&inputs(1.8, None)).unwrap();
    let with_sw = fair_value(&inputs(1.8, Some(15.0))).unwrap();
    assert!((with_sw.fair_price - bare.fair_price - 15.0).abs() < 1e-9);
    assert_eq!(with_sw.btc_component, bare.btc_component);
}

#[test]
fn fair_price_strictly_increases_with_premium() {
    let mut last = f64::NEG_INFINITY;
    for premium in [0.5, 1.0, 1.5, 1.62, 1.79, 1.98, 2.06, 2.5] {
        let b = fair_value(&inputs(premium, Some(15.0))).unwrap();
        assert!(
            b.fair_price > last,
            "premium {premium} did not increase the fair price"
        );
        last = b.fair_price;
    }
}

#[test]
fn zero_shares_outstanding_is_rejected() {
    let mut bad = inputs(1.8, None);
    bad.shares_outstanding = 0.0;
    assert!(matches!(fair_value(&bad), Err(NavError::InvalidInput(_))));

    bad.shares_outstanding = -1.0;
    assert!(matches!(fair_value(&bad), Err(NavError::InvalidInput(_))));

    bad.shares_outstanding = f64::NAN;
    assert!(matches!(fair_value(&bad), Err(NavError::InvalidInput(_))));
}
