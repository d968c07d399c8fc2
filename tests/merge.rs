use chrono::NaiveDate;
use navlens::core::{HoldingsEvent, NavError, PriceBar};
use navlens::data::merge::merge_daily;
use navlens::model::SharesSchedule;

fn d(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

fn bar(date: NaiveDate, close: f64) -> PriceBar {
    PriceBar {
        date,
        open: close,
        high: close,
        low: close,
        close,
        volume: None,
    }
}

fn flat_schedule(shares: f64) -> SharesSchedule {
    SharesSchedule {
        baseline: shares,
        breakpoints: vec![],
    }
}

#[test]
fn inner_join_and_forward_fill() {
    let btc: Vec<PriceBar> = (1..=8).map(|i| bar(d(i), 100.0 + i as f64)).collect();
    // stock is missing day 3: that date must drop out of the join
    let stock: Vec<PriceBar> = (1..=8)
        .filter(|i| *i != 3)
        .map(|i| bar(d(i), 10.0 * i as f64))
        .collect();
    let holdings = vec![
        HoldingsEvent { date: d(2), cumulative_btc: 100.0 },
        HoldingsEvent { date: d(5), cumulative_btc: 150.0 },
    ];

    let records = merge_daily(&btc, &stock, &holdings, &flat_schedule(1000.0)).unwrap();

    // day 1 precedes the first holdings event, day 3 fails the inner join
    let dates: Vec<u32> = records
        .iter()
        .map(|r| r.date.format("%d").to_string().parse().unwrap())
        .collect();
    assert_eq!(dates, vec![2, 4, 5, 6, 7, 8]);

    // forward-fill: 100 until day 4, 150 from day 5 on
    for r in &records {
        let expected = if r.date < d(5) { 100.0 } else { 150.0 };
        assert_eq!(r.btc_holdings, expected, "holdings on {}", r.date);
    }

    // cumulative holdings never decrease and are never missing
    assert!(records
        .windows(2)
        .all(|w| w[1].btc_holdings >= w[0].btc_holdings));
    assert!(records.iter().all(|r| r.btc_holdings.is_finite()));
}

#[test]
fn premium_is_market_cap_over_btc_nav() {
    let btc = vec![bar(d(1), 50_000.0)];
    let stock = vec![bar(d(1), 200.0)];
    let holdings = vec![HoldingsEvent { date: d(1), cumulative_btc: 10.0 }];

    let records = merge_daily(&btc, &stock, &holdings, &flat_schedule(5_000.0)).unwrap();
    assert_eq!(records.len(), 1);
    let r = &records[0];

    assert_eq!(r.market_cap, 200.0 * 5_000.0);
    assert_eq!(r.btc_nav, 50_000.0 * 10.0);
    assert!((r.nav_premium - (200.0 * 5_000.0) / (50_000.0 * 10.0)).abs() < 1e-12);
}

#[test]
fn rows_before_first_event_are_dropped() {
    let btc: Vec<PriceBar> = (1..=4).map(|i| bar(d(i), 100.0)).collect();
    let stock = btc.clone();
    let holdings = vec![HoldingsEvent { date: d(4), cumulative_btc: 5.0 }];

    let records = merge_daily(&btc, &stock, &holdings, &flat_schedule(100.0)).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].date, d(4));
}

#[test]
fn zero_holdings_event_is_rejected() {
    let btc = vec![bar(d(1), 100.0)];
    let stock = vec![bar(d(1), 10.0)];
    let holdings = vec![HoldingsEvent { date: d(1), cumulative_btc: 0.0 }];

    let err = merge_daily(&btc, &stock, &holdings, &flat_schedule(100.0)).unwrap_err();
    assert!(matches!(err, NavError::InvalidInput(_)));
}
