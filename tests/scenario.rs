use navlens::core::ScenarioCase;
use navlens::model::{evaluate_grid, today_table, ModelConfig};
use navlens::regime::stats::regime_report;
use navlens::report::{FairValueReport, RegimeAnalysisReport};

#[test]
fn grid_is_the_full_cartesian_product() {
    let config = ModelConfig::default();
    let rows = evaluate_grid(&config).unwrap();

    // 4 quarters x 4 price cases x 3 premium tiers
    assert_eq!(rows.len(), 48);
    for quarter in &config.quarters {
        let per_quarter = rows.iter().filter(|r| r.quarter == quarter.label).count();
        assert_eq!(per_quarter, 12, "quarter {}", quarter.label);
    }
}

#[test]
fn fair_price_strictly_increases_along_the_premium_ladder() {
    let config = ModelConfig::default();
    let rows = evaluate_grid(&config).unwrap();

    for quarter in &config.quarters {
        for case in ScenarioCase::ALL {
            let prices: Vec<f64> = rows
                .iter()
                .filter(|r| r.quarter == quarter.label && r.btc_scenario == case)
                .map(|r| r.fair_price)
                .collect();
            assert_eq!(prices.len(), config.premium_ladder.len());
            assert!(
                prices.windows(2).all(|w| w[1] > w[0]),
                "{} {:?}: {prices:?}",
                quarter.label,
                case
            );
        }
    }
}

#[test]
fn holdings_and_shares_compound_per_quarter() {
    let config = ModelConfig::default();
    let rows = evaluate_grid(&config).unwrap();

    for (idx, quarter) in config.quarters.iter().enumerate() {
        let t = (idx + 1) as i32;
        let row = rows
            .iter()
            .find(|r| r.quarter == quarter.label)
            .expect("quarter present");
        let expected_holdings =
            config.current.btc_holdings * (1.0 + config.holdings_growth_quarterly).powi(t);
        let expected_shares =
            config.current.shares_outstanding * (1.0 + config.shares_dilution_quarterly).powi(t);
        assert!((row.btc_holdings - expected_holdings).abs() < 1e-6);
        assert!((row.shares_outstanding - expected_shares).abs() < 1e-3);
    }
}

#[test]
fn today_table_reflects_the_benchmarks() {
    let config = ModelConfig::default();
    let today = today_table(&config).unwrap();

    assert_eq!(today.len(), 4);
    let premiums: Vec<f64> = today.iter().map(|t| t.nav_premium).collect();
    assert_eq!(
        premiums,
        vec![
            config.benchmarks.bear_market_median,
            config.benchmarks.historical_median,
            config.benchmarks.bull_market_mean,
            config.benchmarks.fair_value_range.1,
        ]
    );

    // upside is measured against the current market price
    for t in &today {
        let expected = (t.fair_price / config.current.stock_price - 1.0) * 100.0;
        assert!((t.upside_pct - expected).abs() < 1e-9);
    }
    // benchmarks are ordered, so fair prices must be too
    assert!(today.windows(2).all(|w| w[1].fair_price > w[0].fair_price));
}

#[test]
fn fair_value_report_serializes_expected_shape() {
    let config = ModelConfig::default();
    let report = FairValueReport::new(
        &config,
        today_table(&config).unwrap(),
        evaluate_grid(&config).unwrap(),
    );

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["config_version"], 3);
    assert_eq!(value["quarterly_projections"].as_array().unwrap().len(), 48);
    assert_eq!(value["today_fair_values"].as_array().unwrap().len(), 4);
    assert!(value["assumptions"]["holdings_growth_quarterly"].is_number());
    assert!(value["current_state"]["btc_price"].is_number());
}

#[test]
fn regime_report_counts_every_day_once() {
    use chrono::NaiveDate;
    use navlens::core::{DailyRecord, Regime};

    let records: Vec<DailyRecord> = (0u64..10)
        .map(|i| {
            // premium rises with growing increments so derivatives have variance
            let premium = 1.5 + 0.005 * (i * i) as f64;
            DailyRecord {
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Days::new(i),
                btc_close: 50_000.0,
                stock_close: 200.0,
                btc_holdings: 100.0,
                shares_outstanding: 1_000.0,
                market_cap: 200_000.0,
                btc_nav: 5_000_000.0,
                nav_premium: premium,
            }
        })
        .collect();
    let regimes: Vec<Regime> = (0..10)
        .map(|i| if i < 6 { Regime::Bull } else { Regime::Bear })
        .collect();

    let report = regime_report(&records, &regimes);
    assert_eq!(report.bull_market.days + report.bear_market.days, 10);
    assert!((report.bull_market.percentage - 60.0).abs() < 1e-9);
    assert!((report.bear_market.percentage - 40.0).abs() < 1e-9);
    // premium rises every day, so both sides see a positive average derivative
    assert!(report.bull_market.avg_derivative > 0.0);
    assert!(report.bear_market.avg_derivative > 0.0);

    let value = serde_json::to_value(RegimeAnalysisReport::new(records.len(), report)).unwrap();
    assert_eq!(value["records"], 10);
    assert!(value["regime_statistics"]["bull_market"]["median_nav_premium"].is_number());
    assert!(value["statistical_test"]["t_statistic"].is_number());
}
