//! Scenario-grid evaluation: the fixed Cartesian product of quarter × BTC
//! price case × premium tier, plus the "today" table evaluated against the
//! premium benchmarks.

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::{NavError, ScenarioCase};
use crate::model::config::ModelConfig;
use crate::model::fair_value::{fair_value, FairValueInputs};

/// One row of the projection grid.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectionRow {
    pub quarter: String,
    pub date: NaiveDate,
    pub btc_scenario: ScenarioCase,
    pub btc_price: f64,
    pub btc_holdings: f64,
    pub shares_outstanding: f64,
    pub premium_label: String,
    pub premium_target: f64,
    pub nav_per_share: f64,
    pub fair_price: f64,
}

/// One row of the today table.
#[derive(Debug, Clone, Serialize)]
pub struct TodayScenario {
    pub scenario: String,
    pub fair_price: f64,
    pub nav_premium: f64,
    pub upside_pct: f64,
}

/// Evaluates the full grid: every quarter, every price case, every premium
/// tier. Holdings and shares outstanding are compounded per quarter:
/// `value(t) = value(0) * (1 + rate)^t` with t the 1-based quarter index.
pub fn evaluate_grid(config: &ModelConfig) -> Result<Vec<ProjectionRow>, NavError> {
    let mut rows =
        Vec::with_capacity(config.quarters.len() * ScenarioCase::ALL.len() * config.premium_ladder.len());

    for (idx, quarter) in config.quarters.iter().enumerate() {
        let quarters_ahead = (idx + 1) as i32;
        let btc_holdings =
            config.current.btc_holdings * (1.0 + config.holdings_growth_quarterly).powi(quarters_ahead);
        let shares_outstanding =
            config.current.shares_outstanding * (1.0 + config.shares_dilution_quarterly).powi(quarters_ahead);

        for case in ScenarioCase::ALL {
            let btc_price = quarter.price(case);

            for tier in &config.premium_ladder {
                let breakdown = fair_value(&FairValueInputs {
                    btc_price,
                    btc_holdings,
                    shares_outstanding,
                    premium_target: tier.premium,
                    software_value_per_share: Some(config.software_value_per_share),
                })?;

                rows.push(ProjectionRow {
                    quarter: quarter.label.clone(),
                    date: quarter.date,
                    btc_scenario: case,
                    btc_price,
                    btc_holdings,
                    shares_outstanding,
                    premium_label: tier.label.clone(),
                    premium_target: tier.premium,
                    nav_per_share: breakdown.nav_per_share,
                    fair_price: breakdown.fair_price,
                });
            }
        }
    }

    Ok(rows)
}

/// Evaluates the current state against the premium benchmarks, producing the
/// today table (conservative / fair / bull / optimistic) with upside versus
/// the current market price.
pub fn today_table(config: &ModelConfig) -> Result<Vec<TodayScenario>, NavError> {
    let named: [(&str, f64); 4] = [
        (
            "Conservative (Bear Market Median)",
            config.benchmarks.bear_market_median,
        ),
        (
            "Fair Value (Historical Median)",
            config.benchmarks.historical_median,
        ),
        ("Bull Case (Bull Market Mean)", config.benchmarks.bull_market_mean),
        ("Optimistic (2.5x Premium)", config.benchmarks.fair_value_range.1),
    ];

    let mut out = Vec::with_capacity(named.len());
    for (name, premium) in named {
        let breakdown = fair_value(&FairValueInputs {
            btc_price: config.current.btc_price,
            btc_holdings: config.current.btc_holdings,
            shares_outstanding: config.current.shares_outstanding,
            premium_target: premium,
            software_value_per_share: Some(config.software_value_per_share),
        })?;

        out.push(TodayScenario {
            scenario: name.to_string(),
            fair_price: breakdown.fair_price,
            nav_premium: premium,
            upside_pct: (breakdown.fair_price / config.current.stock_price - 1.0) * 100.0,
        });
    }

    Ok(out)
}
