//! Versioned model assumptions.
//!
//! Everything the scenario evaluator treats as a market assumption lives here
//! as data: the current state, the premium benchmarks observed historically,
//! the per-quarter BTC price cases, the growth/dilution rates and the premium
//! ladder. The defaults reproduce the November 2025 calibration; a JSON file
//! with the same shape can replace any of it without a code edit.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{NavError, ScenarioCase};

/// Point-in-time snapshot the projections start from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CurrentState {
    pub btc_price: f64,
    pub stock_price: f64,
    pub btc_holdings: f64,
    pub shares_outstanding: f64,
    pub nav_premium: f64,
}

/// Historically observed NAV premium levels, from the regime analysis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PremiumBenchmarks {
    pub historical_mean: f64,
    pub historical_median: f64,
    pub bull_market_mean: f64,
    pub bull_market_median: f64,
    pub bear_market_mean: f64,
    pub bear_market_median: f64,
    pub historical_min: f64,
    pub historical_max: f64,
    /// Conservative fair-value band (low, high).
    pub fair_value_range: (f64, f64),
}

/// Projected BTC prices for one quarter, one per [`ScenarioCase`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuarterScenario {
    pub label: String,
    pub date: NaiveDate,
    pub bear: f64,
    pub base: f64,
    pub bull: f64,
    pub moon: f64,
}

impl QuarterScenario {
    pub fn price(&self, case: ScenarioCase) -> f64 {
        match case {
            ScenarioCase::Bear => self.bear,
            ScenarioCase::Base => self.base,
            ScenarioCase::Bull => self.bull,
            ScenarioCase::Moon => self.moon,
        }
    }
}

/// One rung of the premium ladder applied to every price case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PremiumTier {
    pub label: String,
    pub premium: f64,
}

/// The complete, versioned set of model assumptions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Bumped whenever the calibration below changes.
    pub version: u32,
    pub analysis_date: NaiveDate,
    pub current: CurrentState,
    pub benchmarks: PremiumBenchmarks,
    pub quarters: Vec<QuarterScenario>,
    /// Quarterly growth of BTC holdings from continued accumulation.
    pub holdings_growth_quarterly: f64,
    /// Quarterly share dilution from at-the-market offerings.
    pub shares_dilution_quarterly: f64,
    pub software_value_per_share: f64,
    pub premium_ladder: Vec<PremiumTier>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).expect("valid date");
        Self {
            version: 3,
            analysis_date: d(2025, 11, 6),
            current: CurrentState {
                btc_price: 101_141.77,
                stock_price: 237.20,
                btc_holdings: 641_205.0,
                shares_outstanding: 320_000_000.0,
                nav_premium: 1.17,
            },
            benchmarks: PremiumBenchmarks {
                historical_mean: 1.98,
                historical_median: 1.79,
                bull_market_mean: 2.06,
                bull_market_median: 1.98,
                bear_market_mean: 1.88,
                bear_market_median: 1.62,
                historical_min: 0.81,
                historical_max: 7.42,
                fair_value_range: (1.5, 2.5),
            },
            quarters: vec![
                QuarterScenario {
                    label: "Q1_2026".into(),
                    date: d(2026, 3, 31),
                    bear: 75_000.0,
                    base: 95_000.0,
                    bull: 125_000.0,
                    moon: 150_000.0,
                },
                QuarterScenario {
                    label: "Q2_2026".into(),
                    date: d(2026, 6, 30),
                    bear: 70_000.0,
                    base: 105_000.0,
                    bull: 140_000.0,
                    moon: 175_000.0,
                },
                QuarterScenario {
                    label: "Q3_2026".into(),
                    date: d(2026, 9, 30),
                    bear: 65_000.0,
                    base: 115_000.0,
                    bull: 155_000.0,
                    moon: 200_000.0,
                },
                QuarterScenario {
                    label: "Q4_2026".into(),
                    date: d(2026, 12, 31),
                    bear: 60_000.0,
                    base: 125_000.0,
                    bull: 170_000.0,
                    moon: 225_000.0,
                },
            ],
            holdings_growth_quarterly: 0.03,
            shares_dilution_quarterly: 0.02,
            software_value_per_share: 15.0,
            premium_ladder: vec![
                PremiumTier {
                    label: "conservative".into(),
                    premium: 1.5,
                },
                PremiumTier {
                    label: "fair_value".into(),
                    premium: 1.8,
                },
                PremiumTier {
                    label: "bull".into(),
                    premium: 2.1,
                },
            ],
        }
    }
}

impl ModelConfig {
    /// Loads a calibration from a JSON file with the same shape as [`Default`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, NavError> {
        let body = fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&body)?;
        tracing::info!(
            path = %path.as_ref().display(),
            version = config.version,
            "loaded model configuration"
        );
        Ok(config)
    }
}
