use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/* ----- PRICE SERIES (shared by fetch/, data/ and regime/) ----- */

/// One daily observation of an instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: Option<u64>,
}

/// One cumulative-holdings event (a purchase disclosure). Sparse; the merge
/// step forward-fills these to daily granularity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingsEvent {
    pub date: NaiveDate,
    #[serde(rename = "cumulative_btc_holdings")]
    pub cumulative_btc: f64,
}

/// One fully derived row of the merged daily series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub btc_close: f64,
    pub stock_close: f64,
    pub btc_holdings: f64,
    pub shares_outstanding: f64,
    pub market_cap: f64,
    pub btc_nav: f64,
    pub nav_premium: f64,
}

/* ----- REGIME ----- */

/// Coarse market classification derived from price trend heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Regime {
    Bull,
    Bear,
}

impl Regime {
    pub fn as_str(self) -> &'static str {
        match self {
            Regime::Bull => "Bull",
            Regime::Bear => "Bear",
        }
    }

    pub fn is_bull(self) -> bool {
        matches!(self, Regime::Bull)
    }
}

/* ----- SCENARIOS ----- */

/// The four projected BTC price cases evaluated per quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioCase {
    Bear,
    Base,
    Bull,
    Moon,
}

impl ScenarioCase {
    pub const ALL: [ScenarioCase; 4] = [
        ScenarioCase::Bear,
        ScenarioCase::Base,
        ScenarioCase::Bull,
        ScenarioCase::Moon,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ScenarioCase::Bear => "bear",
            ScenarioCase::Base => "base",
            ScenarioCase::Bull => "bull",
            ScenarioCase::Moon => "moon",
        }
    }
}

/* ----- FETCH META ----- */

/// Metadata reported alongside a fetched price series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesMeta {
    pub symbol: String,
    pub currency: Option<String>,
    pub exchange: Option<String>,
    pub regular_market_price: Option<f64>,
}
