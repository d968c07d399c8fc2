//! navlens: bitcoin treasury NAV premium analytics.
//!
//! Computes a fair-value model for a listed company whose balance sheet is
//! dominated by bitcoin holdings: the historically observed premium of its
//! market capitalization over the market value of the held bitcoin (the NAV
//! premium), a bull/bear regime classification of the bitcoin series, and a
//! scenario grid of projected fair prices. Results are written as JSON
//! reports and PNG charts.

pub mod chart;
pub mod core;
pub mod data;
pub mod fetch;
pub mod model;
pub mod regime;
pub mod report;
pub mod series;

pub use crate::core::{
    ChartClient, ChartClientBuilder, DailyRecord, HoldingsEvent, NavError, PriceBar, Regime,
    ScenarioCase, SeriesMeta,
};
pub use crate::fetch::{HistoryRequest, Interval, Range};
pub use crate::model::{
    evaluate_grid, fair_value, today_table, FairValueBreakdown, FairValueInputs, ModelConfig,
    ProjectionRow, SharesSchedule, TodayScenario,
};
pub use crate::regime::{classify_series, majority_vote, RegimeParams, RegimeSignals};
pub use crate::report::{FairValueReport, RegimeAnalysisReport};
