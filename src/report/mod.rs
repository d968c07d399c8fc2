//! JSON report assembly. Each report is a plain `Serialize` struct written
//! with [`crate::data::write_json_pretty`]; files are fully overwritten per
//! run.

use std::path::Path;

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::NavError;
use crate::data::write_json_pretty;
use crate::model::{CurrentState, ModelConfig, ProjectionRow, TodayScenario};
use crate::regime::stats::{CorrelationStats, RegimeReport, RegimeSideStats, TTestStats};

/// The assumptions block echoed into the projections report.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AssumptionsBlock {
    pub holdings_growth_quarterly: f64,
    pub shares_dilution_quarterly: f64,
    pub software_value_per_share: f64,
}

/// `fair_value_projections.json`: the today table plus the full grid.
#[derive(Debug, Clone, Serialize)]
pub struct FairValueReport {
    pub analysis_date: NaiveDate,
    pub config_version: u32,
    pub current_state: CurrentState,
    pub today_fair_values: Vec<TodayScenario>,
    pub quarterly_projections: Vec<ProjectionRow>,
    pub assumptions: AssumptionsBlock,
}

impl FairValueReport {
    pub fn new(
        config: &ModelConfig,
        today: Vec<TodayScenario>,
        projections: Vec<ProjectionRow>,
    ) -> Self {
        Self {
            analysis_date: config.analysis_date,
            config_version: config.version,
            current_state: config.current,
            today_fair_values: today,
            quarterly_projections: projections,
            assumptions: AssumptionsBlock {
                holdings_growth_quarterly: config.holdings_growth_quarterly,
                shares_dilution_quarterly: config.shares_dilution_quarterly,
                software_value_per_share: config.software_value_per_share,
            },
        }
    }

    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), NavError> {
        write_json_pretty(path, self)
    }
}

/// `regime_analysis_results.json`.
#[derive(Debug, Clone, Serialize)]
pub struct RegimeAnalysisReport {
    pub records: usize,
    pub correlation: CorrelationStats,
    pub regime_statistics: RegimeStatistics,
    pub statistical_test: TTestStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegimeStatistics {
    pub bull_market: RegimeSideStats,
    pub bear_market: RegimeSideStats,
}

impl RegimeAnalysisReport {
    pub fn new(records: usize, report: RegimeReport) -> Self {
        Self {
            records,
            correlation: report.correlation,
            regime_statistics: RegimeStatistics {
                bull_market: report.bull_market,
                bear_market: report.bear_market,
            },
            statistical_test: report.statistical_test,
        }
    }

    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), NavError> {
        write_json_pretty(path, self)
    }
}
