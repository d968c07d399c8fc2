//! Per-regime NAV premium statistics: distribution of the premium and its
//! first differences under each label, correlation between premium trend and
//! regime, and a Welch t-test between the bull and bear derivative samples.

use serde::Serialize;

use crate::core::{DailyRecord, Regime};
use crate::series::{diff, mean, median, pearson, rolling_mean_opt, std_dev, welch_t};

/// How many rows the derivative smoothing averages over.
const SMOOTH_WINDOW: usize = 7;

/// Critical value for the normal-approximation significance flag (alpha 0.05).
const T_CRITICAL: f64 = 1.96;

#[derive(Debug, Clone, Serialize)]
pub struct RegimeSideStats {
    pub days: usize,
    pub percentage: f64,
    pub avg_nav_premium: f64,
    pub median_nav_premium: f64,
    pub std_nav_premium: f64,
    pub avg_derivative: f64,
    pub median_derivative: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CorrelationStats {
    pub nav_derivative_vs_regime_raw: f64,
    pub nav_derivative_vs_regime_smooth: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TTestStats {
    pub t_statistic: f64,
    /// Normal approximation: |t| > 1.96 at alpha = 0.05.
    pub significant: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegimeReport {
    pub correlation: CorrelationStats,
    pub bull_market: RegimeSideStats,
    pub bear_market: RegimeSideStats,
    pub statistical_test: TTestStats,
}

fn side_stats(
    premiums: &[f64],
    derivatives: &[f64],
    days: usize,
    total_days: usize,
) -> RegimeSideStats {
    RegimeSideStats {
        days,
        percentage: days as f64 / total_days as f64 * 100.0,
        avg_nav_premium: mean(premiums),
        median_nav_premium: median(premiums),
        std_nav_premium: std_dev(premiums),
        avg_derivative: mean(derivatives),
        median_derivative: median(derivatives),
    }
}

/// Computes the full regime report over the merged series and its per-row
/// combined labels. `records` and `regimes` must be the same length.
pub fn regime_report(records: &[DailyRecord], regimes: &[Regime]) -> RegimeReport {
    assert_eq!(records.len(), regimes.len(), "one label per record");

    let premiums: Vec<f64> = records.iter().map(|r| r.nav_premium).collect();
    let derivatives = diff(&premiums);
    let smoothed = rolling_mean_opt(&derivatives, SMOOTH_WINDOW);

    let total = records.len();
    let mut bull_premiums = Vec::new();
    let mut bear_premiums = Vec::new();
    let mut bull_derivs = Vec::new();
    let mut bear_derivs = Vec::new();

    // paired samples for the correlations: rows where the derivative exists
    let mut deriv_sample = Vec::new();
    let mut smooth_sample = Vec::new();
    let mut regime_indicator_raw = Vec::new();
    let mut regime_indicator_smooth = Vec::new();

    for i in 0..total {
        let indicator = if regimes[i].is_bull() { 1.0 } else { 0.0 };
        match regimes[i] {
            Regime::Bull => bull_premiums.push(premiums[i]),
            Regime::Bear => bear_premiums.push(premiums[i]),
        }
        if let Some(d) = derivatives[i] {
            match regimes[i] {
                Regime::Bull => bull_derivs.push(d),
                Regime::Bear => bear_derivs.push(d),
            }
            deriv_sample.push(d);
            regime_indicator_raw.push(indicator);
        }
        if let Some(s) = smoothed[i] {
            smooth_sample.push(s);
            regime_indicator_smooth.push(indicator);
        }
    }

    let t = welch_t(&bull_derivs, &bear_derivs);

    RegimeReport {
        correlation: CorrelationStats {
            nav_derivative_vs_regime_raw: pearson(&deriv_sample, &regime_indicator_raw),
            nav_derivative_vs_regime_smooth: pearson(&smooth_sample, &regime_indicator_smooth),
        },
        bull_market: side_stats(&bull_premiums, &bull_derivs, bull_premiums.len(), total),
        bear_market: side_stats(&bear_premiums, &bear_derivs, bear_premiums.len(), total),
        statistical_test: TTestStats {
            t_statistic: t,
            significant: t.abs() > T_CRITICAL,
        },
    }
}
