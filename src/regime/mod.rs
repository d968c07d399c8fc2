//! Bull/bear regime classification of a price series.
//!
//! Three independent per-row rules, combined by simple majority vote:
//! a 50/200 moving-average crossover, the sign of the 30-day return, and
//! distance from the running all-time high. Each row depends only on prior
//! rows of the price series, never on other rows' labels.

pub mod stats;

use serde::{Deserialize, Serialize};

use crate::core::Regime;
use crate::series::{expanding_max, pct_change, rolling_mean};

/// Tunable thresholds for the three rules.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RegimeParams {
    pub fast_ma: usize,
    pub slow_ma: usize,
    pub momentum_period: usize,
    /// Bull while drawdown from the all-time high stays above this (e.g.
    /// -0.20 keeps prices within 20% of the high in the Bull camp).
    pub drawdown_floor: f64,
}

impl Default for RegimeParams {
    fn default() -> Self {
        Self {
            fast_ma: 50,
            slow_ma: 200,
            momentum_period: 30,
            drawdown_floor: -0.20,
        }
    }
}

/// Per-row rule outputs plus the combined label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegimeSignals {
    pub ma_crossover: Regime,
    pub momentum: Regime,
    pub drawdown_rule: Regime,
    pub drawdown: f64,
    pub combined: Regime,
}

fn bull_if(cond: bool) -> Regime {
    if cond { Regime::Bull } else { Regime::Bear }
}

/// Bull iff at least two of the three rules say Bull.
pub fn majority_vote(ma: Regime, momentum: Regime, drawdown: Regime) -> Regime {
    let bulls = [ma, momentum, drawdown]
        .iter()
        .filter(|r| r.is_bull())
        .count();
    bull_if(bulls >= 2)
}

/// Classifies every row of a close-price series.
///
/// Moving averages use minimum-period windows (averaged over however many
/// observations exist near the start). The momentum rule reads Bear during
/// its warm-up, where the 30-period change has no lookback yet.
pub fn classify_series(closes: &[f64], params: &RegimeParams) -> Vec<RegimeSignals> {
    let fast = rolling_mean(closes, params.fast_ma);
    let slow = rolling_mean(closes, params.slow_ma);
    let momentum = pct_change(closes, params.momentum_period);
    let ath = expanding_max(closes);

    let mut out = Vec::with_capacity(closes.len());
    for i in 0..closes.len() {
        let ma_crossover = bull_if(fast[i] > slow[i]);
        let momentum_rule = bull_if(momentum[i].is_some_and(|m| m > 0.0));
        let drawdown = (closes[i] - ath[i]) / ath[i];
        let drawdown_rule = bull_if(drawdown > params.drawdown_floor);

        out.push(RegimeSignals {
            ma_crossover,
            momentum: momentum_rule,
            drawdown_rule,
            drawdown,
            combined: majority_vote(ma_crossover, momentum_rule, drawdown_rule),
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steady_uptrend_is_bull() {
        let closes: Vec<f64> = (1..=300).map(|i| 100.0 + i as f64).collect();
        let signals = classify_series(&closes, &RegimeParams::default());
        assert_eq!(signals.last().unwrap().combined, Regime::Bull);
    }

    #[test]
    fn deep_drawdown_flips_bear() {
        let mut closes: Vec<f64> = (1..=250).map(|i| 100.0 + i as f64).collect();
        // collapse to half the peak and stay there
        closes.extend(std::iter::repeat(175.0).take(120));
        let signals = classify_series(&closes, &RegimeParams::default());
        let last = signals.last().unwrap();
        assert_eq!(last.drawdown_rule, Regime::Bear);
        assert_eq!(last.combined, Regime::Bear);
    }
}
