//! Leveraged-position arithmetic: equity, profit and return for a margined
//! stock position evaluated across the fair-value scenarios.

use serde::Serialize;

use crate::core::NavError;

/// A margined long position entered at `entry_price`.
#[derive(Debug, Clone, Copy)]
pub struct LeveragedPosition {
    pub capital: f64,
    pub leverage: f64,
    pub entry_price: f64,
}

impl LeveragedPosition {
    pub fn position_size(&self) -> f64 {
        self.capital * self.leverage
    }

    pub fn shares(&self) -> f64 {
        self.position_size() / self.entry_price
    }

    pub fn borrowed(&self) -> f64 {
        self.position_size() - self.capital
    }
}

/// A named scenario to evaluate the position at.
#[derive(Debug, Clone, Serialize)]
pub struct LeverageScenario {
    pub name: String,
    pub period: String,
    pub stock_price: f64,
    pub btc_price: f64,
}

/// The position's state at one scenario price.
#[derive(Debug, Clone, Serialize)]
pub struct LeverageOutcome {
    pub name: String,
    pub period: String,
    pub stock_price: f64,
    pub btc_price: f64,
    pub equity: f64,
    pub profit: f64,
    pub return_pct: f64,
}

/// Evaluates the position against each scenario price.
pub fn evaluate_position(
    position: &LeveragedPosition,
    scenarios: &[LeverageScenario],
) -> Result<Vec<LeverageOutcome>, NavError> {
    if !(position.entry_price.is_finite() && position.entry_price > 0.0) {
        return Err(NavError::InvalidInput(format!(
            "entry price must be positive, got {}",
            position.entry_price
        )));
    }
    if !(position.capital.is_finite() && position.capital > 0.0) {
        return Err(NavError::InvalidInput(format!(
            "capital must be positive, got {}",
            position.capital
        )));
    }

    let shares = position.shares();
    let borrowed = position.borrowed();

    Ok(scenarios
        .iter()
        .map(|s| {
            let position_value = shares * s.stock_price;
            let equity = position_value - borrowed;
            let profit = equity - position.capital;
            LeverageOutcome {
                name: s.name.clone(),
                period: s.period.clone(),
                stock_price: s.stock_price,
                btc_price: s.btc_price,
                equity,
                profit,
                return_pct: profit / position.capital * 100.0,
            }
        })
        .collect())
}

/// The scenario list charted by the original analysis: the three today cases
/// and the 2026 base-case path with the Q4 tails.
pub fn default_scenarios() -> Vec<LeverageScenario> {
    let s = |name: &str, period: &str, stock: f64, btc: f64| LeverageScenario {
        name: name.to_string(),
        period: period.to_string(),
        stock_price: stock,
        btc_price: btc,
    };
    vec![
        s("Today Conservative", "Today", 343.32, 101_141.77),
        s("Today Fair Value", "Today", 377.77, 101_141.77),
        s("Today Bull Case", "Today", 432.49, 101_141.77),
        s("Q1 2026 Base", "Q1 2026", 361.00, 95_000.0),
        s("Q2 2026 Base", "Q2 2026", 401.17, 105_000.0),
        s("Q3 2026 Base", "Q3 2026", 442.10, 115_000.0),
        s("Q4 2026 Base", "Q4 2026", 483.79, 125_000.0),
        s("Q4 2026 Bull", "Q4 2026", 652.55, 170_000.0),
        s("Q4 2026 Moon", "Q4 2026", 858.82, 225_000.0),
    ]
}
