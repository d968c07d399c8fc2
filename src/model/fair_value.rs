use serde::Serialize;

use crate::core::NavError;

/// Inputs to one fair-value evaluation. No hidden globals: every number the
/// formula touches arrives through this struct.
#[derive(Debug, Clone, Copy)]
pub struct FairValueInputs {
    pub btc_price: f64,
    pub btc_holdings: f64,
    pub shares_outstanding: f64,
    pub premium_target: f64,
    /// Residual operating-business value per share, added on top of the BTC
    /// component when present.
    pub software_value_per_share: Option<f64>,
}

/// The decomposed result of a fair-value evaluation.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FairValueBreakdown {
    pub nav_per_share: f64,
    pub btc_component: f64,
    pub software_component: f64,
    pub fair_price: f64,
    pub premium_target: f64,
}

/// Computes `fair_price = (btc_price * btc_holdings / shares_outstanding)
/// * premium_target + software_value_per_share`.
///
/// # Errors
///
/// Returns [`NavError::InvalidInput`] when `shares_outstanding` is not a
/// positive finite number, so no NaN or infinity ever reaches a report.
pub fn fair_value(inputs: &FairValueInputs) -> Result<FairValueBreakdown, NavError> {
    if !(inputs.shares_outstanding.is_finite() && inputs.shares_outstanding > 0.0) {
        return Err(NavError::InvalidInput(format!(
            "shares outstanding must be positive, got {}",
            inputs.shares_outstanding
        )));
    }

    let nav_per_share = inputs.btc_price * inputs.btc_holdings / inputs.shares_outstanding;
    let btc_component = nav_per_share * inputs.premium_target;
    let software_component = inputs.software_value_per_share.unwrap_or(0.0);

    Ok(FairValueBreakdown {
        nav_per_share,
        btc_component,
        software_component,
        fair_price: btc_component + software_component,
        premium_target: inputs.premium_target,
    })
}
