//! Alignment of the BTC and stock price series with the sparse holdings
//! events, producing the fully derived daily records the analyses run on.

use std::collections::BTreeMap;

use crate::core::{DailyRecord, HoldingsEvent, NavError, PriceBar};
use crate::model::shares::SharesSchedule;

/// Joins the two price series on date (inner join), forward-fills the last
/// known cumulative holdings onto every joined date, and derives market cap,
/// BTC NAV and the NAV premium per row.
///
/// Rows preceding the first holdings event are dropped: the premium is
/// undefined before the company held any bitcoin. A holdings value of zero on
/// a joined date is rejected rather than letting the premium divide by zero.
pub fn merge_daily(
    btc: &[PriceBar],
    stock: &[PriceBar],
    holdings: &[HoldingsEvent],
    shares: &SharesSchedule,
) -> Result<Vec<DailyRecord>, NavError> {
    let stock_by_date: BTreeMap<_, _> = stock.iter().map(|b| (b.date, b.close)).collect();

    let mut records = Vec::new();
    let mut held: Option<f64> = None;
    let mut next_event = 0usize;

    for bar in btc {
        // advance the forward-fill cursor through every event at or before this date
        while next_event < holdings.len() && holdings[next_event].date <= bar.date {
            held = Some(holdings[next_event].cumulative_btc);
            next_event += 1;
        }

        let Some(&stock_close) = stock_by_date.get(&bar.date) else {
            continue;
        };
        let Some(btc_holdings) = held else {
            continue;
        };

        if btc_holdings <= 0.0 {
            return Err(NavError::InvalidInput(format!(
                "non-positive holdings ({btc_holdings}) on {}",
                bar.date
            )));
        }

        let shares_outstanding = shares.shares_on(bar.date);
        if shares_outstanding <= 0.0 {
            return Err(NavError::InvalidInput(format!(
                "non-positive shares outstanding on {}",
                bar.date
            )));
        }

        let market_cap = stock_close * shares_outstanding;
        let btc_nav = bar.close * btc_holdings;

        records.push(DailyRecord {
            date: bar.date,
            btc_close: bar.close,
            stock_close,
            btc_holdings,
            shares_outstanding,
            market_cap,
            btc_nav,
            nav_premium: market_cap / btc_nav,
        });
    }

    tracing::debug!(rows = records.len(), "merged daily series");
    Ok(records)
}
