//! Local JSON input and output files.
//!
//! Price series and holdings events are flat JSON arrays of row objects, the
//! same shape the fetch path writes, so a fetched file can be re-read by the
//! analyses without conversion.

pub mod merge;

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{HoldingsEvent, NavError, PriceBar, SeriesMeta};

/// Raw price row as stored on disk. OHLC fields may be null for days the
/// source had no quote; such rows are dropped on load.
#[derive(Deserialize)]
struct PriceRow {
    date: NaiveDate,
    open: Option<f64>,
    high: Option<f64>,
    low: Option<f64>,
    close: Option<f64>,
    volume: Option<u64>,
}

/// Loads a daily price series from a JSON array of row objects, dropping
/// incomplete rows and sorting by date.
pub fn load_price_series(path: impl AsRef<Path>) -> Result<Vec<PriceBar>, NavError> {
    let body = fs::read_to_string(path.as_ref())?;
    let rows: Vec<PriceRow> = serde_json::from_str(&body)?;

    let mut bars: Vec<PriceBar> = rows
        .into_iter()
        .filter_map(|r| {
            let (open, high, low, close) = (r.open?, r.high?, r.low?, r.close?);
            Some(PriceBar {
                date: r.date,
                open,
                high,
                low,
                close,
                volume: r.volume,
            })
        })
        .collect();
    bars.sort_by_key(|b| b.date);

    tracing::debug!(path = %path.as_ref().display(), rows = bars.len(), "price series loaded");
    Ok(bars)
}

/// Loads the sparse cumulative-holdings events, sorted by date.
pub fn load_holdings(path: impl AsRef<Path>) -> Result<Vec<HoldingsEvent>, NavError> {
    let body = fs::read_to_string(path.as_ref())?;
    let mut events: Vec<HoldingsEvent> = serde_json::from_str(&body)?;
    events.sort_by_key(|e| e.date);

    tracing::debug!(path = %path.as_ref().display(), events = events.len(), "holdings loaded");
    Ok(events)
}

/// Writes a price series to disk in the row format [`load_price_series`] reads.
pub fn save_price_series(path: impl AsRef<Path>, bars: &[PriceBar]) -> Result<(), NavError> {
    write_json_pretty(path, bars)
}

/// Metadata file written next to a fetched price series.
#[derive(Debug, Serialize)]
pub struct SeriesMetadataFile {
    pub symbol: String,
    pub currency: Option<String>,
    pub exchange: Option<String>,
    pub data_points: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    pub current_price: Option<f64>,
}

impl SeriesMetadataFile {
    pub fn new(meta: &SeriesMeta, bars: &[PriceBar]) -> Self {
        Self {
            symbol: meta.symbol.clone(),
            currency: meta.currency.clone(),
            exchange: meta.exchange.clone(),
            data_points: bars.len(),
            first_date: bars.first().map(|b| b.date),
            last_date: bars.last().map(|b| b.date),
            current_price: meta.regular_market_price,
        }
    }
}

/// Serializes any value as pretty-printed JSON, fully overwriting the file.
pub fn write_json_pretty<T: Serialize + ?Sized>(path: impl AsRef<Path>, value: &T) -> Result<(), NavError> {
    let body = serde_json::to_string_pretty(value)?;
    fs::write(path.as_ref(), body)?;
    tracing::info!(path = %path.as_ref().display(), "wrote output file");
    Ok(())
}
