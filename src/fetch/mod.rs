//! Daily OHLCV history via a Yahoo-style v8 chart endpoint.
//!
//! This is the one remote dependency of the crate: a single request, awaited
//! to completion, with every failure surfaced as a typed [`NavError`].

use chrono::DateTime;
use serde::Deserialize;

use crate::core::{ChartClient, NavError, PriceBar, SeriesMeta};

/// Relative time range accepted by the chart endpoint.
#[derive(Debug, Clone, Copy)]
pub enum Range {
    M1,
    M3,
    M6,
    Y1,
    Y2,
    Y5,
    Y10,
    Ytd,
    Max,
}

impl Range {
    fn as_str(self) -> &'static str {
        match self {
            Range::M1 => "1mo",
            Range::M3 => "3mo",
            Range::M6 => "6mo",
            Range::Y1 => "1y",
            Range::Y2 => "2y",
            Range::Y5 => "5y",
            Range::Y10 => "10y",
            Range::Ytd => "ytd",
            Range::Max => "max",
        }
    }
}

/// Bar interval. The analyses operate on daily rows; coarser intervals are
/// accepted for ad-hoc pulls.
#[derive(Debug, Clone, Copy)]
pub enum Interval {
    D1,
    W1,
    M1,
}

impl Interval {
    fn as_str(self) -> &'static str {
        match self {
            Interval::D1 => "1d",
            Interval::W1 => "1wk",
            Interval::M1 => "1mo",
        }
    }
}

/// Builder for a single chart-history request.
pub struct HistoryRequest<'a> {
    client: &'a ChartClient,
    symbol: String,
    range: Option<Range>,
    period: Option<(i64, i64)>,
    interval: Interval,
}

impl<'a> HistoryRequest<'a> {
    pub fn new(client: &'a ChartClient, symbol: impl Into<String>) -> Self {
        Self {
            client,
            symbol: symbol.into(),
            range: Some(Range::Y5),
            period: None,
            interval: Interval::D1,
        }
    }

    pub fn range(mut self, range: Range) -> Self {
        self.period = None;
        self.range = Some(range);
        self
    }

    pub fn between(
        mut self,
        start: chrono::DateTime<chrono::Utc>,
        end: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        self.range = None;
        self.period = Some((start.timestamp(), end.timestamp()));
        self
    }

    pub fn interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }

    /// Executes the request and returns the daily bars plus series metadata.
    ///
    /// Rows with any missing OHLC field are dropped, matching the behavior of
    /// the local loaders which only accept complete rows.
    pub async fn fetch(self) -> Result<(Vec<PriceBar>, SeriesMeta), NavError> {
        let mut url = self.client.base_chart().join(&self.symbol)?;
        {
            let mut qp = url.query_pairs_mut();

            if let Some((p1, p2)) = self.period {
                if p1 >= p2 {
                    return Err(NavError::InvalidDates);
                }
                qp.append_pair("period1", &p1.to_string());
                qp.append_pair("period2", &p2.to_string());
            } else if let Some(r) = self.range {
                qp.append_pair("range", r.as_str());
            } else {
                return Err(NavError::Data("no range or period set".into()));
            }

            qp.append_pair("interval", self.interval.as_str());
            qp.append_pair("includeAdjustedClose", "true");
        }

        tracing::debug!(symbol = %self.symbol, %url, "requesting chart history");

        let resp = self.client.http().get(url.clone()).send().await?;
        if !resp.status().is_success() {
            return Err(NavError::Status {
                status: resp.status().as_u16(),
                url: url.to_string(),
            });
        }

        let body = resp.text().await?;
        let parsed: ChartEnvelope = serde_json::from_str(&body)
            .map_err(|e| NavError::Data(format!("json parse error: {e}")))?;

        let chart = parsed
            .chart
            .ok_or_else(|| NavError::Data("missing chart".into()))?;

        if let Some(err) = chart.error {
            return Err(NavError::Data(format!(
                "chart api error: {} - {}",
                err.code, err.description
            )));
        }

        let result = chart
            .result
            .ok_or_else(|| NavError::Data("missing result".into()))?;
        let r0 = result
            .first()
            .ok_or_else(|| NavError::Data("empty result".into()))?;

        let ts = r0.timestamp.as_deref().unwrap_or(&[]);
        let q = r0
            .indicators
            .quote
            .first()
            .ok_or_else(|| NavError::Data("missing quote".into()))?;

        let mut bars = Vec::new();
        for (i, &t) in ts.iter().enumerate() {
            let getter = |v: &Vec<Option<f64>>| v.get(i).and_then(|x| *x);
            let (open, high, low, close) = (
                getter(&q.open),
                getter(&q.high),
                getter(&q.low),
                getter(&q.close),
            );
            let volume = q.volume.get(i).and_then(|x| *x);

            let date = DateTime::from_timestamp(t, 0)
                .ok_or_else(|| NavError::Data(format!("timestamp out of range: {t}")))?
                .date_naive();

            if let (Some(open), Some(high), Some(low), Some(close)) = (open, high, low, close) {
                bars.push(PriceBar {
                    date,
                    open,
                    high,
                    low,
                    close,
                    volume,
                });
            }
        }

        let meta = r0.meta.as_ref();
        let meta = SeriesMeta {
            symbol: meta
                .and_then(|m| m.symbol.clone())
                .unwrap_or_else(|| self.symbol.clone()),
            currency: meta.and_then(|m| m.currency.clone()),
            exchange: meta.and_then(|m| m.exchange_name.clone()),
            regular_market_price: meta.and_then(|m| m.regular_market_price),
        };

        tracing::info!(symbol = %meta.symbol, bars = bars.len(), "chart history fetched");

        Ok((bars, meta))
    }
}

/* --- Internal response mapping (only fields we need) --- */

#[derive(Deserialize)]
struct ChartEnvelope {
    chart: Option<ChartNode>,
}

#[derive(Deserialize)]
struct ChartNode {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Deserialize)]
struct ChartResult {
    #[serde(default)]
    meta: Option<MetaNode>,
    #[serde(default)]
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Deserialize)]
struct MetaNode {
    #[serde(default)]
    symbol: Option<String>,
    #[serde(default)]
    currency: Option<String>,
    #[serde(default, rename = "exchangeName")]
    exchange_name: Option<String>,
    #[serde(default, rename = "regularMarketPrice")]
    regular_market_price: Option<f64>,
}

#[derive(Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<QuoteBlock>,
}

#[derive(Deserialize)]
struct QuoteBlock {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<u64>>,
}
