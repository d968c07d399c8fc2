use std::env;
use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;

use navlens::chart::{leverage, projections, scatter, timeline};
use navlens::core::{ChartClient, NavError};
use navlens::data::{self, SeriesMetadataFile};
use navlens::fetch::{HistoryRequest, Range};
use navlens::model::{
    self, evaluate_grid, today_table, LeveragedPosition, ModelConfig, SharesSchedule,
};
use navlens::regime::{classify_series, stats::regime_report, RegimeParams};
use navlens::report::{FairValueReport, RegimeAnalysisReport};

const USAGE: &str = "usage: navlens <command>

commands:
  fetch   [SYMBOL] [PREFIX]     fetch daily history (default BTC-USD, prefix 'btc')
  analyze [DATA_DIR] [OUT_DIR]  merge local series, regime + premium statistics
  project [CONFIG]  [OUT_DIR]   fair-value today table and scenario grid
  leverage [OUT_DIR]            leveraged-position outcomes and chart

analyze expects btc_historical_data.json, stock_historical_data.json and
btc_holdings.json in DATA_DIR.";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "run failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), NavError> {
    let mut args = env::args().skip(1);
    let command = args.next().unwrap_or_default();

    match command.as_str() {
        "fetch" => fetch_cmd(args.next(), args.next()).await,
        "analyze" => analyze_cmd(args.next(), args.next()),
        "project" => project_cmd(args.next(), args.next()),
        "leverage" => leverage_cmd(args.next()),
        _ => {
            eprintln!("{USAGE}");
            Ok(())
        }
    }
}

fn out_path(dir: &Option<String>, file: &str) -> PathBuf {
    Path::new(dir.as_deref().unwrap_or(".")).join(file)
}

async fn fetch_cmd(symbol: Option<String>, prefix: Option<String>) -> Result<(), NavError> {
    let symbol = symbol.unwrap_or_else(|| "BTC-USD".to_string());
    let prefix = prefix.unwrap_or_else(|| "btc".to_string());

    let client = ChartClient::builder().build()?;
    let (bars, meta) = HistoryRequest::new(&client, &symbol)
        .range(Range::Y5)
        .fetch()
        .await?;

    if bars.is_empty() {
        return Err(NavError::Data(format!("no bars returned for {symbol}")));
    }

    data::save_price_series(format!("{prefix}_historical_data.json"), &bars)?;
    data::write_json_pretty(
        format!("{prefix}_metadata.json"),
        &SeriesMetadataFile::new(&meta, &bars),
    )?;

    tracing::info!(
        symbol = %meta.symbol,
        bars = bars.len(),
        first = %bars[0].date,
        last = %bars[bars.len() - 1].date,
        "fetch complete"
    );
    Ok(())
}

fn analyze_cmd(data_dir: Option<String>, out_dir: Option<String>) -> Result<(), NavError> {
    let btc = data::load_price_series(out_path(&data_dir, "btc_historical_data.json"))?;
    let stock = data::load_price_series(out_path(&data_dir, "stock_historical_data.json"))?;
    let holdings = data::load_holdings(out_path(&data_dir, "btc_holdings.json"))?;

    let records = data::merge::merge_daily(&btc, &stock, &holdings, &SharesSchedule::default())?;
    if records.is_empty() {
        return Err(NavError::Data("merged series is empty".into()));
    }

    let closes: Vec<f64> = records.iter().map(|r| r.btc_close).collect();
    let signals = classify_series(&closes, &RegimeParams::default());
    let regimes: Vec<_> = signals.iter().map(|s| s.combined).collect();

    let report = regime_report(&records, &regimes);
    tracing::info!(
        rows = records.len(),
        bull_days = report.bull_market.days,
        bear_days = report.bear_market.days,
        bull_median_premium = report.bull_market.median_nav_premium,
        bear_median_premium = report.bear_market.median_nav_premium,
        "regime analysis complete"
    );

    RegimeAnalysisReport::new(records.len(), report)
        .write(out_path(&out_dir, "regime_analysis_results.json"))?;
    timeline::render_timeline(
        &records,
        &regimes,
        out_path(&out_dir, "regime_analysis_timeline.png"),
    )?;
    scatter::render_premium_scatter(&records, out_path(&out_dir, "btc_nav_premium_chart.png"))?;
    Ok(())
}

fn project_cmd(config_path: Option<String>, out_dir: Option<String>) -> Result<(), NavError> {
    let config = match config_path {
        Some(path) => ModelConfig::from_file(path)?,
        None => ModelConfig::default(),
    };

    let today = today_table(&config)?;
    let grid = evaluate_grid(&config)?;
    tracing::info!(
        today_scenarios = today.len(),
        grid_rows = grid.len(),
        config_version = config.version,
        "projections evaluated"
    );

    projections::render_today_bars(
        &today,
        config.current.stock_price,
        out_path(&out_dir, "fair_value_today.png"),
    )?;
    projections::render_quarterly_bars(
        &grid,
        config.current.stock_price,
        out_path(&out_dir, "fair_value_quarterly_base.png"),
    )?;
    projections::render_heatmap(&grid, "fair_value", out_path(&out_dir, "fair_value_heatmap.png"))?;

    FairValueReport::new(&config, today, grid)
        .write(out_path(&out_dir, "fair_value_projections.json"))?;
    Ok(())
}

fn leverage_cmd(out_dir: Option<String>) -> Result<(), NavError> {
    let config = ModelConfig::default();
    let position = LeveragedPosition {
        capital: 2_500_000.0,
        leverage: 1.26,
        entry_price: config.current.stock_price,
    };

    let outcomes = model::evaluate_position(&position, &model::leverage::default_scenarios())?;
    tracing::info!(
        scenarios = outcomes.len(),
        shares = position.shares(),
        borrowed = position.borrowed(),
        "leveraged position evaluated"
    );

    data::write_json_pretty(
        out_path(&out_dir, "leveraged_position_outcomes.json"),
        &outcomes,
    )?;
    leverage::render_leverage_bars(
        &position,
        &outcomes,
        out_path(&out_dir, "leveraged_position_with_btc.png"),
    )?;
    Ok(())
}
