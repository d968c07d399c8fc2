//! Leveraged-position chart: equity per scenario as bars, the initial capital
//! as a reference line, and the scenario BTC price written above each bar.

use std::path::Path;

use plotters::prelude::*;

use super::{chart_err, BG, BTC_ORANGE, GRID, REFERENCE, TEXT, TIER_COLORS};
use crate::core::NavError;
use crate::model::{LeverageOutcome, LeveragedPosition};

const SIZE: (u32, u32) = (1600, 900);

/// Renders `leveraged_position_with_btc.png`-style output.
pub fn render_leverage_bars(
    position: &LeveragedPosition,
    outcomes: &[LeverageOutcome],
    path: impl AsRef<Path>,
) -> Result<(), NavError> {
    if outcomes.is_empty() {
        return Err(NavError::InvalidInput("no outcomes to chart".into()));
    }

    let root = BitMapBackend::new(path.as_ref(), SIZE).into_drawing_area();
    root.fill(&BG).map_err(chart_err)?;

    let max_equity = outcomes
        .iter()
        .map(|o| o.equity)
        .fold(position.capital, f64::max);
    let n = outcomes.len();

    let label_font = ("sans-serif", 14).into_font().color(&TEXT);
    let names: Vec<String> = outcomes.iter().map(|o| o.name.clone()).collect();
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .caption(
            format!(
                "Leveraged Position ({:.2}x on ${:.1}M) - Equity by Scenario",
                position.leverage,
                position.capital / 1e6
            ),
            ("sans-serif", 26).into_font().color(&TEXT),
        )
        .build_cartesian_2d(0.0..n as f64, 0.0..max_equity * 1.2)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .axis_style(GRID)
        .disable_x_mesh()
        .light_line_style(GRID.mix(0.15))
        .label_style(label_font.clone())
        .y_label_formatter(&|v| format!("${:.1}M", v / 1e6))
        .x_labels(n)
        .x_label_formatter(&move |x| {
            let idx = (*x - 0.5).round() as usize;
            names.get(idx).cloned().unwrap_or_default()
        })
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(outcomes.iter().enumerate().map(|(i, o)| {
            let color = TIER_COLORS[i % TIER_COLORS.len()];
            Rectangle::new(
                [(i as f64 + 0.2, 0.0), (i as f64 + 0.8, o.equity)],
                color.filled(),
            )
        }))
        .map_err(chart_err)?;

    chart
        .draw_series(outcomes.iter().enumerate().map(|(i, o)| {
            Text::new(
                format!("${:.2}M ({:+.0}%)", o.equity / 1e6, o.return_pct),
                (i as f64 + 0.22, o.equity + max_equity * 0.03),
                ("sans-serif", 14).into_font().color(&TEXT),
            )
        }))
        .map_err(chart_err)?;

    chart
        .draw_series(outcomes.iter().enumerate().map(|(i, o)| {
            Text::new(
                format!("BTC ${:.0}k", o.btc_price / 1000.0),
                (i as f64 + 0.25, max_equity * 1.12),
                ("sans-serif", 14).into_font().color(&BTC_ORANGE),
            )
        }))
        .map_err(chart_err)?;

    chart
        .draw_series(LineSeries::new(
            [(0.0, position.capital), (n as f64, position.capital)],
            REFERENCE.stroke_width(2),
        ))
        .map_err(chart_err)?
        .label(format!("initial capital ${:.1}M", position.capital / 1e6))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], REFERENCE.stroke_width(2)));

    chart
        .configure_series_labels()
        .border_style(GRID)
        .label_font(label_font)
        .draw()
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    tracing::info!(path = %path.as_ref().display(), "wrote leverage chart");
    Ok(())
}
