//! Two-panel timeline: BTC price colored by regime on top, NAV premium with
//! its reference levels below.

use std::path::Path;

use plotters::prelude::*;

use super::{blend, chart_err, ACCENT, BEAR, BG, BULL, GRID, REFERENCE, TEXT};
use crate::core::{DailyRecord, NavError, Regime};

const SIZE: (u32, u32) = (1600, 1000);

/// Renders `regime_analysis_timeline.png`-style output: price and premium
/// over time, points tinted by the combined regime label.
pub fn render_timeline(
    records: &[DailyRecord],
    regimes: &[Regime],
    path: impl AsRef<Path>,
) -> Result<(), NavError> {
    if records.is_empty() {
        return Err(NavError::InvalidInput("no records to chart".into()));
    }

    let root = BitMapBackend::new(path.as_ref(), SIZE).into_drawing_area();
    root.fill(&BG).map_err(chart_err)?;
    let (upper, lower) = root.split_vertically(SIZE.1 / 2);

    let x_range = records[0].date..records[records.len() - 1].date;
    let label_font = ("sans-serif", 15).into_font().color(&TEXT);

    // top panel: BTC price, regime-colored
    let max_price = records.iter().map(|r| r.btc_close).fold(0.0, f64::max);
    let mut price_chart = ChartBuilder::on(&upper)
        .margin(15)
        .x_label_area_size(35)
        .y_label_area_size(80)
        .caption(
            "BTC Price and NAV Premium by Market Regime",
            ("sans-serif", 26).into_font().color(&TEXT),
        )
        .build_cartesian_2d(x_range.clone(), 0.0..max_price * 1.05)
        .map_err(chart_err)?;

    price_chart
        .configure_mesh()
        .axis_style(GRID)
        .bold_line_style(GRID.mix(0.4))
        .light_line_style(GRID.mix(0.15))
        .label_style(label_font.clone())
        .y_label_formatter(&|v| format!("${:.0}k", v / 1000.0))
        .draw()
        .map_err(chart_err)?;

    for (label, color) in [(Regime::Bull, BULL), (Regime::Bear, BEAR)] {
        price_chart
            .draw_series(
                records
                    .iter()
                    .zip(regimes)
                    .filter(move |&(_, &r)| r == label)
                    .map(|(rec, _)| Circle::new((rec.date, rec.btc_close), 2, color.filled())),
            )
            .map_err(chart_err)?
            .label(format!("{} Market", label.as_str()))
            .legend(move |(x, y)| Circle::new((x + 8, y), 4, color.filled()));
    }

    price_chart
        .configure_series_labels()
        .border_style(GRID)
        .label_font(label_font.clone())
        .draw()
        .map_err(chart_err)?;

    // bottom panel: NAV premium with 1.0x / 1.7x reference lines
    let max_premium = records.iter().map(|r| r.nav_premium).fold(0.0, f64::max);
    let mut premium_chart = ChartBuilder::on(&lower)
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d(x_range, 0.0..max_premium * 1.1)
        .map_err(chart_err)?;

    premium_chart
        .configure_mesh()
        .axis_style(GRID)
        .bold_line_style(GRID.mix(0.4))
        .light_line_style(GRID.mix(0.15))
        .label_style(label_font.clone())
        .y_label_formatter(&|v| format!("{v:.1}x"))
        .draw()
        .map_err(chart_err)?;

    premium_chart
        .draw_series(LineSeries::new(
            records.iter().map(|r| (r.date, r.nav_premium)),
            ACCENT.stroke_width(2),
        ))
        .map_err(chart_err)?
        .label("NAV Premium")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], ACCENT.stroke_width(2)));

    let first = records[0].date;
    let last = records[records.len() - 1].date;
    for (level, color, name) in [
        (1.0, blend(WHITE, BG, 0.3), "1.0x (parity)"),
        (1.7, REFERENCE, "1.7x reference"),
    ] {
        premium_chart
            .draw_series(LineSeries::new(
                [(first, level), (last, level)],
                color.stroke_width(1),
            ))
            .map_err(chart_err)?
            .label(name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], color));
    }

    premium_chart
        .configure_series_labels()
        .border_style(GRID)
        .label_font(label_font)
        .draw()
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    tracing::info!(path = %path.as_ref().display(), "wrote timeline chart");
    Ok(())
}
