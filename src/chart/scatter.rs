//! NAV premium versus BTC price scatter, with points shading from blue
//! (earliest) to red (most recent) along the series.

use std::path::Path;

use plotters::prelude::*;

use super::{blend, chart_err, BG, GRID, REFERENCE, TEXT};
use crate::core::{DailyRecord, NavError};

const SIZE: (u32, u32) = (1400, 900);
const EARLY: RGBColor = RGBColor(60, 100, 255);
const RECENT: RGBColor = RGBColor(255, 70, 70);

/// Renders the premium-vs-price scatter (`btc_nav_premium_chart.png` style).
pub fn render_premium_scatter(
    records: &[DailyRecord],
    path: impl AsRef<Path>,
) -> Result<(), NavError> {
    if records.is_empty() {
        return Err(NavError::InvalidInput("no records to chart".into()));
    }

    let root = BitMapBackend::new(path.as_ref(), SIZE).into_drawing_area();
    root.fill(&BG).map_err(chart_err)?;

    let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
    let mut max_y = f64::NEG_INFINITY;
    for r in records {
        min_x = min_x.min(r.btc_close);
        max_x = max_x.max(r.btc_close);
        max_y = max_y.max(r.nav_premium);
    }

    let label_font = ("sans-serif", 15).into_font().color(&TEXT);
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .caption(
            "NAV Premium vs BTC Price",
            ("sans-serif", 26).into_font().color(&TEXT),
        )
        .build_cartesian_2d(min_x * 0.95..max_x * 1.05, 0.0..max_y * 1.1)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .axis_style(GRID)
        .bold_line_style(GRID.mix(0.4))
        .light_line_style(GRID.mix(0.15))
        .label_style(label_font.clone())
        .x_label_formatter(&|v| format!("${:.0}k", v / 1000.0))
        .y_label_formatter(&|v| format!("{v:.1}x"))
        .draw()
        .map_err(chart_err)?;

    let n = records.len().max(2);
    chart
        .draw_series(records.iter().enumerate().map(|(i, r)| {
            let t = i as f64 / (n - 1) as f64;
            Circle::new((r.btc_close, r.nav_premium), 3, blend(EARLY, RECENT, t).filled())
        }))
        .map_err(chart_err)?;

    chart
        .draw_series(LineSeries::new(
            [(min_x * 0.95, 1.7), (max_x * 1.05, 1.7)],
            REFERENCE.stroke_width(2),
        ))
        .map_err(chart_err)?
        .label("1.7x reference")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], REFERENCE.stroke_width(2)));

    chart
        .configure_series_labels()
        .border_style(GRID)
        .label_font(label_font)
        .draw()
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    tracing::info!(path = %path.as_ref().display(), "wrote scatter chart");
    Ok(())
}
