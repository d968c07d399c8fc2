//! Fair-value projection charts: the today table, the quarterly base-case
//! grouped bars, and the quarter-by-case heatmap.

use std::path::Path;

use plotters::prelude::*;

use super::{blend, chart_err, BEAR, BG, BULL, GRID, PANEL, REFERENCE, TEXT, TIER_COLORS};
use crate::core::{NavError, ScenarioCase};
use crate::model::{ProjectionRow, TodayScenario};

const SIZE: (u32, u32) = (1400, 900);

fn ordered_unique<'a>(it: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for s in it {
        if !out.iter().any(|o| o == s) {
            out.push(s.to_string());
        }
    }
    out
}

/// Horizontal bars of today's fair-value scenarios against the current price.
pub fn render_today_bars(
    today: &[TodayScenario],
    current_price: f64,
    path: impl AsRef<Path>,
) -> Result<(), NavError> {
    if today.is_empty() {
        return Err(NavError::InvalidInput("no today scenarios to chart".into()));
    }

    let root = BitMapBackend::new(path.as_ref(), SIZE).into_drawing_area();
    root.fill(&BG).map_err(chart_err)?;

    let max_price = today
        .iter()
        .map(|t| t.fair_price)
        .fold(current_price, f64::max);
    let n = today.len();

    let label_font = ("sans-serif", 15).into_font().color(&TEXT);
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(260)
        .caption(
            "Fair Value Scenarios - Today",
            ("sans-serif", 26).into_font().color(&TEXT),
        )
        .build_cartesian_2d(0.0..max_price * 1.2, 0.0..n as f64)
        .map_err(chart_err)?;

    let names: Vec<String> = today.iter().map(|t| t.scenario.clone()).collect();
    chart
        .configure_mesh()
        .axis_style(GRID)
        .disable_y_mesh()
        .light_line_style(GRID.mix(0.15))
        .label_style(label_font.clone())
        .x_label_formatter(&|v| format!("${v:.0}"))
        .y_labels(n)
        .y_label_formatter(&move |y| {
            let idx = (*y - 0.5).round() as usize;
            names.get(idx).cloned().unwrap_or_default()
        })
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(today.iter().enumerate().map(|(i, t)| {
            let color = TIER_COLORS[i % TIER_COLORS.len()];
            Rectangle::new(
                [(0.0, i as f64 + 0.15), (t.fair_price, i as f64 + 0.85)],
                color.filled(),
            )
        }))
        .map_err(chart_err)?;

    chart
        .draw_series(today.iter().enumerate().map(|(i, t)| {
            Text::new(
                format!("${:.2} ({:+.1}%)", t.fair_price, t.upside_pct),
                (t.fair_price + max_price * 0.01, i as f64 + 0.45),
                ("sans-serif", 14).into_font().color(&TEXT),
            )
        }))
        .map_err(chart_err)?;

    chart
        .draw_series(LineSeries::new(
            [(current_price, 0.0), (current_price, n as f64)],
            REFERENCE.stroke_width(2),
        ))
        .map_err(chart_err)?
        .label(format!("current price ${current_price:.2}"))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], REFERENCE.stroke_width(2)));

    chart
        .configure_series_labels()
        .border_style(GRID)
        .label_font(label_font)
        .draw()
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    tracing::info!(path = %path.as_ref().display(), "wrote today fair-value chart");
    Ok(())
}

/// Grouped bars: base-case fair price per quarter, one bar per premium tier.
pub fn render_quarterly_bars(
    rows: &[ProjectionRow],
    current_price: f64,
    path: impl AsRef<Path>,
) -> Result<(), NavError> {
    let base: Vec<&ProjectionRow> = rows
        .iter()
        .filter(|r| r.btc_scenario == ScenarioCase::Base)
        .collect();
    if base.is_empty() {
        return Err(NavError::InvalidInput("no base-case rows to chart".into()));
    }

    let quarters = ordered_unique(base.iter().map(|r| r.quarter.as_str()));
    let tiers = ordered_unique(base.iter().map(|r| r.premium_label.as_str()));

    let root = BitMapBackend::new(path.as_ref(), SIZE).into_drawing_area();
    root.fill(&BG).map_err(chart_err)?;

    let max_price = base
        .iter()
        .map(|r| r.fair_price)
        .fold(current_price, f64::max);

    let label_font = ("sans-serif", 15).into_font().color(&TEXT);
    let quarter_labels = quarters.clone();
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .caption(
            "Quarterly Fair Value - Base Case",
            ("sans-serif", 26).into_font().color(&TEXT),
        )
        .build_cartesian_2d(0.0..quarters.len() as f64, 0.0..max_price * 1.15)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .axis_style(GRID)
        .disable_x_mesh()
        .light_line_style(GRID.mix(0.15))
        .label_style(label_font.clone())
        .y_label_formatter(&|v| format!("${v:.0}"))
        .x_labels(quarters.len())
        .x_label_formatter(&move |x| {
            let idx = (*x - 0.5).round() as usize;
            quarter_labels.get(idx).cloned().unwrap_or_default()
        })
        .draw()
        .map_err(chart_err)?;

    let group_width = 0.8;
    let bar_width = group_width / tiers.len() as f64;

    for (ti, tier) in tiers.iter().enumerate() {
        let color = TIER_COLORS[ti % TIER_COLORS.len()];
        let premium = base
            .iter()
            .find(|r| &r.premium_label == tier)
            .map(|r| r.premium_target)
            .unwrap_or_default();
        chart
            .draw_series(base.iter().filter(|r| &r.premium_label == tier).map(|r| {
                let qi = quarters.iter().position(|q| q == &r.quarter).unwrap_or(0) as f64;
                let x0 = qi + 0.1 + ti as f64 * bar_width;
                Rectangle::new([(x0, 0.0), (x0 + bar_width * 0.9, r.fair_price)], color.filled())
            }))
            .map_err(chart_err)?
            .label(format!("{tier} ({premium:.1}x)"))
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.filled()));
    }

    chart
        .draw_series(LineSeries::new(
            [(0.0, current_price), (quarters.len() as f64, current_price)],
            REFERENCE.stroke_width(2),
        ))
        .map_err(chart_err)?
        .label(format!("current price ${current_price:.2}"))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], REFERENCE.stroke_width(2)));

    chart
        .configure_series_labels()
        .border_style(GRID)
        .background_style(PANEL.mix(0.8))
        .label_font(label_font)
        .draw()
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    tracing::info!(path = %path.as_ref().display(), "wrote quarterly projection chart");
    Ok(())
}

/// Quarter × price-case heatmap of fair prices for one premium tier.
pub fn render_heatmap(
    rows: &[ProjectionRow],
    tier_label: &str,
    path: impl AsRef<Path>,
) -> Result<(), NavError> {
    let tier: Vec<&ProjectionRow> = rows
        .iter()
        .filter(|r| r.premium_label == tier_label)
        .collect();
    if tier.is_empty() {
        return Err(NavError::InvalidInput(format!(
            "no rows for premium tier '{tier_label}'"
        )));
    }

    let quarters = ordered_unique(tier.iter().map(|r| r.quarter.as_str()));
    let cases = ScenarioCase::ALL;

    let (mut lo, mut hi) = (f64::INFINITY, f64::NEG_INFINITY);
    for r in &tier {
        lo = lo.min(r.fair_price);
        hi = hi.max(r.fair_price);
    }
    let span = (hi - lo).max(f64::EPSILON);

    let root = BitMapBackend::new(path.as_ref(), SIZE).into_drawing_area();
    root.fill(&BG).map_err(chart_err)?;

    let label_font = ("sans-serif", 15).into_font().color(&TEXT);
    let quarter_labels = quarters.clone();
    let mut chart = ChartBuilder::on(&root)
        .margin(30)
        .x_label_area_size(40)
        .y_label_area_size(90)
        .caption(
            format!("Fair Value Heatmap ({tier_label} premium)"),
            ("sans-serif", 26).into_font().color(&TEXT),
        )
        .build_cartesian_2d(0.0..cases.len() as f64, 0.0..quarters.len() as f64)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .axis_style(GRID)
        .disable_mesh()
        .label_style(label_font)
        .x_labels(cases.len())
        .x_label_formatter(&|x| {
            let idx = (*x - 0.5).round() as usize;
            cases
                .get(idx)
                .map(|c| c.as_str().to_string())
                .unwrap_or_default()
        })
        .y_labels(quarters.len())
        .y_label_formatter(&move |y| {
            let idx = (*y - 0.5).round() as usize;
            quarter_labels.get(idx).cloned().unwrap_or_default()
        })
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(tier.iter().filter_map(|r| {
            let qi = quarters.iter().position(|q| q == &r.quarter)? as f64;
            let ci = cases.iter().position(|c| *c == r.btc_scenario)? as f64;
            let t = (r.fair_price - lo) / span;
            Some(Rectangle::new(
                [(ci + 0.03, qi + 0.03), (ci + 0.97, qi + 0.97)],
                blend(BEAR, BULL, t).filled(),
            ))
        }))
        .map_err(chart_err)?;

    chart
        .draw_series(tier.iter().filter_map(|r| {
            let qi = quarters.iter().position(|q| q == &r.quarter)? as f64;
            let ci = cases.iter().position(|c| *c == r.btc_scenario)? as f64;
            Some(Text::new(
                format!("${:.0}", r.fair_price),
                (ci + 0.38, qi + 0.5),
                ("sans-serif", 16).into_font().color(&BG),
            ))
        }))
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    tracing::info!(path = %path.as_ref().display(), "wrote heatmap chart");
    Ok(())
}
