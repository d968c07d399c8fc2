//! PNG chart rendering on a dark theme.
//!
//! Every renderer takes already-computed data and a target path, draws with
//! `plotters`' bitmap backend, and overwrites the file. Nothing here computes
//! model numbers.

pub mod leverage;
pub mod projections;
pub mod scatter;
pub mod timeline;

use plotters::style::RGBColor;

use crate::core::NavError;

/// Figure background.
pub(crate) const BG: RGBColor = RGBColor(10, 10, 10);
/// Panel background behind the plot area.
pub(crate) const PANEL: RGBColor = RGBColor(26, 26, 26);
/// Grid lines.
pub(crate) const GRID: RGBColor = RGBColor(60, 60, 60);
/// Axis labels and captions.
pub(crate) const TEXT: RGBColor = RGBColor(235, 235, 235);

pub(crate) const BULL: RGBColor = RGBColor(46, 204, 113);
pub(crate) const BEAR: RGBColor = RGBColor(231, 76, 60);
pub(crate) const ACCENT: RGBColor = RGBColor(78, 205, 196);
pub(crate) const BTC_ORANGE: RGBColor = RGBColor(243, 156, 18);
pub(crate) const REFERENCE: RGBColor = RGBColor(200, 60, 60);

/// Tier colors for grouped bars (conservative / fair / bull).
pub(crate) const TIER_COLORS: [RGBColor; 3] = [
    RGBColor(255, 107, 107),
    RGBColor(78, 205, 196),
    RGBColor(69, 183, 209),
];

/// Maps any plotters error into [`NavError::Chart`].
pub(crate) fn chart_err(e: impl std::fmt::Display) -> NavError {
    NavError::Chart(e.to_string())
}

/// Linear blend between two colors, `t` in `[0, 1]`.
pub(crate) fn blend(from: RGBColor, to: RGBColor, t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    RGBColor(lerp(from.0, to.0), lerp(from.1, to.1), lerp(from.2, to.2))
}
