//! Core components shared across the crate.
//!
//! This module contains the foundational building blocks:
//! - The chart-API client ([`ChartClient`]) and its builder.
//! - The primary error type ([`NavError`]).
//! - Shared data models like [`PriceBar`] and [`DailyRecord`].

/// The chart-API client (`ChartClient`), builder, and configuration.
pub mod client;
/// The primary error type (`NavError`) for the crate.
pub mod error;
/// Shared data models used across multiple modules.
pub mod models;

// convenient re-exports so most code can just `use crate::core::ChartClient`
pub use client::{ChartClient, ChartClientBuilder};
pub use error::NavError;
pub use models::{DailyRecord, HoldingsEvent, PriceBar, Regime, ScenarioCase, SeriesMeta};
