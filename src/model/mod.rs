//! The fair-value model: formula, assumptions, scenario grid and the
//! leveraged-position arithmetic built on top of it.

pub mod config;
pub mod fair_value;
pub mod leverage;
pub mod scenario;
pub mod shares;

pub use config::{CurrentState, ModelConfig, PremiumBenchmarks, PremiumTier, QuarterScenario};
pub use fair_value::{fair_value, FairValueBreakdown, FairValueInputs};
pub use leverage::{evaluate_position, LeverageOutcome, LeverageScenario, LeveragedPosition};
pub use scenario::{evaluate_grid, today_table, ProjectionRow, TodayScenario};
pub use shares::SharesSchedule;
