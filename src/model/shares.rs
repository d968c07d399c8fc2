use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Shares outstanding as a step function of date.
///
/// Breakpoints are `(effective_date, shares)` pairs sorted by date; a lookup
/// returns the shares of the last breakpoint at or before the query date, or
/// the baseline for earlier dates. The default schedule is a manual estimate,
/// not a sourced figure; treat it as a replaceable input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharesSchedule {
    pub baseline: f64,
    pub breakpoints: Vec<(NaiveDate, f64)>,
}

impl Default for SharesSchedule {
    fn default() -> Self {
        let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).expect("valid date");
        Self {
            baseline: 160_000_000.0,
            breakpoints: vec![
                (d(2020, 8, 1), 165_000_000.0),
                (d(2021, 1, 1), 170_000_000.0),
                (d(2022, 1, 1), 180_000_000.0),
                (d(2023, 1, 1), 190_000_000.0),
                (d(2024, 1, 1), 220_000_000.0),
                (d(2024, 11, 1), 280_000_000.0),
                (d(2025, 1, 1), 320_000_000.0),
            ],
        }
    }
}

impl SharesSchedule {
    /// Shares outstanding in effect on `date`.
    pub fn shares_on(&self, date: NaiveDate) -> f64 {
        let mut shares = self.baseline;
        for &(effective, count) in &self.breakpoints {
            if date >= effective {
                shares = count;
            } else {
                break;
            }
        }
        shares
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_function_lookup() {
        let s = SharesSchedule::default();
        let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
        assert_eq!(s.shares_on(d(2020, 7, 31)), 160_000_000.0);
        assert_eq!(s.shares_on(d(2020, 8, 1)), 165_000_000.0);
        assert_eq!(s.shares_on(d(2024, 10, 31)), 220_000_000.0);
        assert_eq!(s.shares_on(d(2025, 6, 1)), 320_000_000.0);
    }
}
