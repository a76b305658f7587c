//! Configuration for computing and displaying probabilities.

use crate::day::DayRange;
use crate::table::ProbabilityTable;

/// Most decimal places either display precision may use.
const MAX_PLACES: usize = 10;

/// Day range and display precision shared by every front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReachConfig {
    /// Days searched for each target number.
    pub days: DayRange,
    /// Decimal places for probabilities shown as fractions.
    pub decimals: usize,
    /// Decimal places for probabilities shown as percentages.
    pub percent_decimals: usize,
}

impl Default for ReachConfig {
    fn default() -> Self {
        Self {
            days: DayRange::default(),
            decimals: 5,
            percent_decimals: 2,
        }
    }
}

impl ReachConfig {
    /// Set the day range.
    pub fn with_days(mut self, days: DayRange) -> Self {
        self.days = days;
        self
    }

    /// Set the fraction precision (clamped to 0-10).
    pub fn with_decimals(mut self, places: usize) -> Self {
        self.decimals = places.min(MAX_PLACES);
        self
    }

    /// Set the percentage precision (clamped to 0-10).
    pub fn with_percent_decimals(mut self, places: usize) -> Self {
        self.percent_decimals = places.min(MAX_PLACES);
        self
    }

    /// Compute the full table over the configured range.
    pub fn table(&self) -> ProbabilityTable {
        ProbabilityTable::compute(self.days)
    }
}
