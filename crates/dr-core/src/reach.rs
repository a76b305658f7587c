use serde::Serialize;
use tracing::debug;

use crate::day::{Day, DayRange};
use crate::error::ReachResult;
use crate::target::TargetNumber;

/// The days that reach one target number.
///
/// A day `D` reaches `N` when `D * M = N` for some positive multiplier `M`,
/// i.e. when `D` divides `N`. Days are kept in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reachability {
    /// The number being evaluated.
    pub target: TargetNumber,
    /// Contributing days, ascending.
    pub days: Vec<Day>,
    /// The span of days that was searched.
    pub range: DayRange,
}

impl Reachability {
    /// Number of contributing days.
    pub fn count(&self) -> usize {
        self.days.len()
    }

    /// Whether at least one day reaches the target.
    pub fn is_reachable(&self) -> bool {
        !self.days.is_empty()
    }

    /// Fraction of the searched days that reach the target, in `0.0..=1.0`.
    pub fn probability(&self) -> f64 {
        self.days.len() as f64 / f64::from(self.range.day_count())
    }

    /// [`probability`](Self::probability) scaled to `0.0..=100.0`.
    pub fn percent(&self) -> f64 {
        self.probability() * 100.0
    }

    /// Each contributing day paired with the multiplier that reaches the target.
    pub fn multipliers(&self) -> impl Iterator<Item = (Day, u32)> + '_ {
        let target = self.target.get();
        self.days
            .iter()
            .map(move |&day| (day, target / u32::from(day.get())))
    }
}

/// Computes which days in `range` reach `target`.
pub fn reachability(target: TargetNumber, range: DayRange) -> Reachability {
    let number = target.get();
    let days: Vec<Day> = range.days().filter(|day| day.divides(number)).collect();
    debug!(number, count = days.len(), %range, "computed reachability");
    Reachability {
        target,
        days,
        range,
    }
}

/// Validates a raw number and computes its reachability over all 31 days.
pub fn reachability_of(number: u32) -> ReachResult<Reachability> {
    let target = TargetNumber::new(number)?;
    Ok(reachability(target, DayRange::default()))
}
