use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::consts::{FIRST_DAY, LAST_DAY};
use crate::error::{ReachError, ReachResult};

/// A day of the month, always within `FIRST_DAY..=LAST_DAY`.
///
/// Every one of the 31 values is considered regardless of month length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(u8);

impl Day {
    /// Creates a day, rejecting values outside the calendar range.
    pub fn new(value: u8) -> ReachResult<Self> {
        if (FIRST_DAY..=LAST_DAY).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ReachError::DayOutOfRange(value))
        }
    }

    /// Returns the raw day number.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Whether this day divides `number` evenly.
    pub fn divides(self, number: u32) -> bool {
        number % u32::from(self.0) == 0
    }
}

impl TryFrom<u8> for Day {
    type Error = ReachError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An inclusive, non-empty span of days inside the calendar range.
///
/// The number of days in the span is the denominator of every probability
/// computed over it. The default span covers all 31 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DayRange {
    first: Day,
    last: Day,
}

impl DayRange {
    /// Creates a range, rejecting reversed spans and out-of-calendar ends.
    pub fn new(first: u8, last: u8) -> ReachResult<Self> {
        let invalid = || ReachError::InvalidDayRange { first, last };
        if first > last {
            return Err(invalid());
        }
        let first_day = Day::new(first).map_err(|_| invalid())?;
        let last_day = Day::new(last).map_err(|_| invalid())?;
        Ok(Self {
            first: first_day,
            last: last_day,
        })
    }

    /// First day of the range.
    pub const fn first(&self) -> Day {
        self.first
    }

    /// Last day of the range.
    pub const fn last(&self) -> Day {
        self.last
    }

    /// How many days the range spans. Never zero.
    pub fn day_count(&self) -> u32 {
        u32::from(self.last.0 - self.first.0) + 1
    }

    /// Whether `day` falls inside the range.
    pub fn contains(&self, day: Day) -> bool {
        self.first <= day && day <= self.last
    }

    /// Iterates the days in ascending order.
    pub fn days(&self) -> impl Iterator<Item = Day> + use<> {
        self.raw().map(Day)
    }

    fn raw(&self) -> RangeInclusive<u8> {
        self.first.0..=self.last.0
    }
}

impl Default for DayRange {
    fn default() -> Self {
        Self {
            first: Day(FIRST_DAY),
            last: Day(LAST_DAY),
        }
    }
}

impl fmt::Display for DayRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.first, self.last)
    }
}
