use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_TARGET, MIN_TARGET};
use crate::error::{ReachError, ReachResult};

/// A number whose reachability is evaluated, always within
/// `MIN_TARGET..=MAX_TARGET`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct TargetNumber(u32);

impl TargetNumber {
    /// The smallest target number.
    pub const MIN: Self = Self(MIN_TARGET);
    /// The largest target number.
    pub const MAX: Self = Self(MAX_TARGET);

    /// Creates a target number. Out-of-range values are rejected, not clamped.
    pub fn new(value: u32) -> ReachResult<Self> {
        if (MIN_TARGET..=MAX_TARGET).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ReachError::TargetOutOfRange(i64::from(value)))
        }
    }

    /// Returns the raw number.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Iterates every valid target number in ascending order.
    pub fn all() -> impl Iterator<Item = TargetNumber> {
        (MIN_TARGET..=MAX_TARGET).map(Self)
    }
}

impl TryFrom<u32> for TargetNumber {
    type Error = ReachError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TargetNumber> for u32 {
    fn from(target: TargetNumber) -> Self {
        target.0
    }
}

impl FromStr for TargetNumber {
    type Err = ReachError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| ReachError::InvalidTarget(trimmed.to_string()))?;
        u32::try_from(value)
            .map_err(|_| ReachError::TargetOutOfRange(value))
            .and_then(Self::new)
    }
}

impl fmt::Display for TargetNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
