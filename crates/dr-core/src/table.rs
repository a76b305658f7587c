use crate::day::DayRange;
use crate::insights::Insights;
use crate::reach::{Reachability, reachability};
use crate::target::TargetNumber;

/// Reachability of every target number over one day range, ascending by number.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityTable {
    range: DayRange,
    rows: Vec<Reachability>,
}

impl ProbabilityTable {
    /// Evaluates every target number over `range`.
    pub fn compute(range: DayRange) -> Self {
        let rows = TargetNumber::all()
            .map(|target| reachability(target, range))
            .collect();
        Self { range, rows }
    }

    /// The day range every row was computed over.
    pub fn range(&self) -> DayRange {
        self.range
    }

    /// All rows, one per target number.
    pub fn rows(&self) -> &[Reachability] {
        &self.rows
    }

    /// The row for a single target number.
    pub fn get(&self, target: TargetNumber) -> &Reachability {
        // rows are built from TargetNumber::all(), so index = number - 1
        &self.rows[(target.get() - crate::consts::MIN_TARGET) as usize]
    }

    /// Highest probability in the table; used to scale charts.
    pub fn max_probability(&self) -> f64 {
        self.rows
            .iter()
            .map(Reachability::probability)
            .fold(0.0, f64::max)
    }

    /// Most and least likely numbers across the table.
    pub fn insights(&self) -> Insights {
        Insights::from_table(self)
    }
}

impl Default for ProbabilityTable {
    fn default() -> Self {
        Self::compute(DayRange::default())
    }
}
