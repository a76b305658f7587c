use serde::Serialize;

use crate::reach::Reachability;
use crate::table::ProbabilityTable;
use crate::target::TargetNumber;

/// Most and least likely target numbers across a whole table.
///
/// Ties are kept: every number sharing the extreme count is listed, ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insights {
    /// Numbers reached by the most days.
    pub most_likely: Vec<TargetNumber>,
    /// Day count shared by `most_likely`.
    pub most_count: usize,
    /// Numbers reached by the fewest days.
    pub least_likely: Vec<TargetNumber>,
    /// Day count shared by `least_likely`.
    pub least_count: usize,
    /// Every distinct day count in the table, highest first.
    pub distinct_counts: Vec<usize>,
    /// Size of the day range the counts were taken over.
    pub day_count: u32,
}

impl Insights {
    /// Derives insights from a computed table.
    pub fn from_table(table: &ProbabilityTable) -> Self {
        let rows = table.rows();
        let most_count = rows.iter().map(Reachability::count).max().unwrap_or(0);
        let least_count = rows.iter().map(Reachability::count).min().unwrap_or(0);

        let with_count = |count: usize| -> Vec<TargetNumber> {
            rows.iter()
                .filter(|r| r.count() == count)
                .map(|r| r.target)
                .collect()
        };

        let mut distinct_counts: Vec<usize> = rows.iter().map(Reachability::count).collect();
        distinct_counts.sort_unstable_by(|a, b| b.cmp(a));
        distinct_counts.dedup();

        Self {
            most_likely: with_count(most_count),
            most_count,
            least_likely: with_count(least_count),
            least_count,
            distinct_counts,
            day_count: table.range().day_count(),
        }
    }

    /// Probability shared by the most likely numbers.
    pub fn most_probability(&self) -> f64 {
        self.most_count as f64 / f64::from(self.day_count)
    }

    /// Probability shared by the least likely numbers.
    pub fn least_probability(&self) -> f64 {
        self.least_count as f64 / f64::from(self.day_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::day::DayRange;

    fn numbers(targets: &[TargetNumber]) -> Vec<u32> {
        targets.iter().map(|t| t.get()).collect()
    }

    #[test]
    fn default_table_insights() {
        let insights = ProbabilityTable::default().insights();
        assert_eq!(numbers(&insights.most_likely), vec![60]);
        assert_eq!(insights.most_count, 11);
        assert_eq!(
            numbers(&insights.least_likely),
            vec![1, 37, 41, 43, 47, 53, 59, 61]
        );
        assert_eq!(insights.least_count, 1);
        assert!((insights.least_probability() - 1.0 / 31.0).abs() < 1e-12);
        assert!((insights.most_probability() - 11.0 / 31.0).abs() < 1e-12);
    }

    #[test]
    fn distinct_counts_descending() {
        let insights = ProbabilityTable::default().insights();
        assert_eq!(insights.distinct_counts.first(), Some(&11));
        assert_eq!(insights.distinct_counts.last(), Some(&1));
        assert!(insights.distinct_counts.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn ties_reported_as_set() {
        // Over days 1..=2 every even number has two days and every odd one has one.
        let table = ProbabilityTable::compute(DayRange::new(1, 2).unwrap());
        let insights = table.insights();
        assert_eq!(insights.most_count, 2);
        assert_eq!(insights.most_likely.len(), 32);
        assert!(insights.most_likely.iter().all(|t| t.get() % 2 == 0));
        assert_eq!(insights.least_count, 1);
        assert_eq!(insights.least_likely.len(), 33);
        assert_eq!(insights.distinct_counts, vec![2, 1]);
    }

    #[test]
    fn unreachable_numbers_can_be_least_likely() {
        let table = ProbabilityTable::compute(DayRange::new(30, 31).unwrap());
        let insights = table.insights();
        assert_eq!(insights.least_count, 0);
        assert_eq!(numbers(&insights.most_likely), vec![30, 31, 60, 62]);
    }
}
