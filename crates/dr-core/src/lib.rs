//! Day reachability: which calendar days multiply up to a given number.
//!
//! A target number `N` in `1..=65` is *reachable* by a day `D` in `1..=31`
//! when some positive multiplier `M` gives `D * M = N`, i.e. when `D`
//! divides `N`. The probability of `N` is the fraction of days that reach it.
//!
//! Everything here is pure and recomputed on demand. Front ends (the CLI and
//! the desktop window) only format and export what this crate returns.

/// Fixed bounds for days and target numbers.
pub mod consts;
/// Validated day and day-range types.
pub mod day;
/// Error types used throughout the crate.
pub mod error;
/// CSV export and re-import of the probability table.
pub mod export;
/// Fixed-precision text rendering of results and insights.
pub mod format;
/// Most/least likely numbers across the whole table.
pub mod insights;
/// Tracing subscriber setup shared by the binaries.
pub mod logging;
/// The reachability calculator.
pub mod reach;
/// Probability table over every target number.
pub mod table;
/// Validated target number type.
pub mod target;

mod config;

pub use config::ReachConfig;
pub use consts::*;
/// Re-export day types.
pub use day::{Day, DayRange};
/// Re-export error types.
pub use error::{ReachError, ReachResult};
/// Re-export export helpers.
pub use export::{ExportRow, export_csv, import_csv, read_csv, write_csv};
pub use insights::Insights;
/// Re-export the calculator.
pub use reach::{Reachability, reachability, reachability_of};
pub use table::ProbabilityTable;
pub use target::TargetNumber;
