use std::path::PathBuf;

use crate::consts::{FIRST_DAY, LAST_DAY, MAX_TARGET, MIN_TARGET};

/// Alias for `Result<T, ReachError>`.
pub type ReachResult<T> = Result<T, ReachError>;

/// Errors that can occur when computing or exporting reachability.
#[derive(Debug, thiserror::Error)]
pub enum ReachError {
    /// A day value lies outside the calendar range.
    #[error("day out of range: {0} (must be {first}-{last})", first = FIRST_DAY, last = LAST_DAY)]
    DayOutOfRange(u8),

    /// A day range is empty, reversed, or leaves the calendar range.
    #[error(
        "invalid day range: {first}..={last} (must satisfy {min} <= first <= last <= {max})",
        min = FIRST_DAY,
        max = LAST_DAY
    )]
    InvalidDayRange {
        /// Requested first day.
        first: u8,
        /// Requested last day.
        last: u8,
    },

    /// A target number lies outside the supported range.
    #[error("target number out of range: {0} (must be {min}-{max})", min = MIN_TARGET, max = MAX_TARGET)]
    TargetOutOfRange(i64),

    /// Text that could not be read as a target number at all.
    #[error("invalid target number: \"{0}\"")]
    InvalidTarget(String),

    /// An export would replace a file that already exists.
    #[error("refusing to overwrite existing file {}", .0.display())]
    ExportExists(PathBuf),

    /// Opening or creating a file failed.
    #[error("cannot access {}: {source}", path.display())]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Writing or parsing CSV failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A CSV field held data that does not describe a valid row.
    #[error("malformed export row {row}: {message}")]
    MalformedRow {
        /// One-based data row number.
        row: usize,
        /// What was wrong with it.
        message: String,
    },
}
