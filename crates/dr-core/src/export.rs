//! CSV export of the probability table, and reading an export back.
//!
//! One row per target number, under a fixed header. Existing files are
//! only replaced when the caller explicitly asks for it.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::ReachConfig;
use crate::day::Day;
use crate::error::{ReachError, ReachResult};
use crate::format;
use crate::table::ProbabilityTable;

/// Column names of an exported file, in order.
pub const HEADER: [&str; 5] = [
    "Number",
    "Reachable_Days_Count",
    "Probability_decimal",
    "Probability_percent",
    "Reachable_Days",
];

/// One parsed data row of an exported file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRow {
    /// The target number.
    #[serde(rename = "Number")]
    pub number: u32,
    /// How many days reach it.
    #[serde(rename = "Reachable_Days_Count")]
    pub count: usize,
    /// Probability as a fraction, rounded to the export precision.
    #[serde(rename = "Probability_decimal")]
    pub probability: f64,
    /// Probability as a percentage string such as `19.35%`.
    #[serde(rename = "Probability_percent")]
    pub percent: String,
    /// Contributing days, space-separated.
    #[serde(rename = "Reachable_Days")]
    pub days: String,
}

impl ExportRow {
    /// Parses the space-separated day column.
    pub fn parsed_days(&self) -> ReachResult<Vec<Day>> {
        self.days
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<u8>()
                    .map_err(|_| ReachError::MalformedRow {
                        row: self.number as usize,
                        message: format!("bad day \"{token}\""),
                    })
                    .and_then(Day::new)
            })
            .collect()
    }
}

/// Writes the header and one row per target number to `writer`.
pub fn write_csv<W: Write>(
    table: &ProbabilityTable,
    writer: W,
    config: &ReachConfig,
) -> ReachResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;
    for row in table.rows() {
        let p = row.probability();
        let days: Vec<String> = row.days.iter().map(Day::to_string).collect();
        wtr.write_record([
            row.target.to_string(),
            row.count().to_string(),
            format::decimal(p, config),
            format::percent(p, config),
            days.join(" "),
        ])?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Exports the table to `path`.
///
/// Fails with [`ReachError::ExportExists`] if the file exists and
/// `overwrite` is false.
pub fn export_csv(
    table: &ProbabilityTable,
    path: &Path,
    config: &ReachConfig,
    overwrite: bool,
) -> ReachResult<()> {
    if path.exists() && !overwrite {
        warn!(path = %path.display(), "export target exists, not overwriting");
        return Err(ReachError::ExportExists(path.to_path_buf()));
    }
    let file = File::create(path).map_err(|source| ReachError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_csv(table, file, config)?;
    info!(path = %path.display(), rows = table.rows().len(), "exported CSV");
    Ok(())
}

/// Reads exported rows from `reader`. The header row is required.
pub fn read_csv<R: Read>(reader: R) -> ReachResult<Vec<ExportRow>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let rows = rdr.deserialize().collect::<Result<Vec<ExportRow>, _>>()?;
    Ok(rows)
}

/// Reads an exported file from `path`.
pub fn import_csv(path: &Path) -> ReachResult<Vec<ExportRow>> {
    let file = File::open(path).map_err(|source| ReachError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_csv(file)
}
