pub mod chart;
pub mod check;
pub mod export;
pub mod insights;
pub mod table;

use dr_core::{DayRange, ReachConfig};

/// Build the shared configuration from the global flags.
pub fn config(
    first_day: u8,
    last_day: u8,
    decimals: usize,
    percent_decimals: usize,
) -> Result<ReachConfig, String> {
    let days = DayRange::new(first_day, last_day).map_err(|e| e.to_string())?;
    Ok(ReachConfig::default()
        .with_days(days)
        .with_decimals(decimals)
        .with_percent_decimals(percent_decimals))
}
