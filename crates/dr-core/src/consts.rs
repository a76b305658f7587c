/// Smallest day of the month.
pub const FIRST_DAY: u8 = 1;
/// Largest day of the month. Month lengths are not checked.
pub const LAST_DAY: u8 = 31;

/// Smallest target number.
pub const MIN_TARGET: u32 = 1;
/// Largest target number.
pub const MAX_TARGET: u32 = 65;
