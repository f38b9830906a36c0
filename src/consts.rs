/// First BS year covered by the bundled calendar data
pub const MIN_BS_YEAR: u16 = 2000;

/// Last BS year covered by the bundled calendar data (inclusive)
pub const MAX_BS_YEAR: u16 = 2085;

/// Number of months in every BS year
pub const MONTHS_PER_YEAR: usize = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Longest month a BS year may contain
pub const MAX_MONTH_DAYS: u8 = 32;

/// Shortest BS year accepted from a dataset, in days
pub const MIN_YEAR_DAYS: u32 = 354;

/// Longest BS year accepted from a dataset, in days
pub const MAX_YEAR_DAYS: u32 = 366;

/// Date component separator (ISO 8601 style, `YYYY-MM-DD`)
pub const DATE_SEPARATOR: char = '-';

/// Separator between the two ends of an `AdSpan` when displayed
pub const SPAN_SEPARATOR: char = '/';
