//! Conversion between Gregorian (AD) dates and Bikram Sambat (BS) dates.
//!
//! BS month lengths change from year to year, so conversion is driven by a
//! table of month lengths per BS year rather than by a formula. The crate
//! bundles data for BS 2000 through 2085 (AD 1943-04-14 through 2029-04-13).
//!
//! ```
//! use bikram_sambat::{BsDate, BsMonth, NepaliDateConverter};
//! use jiff::civil::date;
//!
//! let converter = NepaliDateConverter::new()?;
//!
//! let bs = converter.to_bs(date(1945, 11, 29))?;
//! assert_eq!(bs, BsDate::new(2002, BsMonth::Mangsir, 14));
//! assert_eq!(bs.to_string(), "2002-08-14");
//!
//! let ad = converter.to_ad("2072-01-12".parse()?)?;
//! assert_eq!(ad, date(2015, 4, 25));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod consts;
mod converter;
mod data;
mod error;
mod prelude;
mod record;
mod span;
mod table;
mod types;

pub use consts::*;
pub use converter::NepaliDateConverter;
pub use data::{BUNDLED_CALENDAR_JSON, bundled_year_records, load_year_records};
pub use error::{ConversionError, ErrorKind, LoadError};
pub use record::YearRecord;
pub use span::{AdSpan, SpanError};
pub use table::YearTable;
pub use types::BsMonth;

use crate::prelude::*;
use std::str::FromStr;

/// A proleptic Gregorian calendar date without time zone
pub type AdDate = jiff::civil::Date;

/// A date in the Bikram Sambat calendar.
///
/// Construction only checks the shape of the date (month 1-12, day 1-32).
/// Whether the day exists in that month of that year depends on the
/// calendar data; see [`NepaliDateConverter::is_valid`].
///
/// Dates order by year, then month, then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, "month.value()", day)]
pub struct BsDate {
    year:  u16,
    month: BsMonth,
    day:   u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MONTHS_PER_YEAR)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day: {} (must be {}-{})", "_0", MIN_DAY, MAX_MONTH_DAYS)]
    InvalidDay(u8),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl BsDate {
    /// Creates a date from already-typed parts
    pub const fn new(year: u16, month: BsMonth, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a date from raw numbers, checking month and day bounds
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` or `ParseError::InvalidDay`.
    pub fn from_parts(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let month = BsMonth::from_value(month)?;
        if !(MIN_DAY..=MAX_MONTH_DAYS).contains(&day) {
            return Err(ParseError::InvalidDay(day));
        }
        Ok(Self { year, month, day })
    }

    /// Returns the BS year
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns the month
    #[inline]
    pub const fn month(&self) -> BsMonth {
        self.month
    }

    /// Returns the day of month (1-based)
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Helper to parse a numeric component with better error messages
    fn parse_part<T: FromStr>(s: &str) -> Result<T, ParseError> {
        s.trim()
            .parse::<T>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl FromStr for BsDate {
    type Err = ParseError;

    /// Parses `YYYY-MM-DD`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected 2 {} separators, found {}: {trimmed}",
                DATE_SEPARATOR,
                parts.len() - 1
            )));
        };

        Self::from_parts(
            Self::parse_part(year)?,
            Self::parse_part(month)?,
            Self::parse_part(day)?,
        )
    }
}

impl TryFrom<(u16, u8, u8)> for BsDate {
    type Error = ParseError;

    fn try_from(value: (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::from_parts(value.0, value.1, value.2)
    }
}

impl serde::Serialize for BsDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for BsDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
