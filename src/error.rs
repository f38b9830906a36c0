//! Error types for dataset loading and date conversion.

use crate::{AdDate, BsDate, SpanError};

/// Broad classification of a [`ConversionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The date falls outside the span covered by the calendar data
    OutOfRange,
    /// The BS year is known but the day does not exist in that month
    InvalidBsDate,
    /// The calendar data contradicted itself during a lookup
    InvalidState,
}

/// Error returned by a single conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// AD date is outside the supported range.
    #[error("AD date {0} is outside the supported BS range")]
    AdOutOfRange(AdDate),

    /// BS year has no entry in the calendar data.
    #[error("BS year {0} is not supported by the calendar data")]
    BsYearOutOfRange(u16),

    /// Day is zero or longer than the month in that year.
    #[error("Invalid day {} for {} {} (month has {max_day} days)", .date.day(), .date.month(), .date.year())]
    InvalidBsDate { date: BsDate, max_day: u8 },

    /// Calendar data is inconsistent; not caused by the caller's input.
    #[error("Calendar data for BS year {year} is inconsistent: {reason}")]
    InvalidState { year: u16, reason: String },
}

impl ConversionError {
    /// Returns the classification of this error
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::AdOutOfRange(_) | Self::BsYearOutOfRange(_) => ErrorKind::OutOfRange,
            Self::InvalidBsDate { .. } => ErrorKind::InvalidBsDate,
            Self::InvalidState { .. } => ErrorKind::InvalidState,
        }
    }

    /// Whether the error was caused by the input rather than by bad calendar data
    pub const fn is_caller_error(&self) -> bool {
        !matches!(self.kind(), ErrorKind::InvalidState)
    }

    pub(crate) fn invalid_state(year: u16, reason: impl ToString) -> Self {
        Self::InvalidState {
            year,
            reason: reason.to_string(),
        }
    }
}

/// Error raised while building a year table. Any of these aborts construction.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Dataset is not valid JSON or does not match the record format.
    #[error("Failed to parse calendar data: {0}")]
    Json(#[from] serde_json::Error),

    /// Dataset has no records.
    #[error("Calendar data contains no years")]
    Empty,

    /// A record's month lengths are out of bounds.
    #[error("Invalid record for BS year {year}: {reason}")]
    InvalidRecord { year: u16, reason: String },

    /// Two records share a BS year.
    #[error("Duplicate BS year {0} in calendar data")]
    DuplicateYear(u16),

    /// Two records share an AD start date.
    #[error("Duplicate AD start date {0} in calendar data")]
    DuplicateStartDate(AdDate),

    /// BS years do not increase together with AD start dates.
    #[error("BS year {next} starts after BS year {previous} but is not greater")]
    NonMonotonicYear { previous: u16, next: u16 },

    /// Consecutive years leave a gap or overlap.
    #[error(
        "BS year {next} should start on {expected} to follow BS year {previous}, found {found}"
    )]
    Discontinuity {
        previous: u16,
        next: u16,
        expected: AdDate,
        found: AdDate,
    },

    /// Covered span could not be formed.
    #[error(transparent)]
    Span(#[from] SpanError),

    /// Date arithmetic left the representable range.
    #[error("Date arithmetic failed: {0}")]
    Date(#[from] jiff::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BsMonth;
    use jiff::civil::date;

    #[test]
    fn test_kind_classification() {
        let cases = [
            (
                ConversionError::AdOutOfRange(date(1943, 4, 13)),
                ErrorKind::OutOfRange,
                true,
            ),
            (
                ConversionError::BsYearOutOfRange(1999),
                ErrorKind::OutOfRange,
                true,
            ),
            (
                ConversionError::InvalidBsDate {
                    date: BsDate::new(2082, BsMonth::Baisakh, 32),
                    max_day: 31,
                },
                ErrorKind::InvalidBsDate,
                true,
            ),
            (
                ConversionError::invalid_state(2050, "month walk overran the year"),
                ErrorKind::InvalidState,
                false,
            ),
        ];

        for (error, kind, caller) in &cases {
            assert_eq!(error.kind(), *kind, "{error}");
            assert_eq!(error.is_caller_error(), *caller, "{error}");
        }
    }

    #[test]
    fn test_conversion_error_messages() {
        let error = ConversionError::InvalidBsDate {
            date: BsDate::new(2082, BsMonth::Baisakh, 32),
            max_day: 31,
        };
        assert_eq!(
            error.to_string(),
            "Invalid day 32 for Baisakh 2082 (month has 31 days)"
        );

        let error = ConversionError::AdOutOfRange(date(2045, 1, 1));
        assert_eq!(
            error.to_string(),
            "AD date 2045-01-01 is outside the supported BS range"
        );

        let error = ConversionError::invalid_state(2001, "gap");
        assert_eq!(
            error.to_string(),
            "Calendar data for BS year 2001 is inconsistent: gap"
        );
    }

    #[test]
    fn test_load_error_from_json() {
        let json_error = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let error: LoadError = json_error.into();
        assert!(matches!(error, LoadError::Json(_)));
        assert!(error.to_string().starts_with("Failed to parse calendar data"));
    }

    #[test]
    fn test_discontinuity_message() {
        let error = LoadError::Discontinuity {
            previous: 2000,
            next: 2001,
            expected: date(1944, 4, 13),
            found: date(1944, 4, 15),
        };
        assert_eq!(
            error.to_string(),
            "BS year 2001 should start on 1944-04-13 to follow BS year 2000, found 1944-04-15"
        );
    }
}
