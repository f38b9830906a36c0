use crate::{AdDate, SPAN_SEPARATOR, prelude::*};

/// An inclusive interval of AD dates.
/// The start date must be less than or equal to the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}{}{}", start, SPAN_SEPARATOR, end)]
pub struct AdSpan {
    start: AdDate,
    end:   AdDate,
}

/// Error type for span construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpanError {
    /// Start date is after end date.
    #[error("Invalid date span: start ({start}) is after end ({end})")]
    InvalidSpan { start: AdDate, end: AdDate },
}

impl AdSpan {
    /// Creates a new span with validation.
    ///
    /// # Errors
    /// Returns `SpanError::InvalidSpan` if start > end.
    pub fn new(start: AdDate, end: AdDate) -> Result<Self, SpanError> {
        if start > end {
            return Err(SpanError::InvalidSpan { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the first date of the span
    pub const fn start(&self) -> AdDate {
        self.start
    }

    /// Returns the last date of the span (inclusive)
    pub const fn end(&self) -> AdDate {
        self.end
    }

    /// Checks if the span contains a given date
    pub fn contains(&self, date: AdDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Checks if this span shares at least one date with another span
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Checks if this span is completely contained within another span
    pub fn is_within(&self, other: &Self) -> bool {
        other.start <= self.start && self.end <= other.end
    }

    /// Number of dates in the span, counting both ends
    pub fn days(&self) -> i64 {
        // Both ends are valid civil dates, so the difference always fits.
        self.start
            .until(self.end)
            .map_or(0, |span| i64::from(span.get_days()))
            + 1
    }

    /// Checks if `other` begins on the day right after this span ends
    pub fn is_followed_by(&self, other: &Self) -> bool {
        self.end.tomorrow().is_ok_and(|next| next == other.start)
    }
}
