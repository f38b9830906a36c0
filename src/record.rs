use crate::consts::{MAX_MONTH_DAYS, MAX_YEAR_DAYS, MIN_DAY, MIN_YEAR_DAYS, MONTHS_PER_YEAR};
use crate::{AdDate, AdSpan, BsMonth, LoadError};
use jiff::Span;
use serde::{Deserialize, Serialize};

/// One BS year of calendar data: the AD date of Baisakh 1 and the length of
/// each of the twelve months.
///
/// Records are validated on construction, so a `YearRecord` always covers
/// between `MIN_YEAR_DAYS` and `MAX_YEAR_DAYS` days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawYearRecord", into = "RawYearRecord")]
pub struct YearRecord {
    bs_year:       u16,
    month_lengths: [u8; MONTHS_PER_YEAR],
    span:          AdSpan,
}

/// Serialized shape of a record in the calendar data file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawYearRecord {
    year:          u16,
    start_date:    AdDate,
    month_lengths: [u8; MONTHS_PER_YEAR],
}

impl YearRecord {
    /// Creates a record, validating month lengths and the resulting year length
    ///
    /// # Errors
    /// Returns `LoadError::InvalidRecord` if a month is shorter than one day or
    /// longer than `MAX_MONTH_DAYS`, or if the year length is outside
    /// `MIN_YEAR_DAYS..=MAX_YEAR_DAYS`. Returns `LoadError::Date` if the end
    /// date cannot be represented.
    pub fn new(
        bs_year: u16,
        ad_start_date: AdDate,
        month_lengths: [u8; MONTHS_PER_YEAR],
    ) -> Result<Self, LoadError> {
        if let Some((index, &length)) = month_lengths
            .iter()
            .enumerate()
            .find(|&(_, &length)| !(MIN_DAY..=MAX_MONTH_DAYS).contains(&length))
        {
            return Err(LoadError::InvalidRecord {
                year:   bs_year,
                reason: format!(
                    "month {} has {length} days (must be {MIN_DAY}-{MAX_MONTH_DAYS})",
                    index + 1
                ),
            });
        }

        let total = month_lengths.iter().copied().map(u32::from).sum::<u32>();
        if !(MIN_YEAR_DAYS..=MAX_YEAR_DAYS).contains(&total) {
            return Err(LoadError::InvalidRecord {
                year:   bs_year,
                reason: format!(
                    "year has {total} days (must be {MIN_YEAR_DAYS}-{MAX_YEAR_DAYS})"
                ),
            });
        }

        let ad_end_date = ad_start_date.checked_add(Span::new().try_days(i64::from(total - 1))?)?;
        let span = AdSpan::new(ad_start_date, ad_end_date)?;

        Ok(Self {
            bs_year,
            month_lengths,
            span,
        })
    }

    /// Returns the BS year
    #[inline]
    pub const fn bs_year(&self) -> u16 {
        self.bs_year
    }

    /// AD date of Baisakh 1
    #[inline]
    pub const fn ad_start_date(&self) -> AdDate {
        self.span.start()
    }

    /// AD date of the last day of Chaitra
    #[inline]
    pub const fn ad_end_date(&self) -> AdDate {
        self.span.end()
    }

    /// AD dates covered by this year
    #[inline]
    pub const fn span(&self) -> AdSpan {
        self.span
    }

    /// Lengths of all twelve months, Baisakh first
    #[inline]
    pub const fn month_lengths(&self) -> &[u8; MONTHS_PER_YEAR] {
        &self.month_lengths
    }

    /// Number of days in the given month of this year
    #[inline]
    pub const fn month_length(&self, month: BsMonth) -> u8 {
        self.month_lengths[month.index()]
    }

    /// Number of days in the months before `month` (zero for Baisakh)
    pub fn days_before(&self, month: BsMonth) -> u32 {
        self.month_lengths[..month.index()]
            .iter()
            .copied()
            .map(u32::from)
            .sum()
    }

    /// Number of days in the whole year
    pub fn total_days(&self) -> u32 {
        self.days_before(BsMonth::Chaitra) + u32::from(self.month_length(BsMonth::Chaitra))
    }
}

impl TryFrom<RawYearRecord> for YearRecord {
    type Error = LoadError;

    fn try_from(raw: RawYearRecord) -> Result<Self, Self::Error> {
        Self::new(raw.year, raw.start_date, raw.month_lengths)
    }
}

impl From<YearRecord> for RawYearRecord {
    fn from(record: YearRecord) -> Self {
        Self {
            year:          record.bs_year,
            start_date:    record.ad_start_date(),
            month_lengths: record.month_lengths,
        }
    }
}
