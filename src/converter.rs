use jiff::Span;

use crate::consts::MIN_DAY;
use crate::{
    AdDate, AdSpan, BsDate, BsMonth, ConversionError, LoadError, YearRecord, YearTable,
};

/// Converts dates between the Gregorian (AD) and Bikram Sambat (BS)
/// calendars using a [`YearTable`].
///
/// The converter is immutable after construction; share it by reference
/// across threads freely.
#[derive(Debug, Clone)]
pub struct NepaliDateConverter {
    table: YearTable,
}

impl NepaliDateConverter {
    /// Creates a converter over the calendar data bundled with the crate
    /// (BS `MIN_BS_YEAR..=MAX_BS_YEAR`).
    ///
    /// # Errors
    /// Returns `LoadError` only if the embedded data is corrupt.
    pub fn new() -> Result<Self, LoadError> {
        YearTable::bundled().map(Self::from_table)
    }

    /// Creates a converter over a JSON data document
    ///
    /// # Errors
    /// Returns `LoadError` if the document cannot be parsed or indexed.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        YearTable::from_json(json).map(Self::from_table)
    }

    /// Creates a converter over already-parsed records
    ///
    /// # Errors
    /// Returns `LoadError` if the records are not a single unbroken run of years.
    pub fn from_records(records: impl IntoIterator<Item = YearRecord>) -> Result<Self, LoadError> {
        YearTable::new(records).map(Self::from_table)
    }

    pub const fn from_table(table: YearTable) -> Self {
        Self { table }
    }

    pub const fn table(&self) -> &YearTable {
        &self.table
    }

    /// Converts an AD date to its BS equivalent.
    ///
    /// # Errors
    /// Returns `ConversionError::AdOutOfRange` if no BS year covers the date,
    /// or `ConversionError::InvalidState` if the matching year's month
    /// lengths do not account for the date.
    pub fn to_bs(&self, ad_date: AdDate) -> Result<BsDate, ConversionError> {
        let Some(record) = self.table.containing(ad_date) else {
            tracing::trace!(%ad_date, "AD date out of range");
            return Err(ConversionError::AdOutOfRange(ad_date));
        };
        let year = record.bs_year();

        let days = record
            .ad_start_date()
            .until(ad_date)
            .map_err(|e| ConversionError::invalid_state(year, e))?
            .get_days();
        let mut offset = u32::try_from(days).map_err(|_| {
            ConversionError::invalid_state(year, format!("{ad_date} is before the start of the year"))
        })?;

        for month in BsMonth::ALL {
            let length = u32::from(record.month_length(month));
            if offset < length {
                let day = u8::try_from(offset + 1)
                    .map_err(|e| ConversionError::invalid_state(year, e))?;
                let bs_date = BsDate::new(year, month, day);
                tracing::trace!(%ad_date, %bs_date, "converted to BS");
                return Ok(bs_date);
            }
            offset -= length;
        }

        Err(ConversionError::invalid_state(
            year,
            format!("month lengths end before {ad_date}"),
        ))
    }

    /// Converts a BS date to its AD equivalent.
    ///
    /// # Errors
    /// Returns `ConversionError::BsYearOutOfRange` if the year is not in the
    /// table, or `ConversionError::InvalidBsDate` if the day does not exist
    /// in that month of that year.
    pub fn to_ad(&self, bs_date: BsDate) -> Result<AdDate, ConversionError> {
        let year = bs_date.year();
        let Some(record) = self.table.by_year(year) else {
            tracing::trace!(%bs_date, "BS year out of range");
            return Err(ConversionError::BsYearOutOfRange(year));
        };

        let max_day = record.month_length(bs_date.month());
        if !(MIN_DAY..=max_day).contains(&bs_date.day()) {
            return Err(ConversionError::InvalidBsDate {
                date: bs_date,
                max_day,
            });
        }

        let offset = record.days_before(bs_date.month()) + u32::from(bs_date.day() - MIN_DAY);
        let ad_date = Span::new()
            .try_days(i64::from(offset))
            .and_then(|span| record.ad_start_date().checked_add(span))
            .map_err(|e| ConversionError::invalid_state(year, e))?;
        tracing::trace!(%bs_date, %ad_date, "converted to AD");
        Ok(ad_date)
    }

    /// First AD date that can be converted
    pub const fn min_supported_ad_date(&self) -> AdDate {
        self.table.supported_range().start()
    }

    /// Last AD date that can be converted
    pub const fn max_supported_ad_date(&self) -> AdDate {
        self.table.supported_range().end()
    }

    /// All AD dates that can be converted
    pub const fn supported_range(&self) -> AdSpan {
        self.table.supported_range()
    }

    /// Earliest supported BS year
    pub fn min_bs_year(&self) -> u16 {
        self.table.first().bs_year()
    }

    /// Latest supported BS year
    pub fn max_bs_year(&self) -> u16 {
        self.table.last().bs_year()
    }

    /// Number of days in a month of a given BS year
    ///
    /// # Errors
    /// Returns `ConversionError::BsYearOutOfRange` if the year is not in the table.
    pub fn days_in_month(&self, year: u16, month: BsMonth) -> Result<u8, ConversionError> {
        self.table
            .by_year(year)
            .map(|record| record.month_length(month))
            .ok_or(ConversionError::BsYearOutOfRange(year))
    }

    /// Checks whether the date exists in the calendar data
    pub fn is_valid(&self, bs_date: &BsDate) -> bool {
        self.days_in_month(bs_date.year(), bs_date.month())
            .is_ok_and(|max_day| (MIN_DAY..=max_day).contains(&bs_date.day()))
    }
}
