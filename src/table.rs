use std::collections::{BTreeMap, HashMap};

use crate::{AdDate, AdSpan, LoadError, YearRecord, data};

/// Immutable index over the calendar data.
///
/// Records can be found by exact BS year, or by an AD date falling inside
/// the year's span (a floor lookup on the AD start dates). All consistency
/// checks run in [`YearTable::new`], so a table that exists describes a
/// single unbroken run of BS years.
#[derive(Debug, Clone)]
pub struct YearTable {
    /// Chronological order
    records:   Vec<YearRecord>,
    by_year:   HashMap<u16, usize>,
    by_start:  BTreeMap<AdDate, usize>,
    supported: AdSpan,
}

impl YearTable {
    /// Builds the table from records in any order.
    ///
    /// # Errors
    /// Fails if there are no records, if a BS year or AD start date repeats,
    /// if BS years do not increase along with start dates, or if one year
    /// does not begin on the day after the previous one ends.
    #[tracing::instrument(skip_all)]
    pub fn new(records: impl IntoIterator<Item = YearRecord>) -> Result<Self, LoadError> {
        let mut records: Vec<YearRecord> = records.into_iter().collect();
        records.sort_by_key(YearRecord::ad_start_date);

        let (Some(first), Some(last)) = (records.first(), records.last()) else {
            tracing::debug!("rejecting empty calendar data");
            return Err(LoadError::Empty);
        };
        let supported = AdSpan::new(first.ad_start_date(), last.ad_end_date())?;

        let mut by_year = HashMap::with_capacity(records.len());
        let mut by_start = BTreeMap::new();
        for (index, record) in records.iter().enumerate() {
            if by_year.insert(record.bs_year(), index).is_some() {
                tracing::debug!(year = record.bs_year(), "rejecting duplicate year");
                return Err(LoadError::DuplicateYear(record.bs_year()));
            }
            if by_start.insert(record.ad_start_date(), index).is_some() {
                tracing::debug!(start = %record.ad_start_date(), "rejecting duplicate start date");
                return Err(LoadError::DuplicateStartDate(record.ad_start_date()));
            }
        }

        for pair in records.windows(2) {
            let (previous, next) = (&pair[0], &pair[1]);
            if next.bs_year() <= previous.bs_year() {
                return Err(LoadError::NonMonotonicYear {
                    previous: previous.bs_year(),
                    next:     next.bs_year(),
                });
            }
            if !previous.span().is_followed_by(&next.span()) {
                tracing::debug!(
                    previous = previous.bs_year(),
                    next = next.bs_year(),
                    "rejecting discontinuous calendar data"
                );
                return Err(LoadError::Discontinuity {
                    previous: previous.bs_year(),
                    next:     next.bs_year(),
                    expected: previous.ad_end_date().tomorrow()?,
                    found:    next.ad_start_date(),
                });
            }
        }

        tracing::debug!(years = records.len(), span = %supported, "year table built");
        Ok(Self {
            records,
            by_year,
            by_start,
            supported,
        })
    }

    /// Parses and indexes a JSON data document.
    ///
    /// # Errors
    /// Returns any error from [`crate::load_year_records`] or [`YearTable::new`].
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Self::new(data::load_year_records(json)?)
    }

    /// Indexes the calendar data embedded in the crate.
    ///
    /// # Errors
    /// Returns `LoadError` only if the embedded data is corrupt.
    pub fn bundled() -> Result<Self, LoadError> {
        Self::new(data::bundled_year_records()?)
    }

    /// Exact lookup by BS year
    pub fn by_year(&self, bs_year: u16) -> Option<&YearRecord> {
        self.by_year.get(&bs_year).map(|&index| &self.records[index])
    }

    /// Finds the year whose span contains `ad_date`.
    ///
    /// Takes the record with the greatest start date not after `ad_date`,
    /// then checks that its span actually reaches `ad_date`.
    pub fn containing(&self, ad_date: AdDate) -> Option<&YearRecord> {
        let (_, &index) = self.by_start.range(..=ad_date).next_back()?;
        let record = &self.records[index];
        (ad_date <= record.ad_end_date()).then_some(record)
    }

    /// AD dates covered by the whole table
    pub const fn supported_range(&self) -> AdSpan {
        self.supported
    }

    /// Earliest BS year in the table
    pub fn first(&self) -> &YearRecord {
        &self.records[0]
    }

    /// Latest BS year in the table
    pub fn last(&self) -> &YearRecord {
        &self.records[self.records.len() - 1]
    }

    /// Number of BS years in the table (never zero)
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a constructed table
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in chronological order
    pub fn iter(&self) -> impl Iterator<Item = &YearRecord> + '_ {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a YearTable {
    type Item = &'a YearRecord;
    type IntoIter = std::slice::Iter<'a, YearRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MAX_BS_YEAR, MIN_BS_YEAR};
    use jiff::civil::date;

    const LENGTHS_365: [u8; 12] = [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30];

    fn record(year: u16, start: AdDate) -> YearRecord {
        YearRecord::new(year, start, LENGTHS_365).unwrap()
    }

    /// Three consecutive 365-day years starting on 2000-01-01
    fn small_table_records() -> Vec<YearRecord> {
        vec![
            record(1, date(2000, 1, 1)),
            record(2, date(2000, 12, 31)),
            record(3, date(2001, 12, 31)),
        ]
    }

    #[test]
    fn test_bundled_table() {
        let table = YearTable::bundled().unwrap();
        assert_eq!(table.len(), 86);
        assert!(!table.is_empty());
        assert_eq!(table.first().bs_year(), MIN_BS_YEAR);
        assert_eq!(table.last().bs_year(), MAX_BS_YEAR);
        assert_eq!(table.supported_range().start(), date(1943, 4, 14));
        assert_eq!(table.supported_range().end(), date(2029, 4, 13));
    }

    #[test]
    fn test_by_year() {
        let table = YearTable::bundled().unwrap();
        let record = table.by_year(2082).unwrap();
        assert_eq!(record.bs_year(), 2082);
        assert_eq!(record.ad_start_date(), date(2025, 4, 14));

        assert!(table.by_year(1999).is_none());
        assert!(table.by_year(2086).is_none());
    }

    #[test]
    fn test_containing_boundaries() {
        let table = YearTable::bundled().unwrap();

        // First and last day of the same BS year
        assert_eq!(table.containing(date(2025, 4, 14)).unwrap().bs_year(), 2082);
        assert_eq!(table.containing(date(2026, 4, 13)).unwrap().bs_year(), 2082);
        assert_eq!(table.containing(date(2026, 4, 14)).unwrap().bs_year(), 2083);

        // Edges of the supported range
        assert_eq!(table.containing(date(1943, 4, 14)).unwrap().bs_year(), 2000);
        assert_eq!(table.containing(date(2029, 4, 13)).unwrap().bs_year(), 2085);
        assert!(table.containing(date(1943, 4, 13)).is_none());
        assert!(table.containing(date(2029, 4, 14)).is_none());
        assert!(table.containing(date(2045, 1, 1)).is_none());
    }

    #[test]
    fn test_containing_matches_span() {
        let table = YearTable::bundled().unwrap();
        for record in &table {
            for day in [record.ad_start_date(), record.ad_end_date()] {
                assert_eq!(table.containing(day), Some(record));
            }
        }
    }

    #[test]
    fn test_iter_is_chronological() {
        let mut shuffled = small_table_records();
        shuffled.reverse();
        let table = YearTable::new(shuffled).unwrap();
        let years: Vec<u16> = table.iter().map(YearRecord::bs_year).collect();
        assert_eq!(years, vec![1, 2, 3]);
    }

    #[test]
    fn test_rejects_empty() {
        let result = YearTable::new(Vec::new());
        assert!(matches!(result, Err(LoadError::Empty)));
    }

    #[test]
    fn test_rejects_duplicate_year() {
        let mut records = small_table_records();
        records.push(record(2, date(2002, 12, 31)));
        let result = YearTable::new(records);
        assert!(matches!(result, Err(LoadError::DuplicateYear(2))));
    }

    #[test]
    fn test_rejects_duplicate_start_date() {
        let mut records = small_table_records();
        records.push(record(9, date(2000, 12, 31)));
        let result = YearTable::new(records);
        assert!(matches!(result, Err(LoadError::DuplicateStartDate(start)) if start == date(2000, 12, 31)));
    }

    #[test]
    fn test_rejects_gap() {
        let records = vec![record(1, date(2000, 1, 1)), record(2, date(2001, 1, 1))];
        let result = YearTable::new(records);
        match result {
            Err(LoadError::Discontinuity {
                previous,
                next,
                expected,
                found,
            }) => {
                assert_eq!((previous, next), (1, 2));
                assert_eq!(expected, date(2000, 12, 31));
                assert_eq!(found, date(2001, 1, 1));
            },
            other => panic!("expected discontinuity, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_overlap() {
        let records = vec![record(1, date(2000, 1, 1)), record(2, date(2000, 12, 30))];
        let result = YearTable::new(records);
        assert!(matches!(result, Err(LoadError::Discontinuity { .. })));
    }

    #[test]
    fn test_rejects_non_monotonic_years() {
        let records = vec![record(2, date(2000, 1, 1)), record(1, date(2000, 12, 31))];
        let result = YearTable::new(records);
        assert!(matches!(
            result,
            Err(LoadError::NonMonotonicYear {
                previous: 2,
                next:     1,
            })
        ));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"year": 2, "startDate": "2000-12-31", "monthLengths": [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30]},
            {"year": 1, "startDate": "2000-01-01", "monthLengths": [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30]}
        ]"#;
        let table = YearTable::from_json(json).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.first().bs_year(), 1);
        assert_eq!(table.supported_range().end(), date(2001, 12, 30));
    }

    #[test]
    fn test_from_json_rejects_bad_data() {
        assert!(matches!(YearTable::from_json("[]"), Err(LoadError::Empty)));
        assert!(matches!(YearTable::from_json("nope"), Err(LoadError::Json(_))));
    }
}
