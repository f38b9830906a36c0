//! Calendar data loading.
//!
//! The data file is a JSON array with one object per BS year:
//!
//! ```json
//! [{"year": 2000, "startDate": "1943-04-14", "monthLengths": [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31]}]
//! ```

use crate::{LoadError, YearRecord};

/// Calendar data for BS `MIN_BS_YEAR..=MAX_BS_YEAR`, embedded at compile time
pub const BUNDLED_CALENDAR_JSON: &str = include_str!("../data/calendar.json");

/// Deserializes year records from a JSON document.
///
/// Each record is validated on its own; cross-record checks (duplicates,
/// gaps) happen when the records are indexed by `YearTable::new`.
///
/// # Errors
/// Returns `LoadError::Json` if the document is malformed or any record is invalid.
pub fn load_year_records(json: &str) -> Result<Vec<YearRecord>, LoadError> {
    let records: Vec<YearRecord> = serde_json::from_str(json)?;
    tracing::debug!(years = records.len(), "loaded calendar records");
    Ok(records)
}

/// Loads the records embedded in the crate.
///
/// # Errors
/// Returns `LoadError` only if the embedded file is corrupt.
pub fn bundled_year_records() -> Result<Vec<YearRecord>, LoadError> {
    load_year_records(BUNDLED_CALENDAR_JSON)
}
