use crate::ParseError;
use crate::consts::MONTHS_PER_YEAR;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the twelve months of the Bikram Sambat year, numbered 1..=12
/// starting from Baisakh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum BsMonth {
    Baisakh = 1,
    Jeshtha = 2,
    Asar = 3,
    Shrawan = 4,
    Bhadra = 5,
    Aswin = 6,
    Kartik = 7,
    Mangsir = 8,
    Poush = 9,
    Magh = 10,
    Falgun = 11,
    Chaitra = 12,
}

impl BsMonth {
    /// All months in calendar order
    pub const ALL: [Self; MONTHS_PER_YEAR] = [
        Self::Baisakh,
        Self::Jeshtha,
        Self::Asar,
        Self::Shrawan,
        Self::Bhadra,
        Self::Aswin,
        Self::Kartik,
        Self::Mangsir,
        Self::Poush,
        Self::Magh,
        Self::Falgun,
        Self::Chaitra,
    ];

    /// Creates a month from its number (1 = Baisakh, 12 = Chaitra)
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > 12.
    pub fn from_value(value: u8) -> Result<Self, ParseError> {
        usize::from(value)
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index))
            .copied()
            .ok_or(ParseError::InvalidMonth(value))
    }

    /// Returns the month number (1..=12)
    #[inline]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Zero-based position of the month within the year
    #[inline]
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    /// Returns the conventional romanized name of the month
    pub const fn name(self) -> &'static str {
        match self {
            Self::Baisakh => "Baisakh",
            Self::Jeshtha => "Jeshtha",
            Self::Asar => "Asar",
            Self::Shrawan => "Shrawan",
            Self::Bhadra => "Bhadra",
            Self::Aswin => "Aswin",
            Self::Kartik => "Kartik",
            Self::Mangsir => "Mangsir",
            Self::Poush => "Poush",
            Self::Magh => "Magh",
            Self::Falgun => "Falgun",
            Self::Chaitra => "Chaitra",
        }
    }

    /// Returns the following month, or `None` after Chaitra
    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }
}

impl TryFrom<u8> for BsMonth {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl From<BsMonth> for u8 {
    fn from(month: BsMonth) -> Self {
        month.value()
    }
}

impl fmt::Display for BsMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts either the month number or its name (case-insensitive)
impl FromStr for BsMonth {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        if let Ok(value) = trimmed.parse::<u8>() {
            return Self::from_value(value);
        }
        Self::ALL
            .iter()
            .find(|month| month.name().eq_ignore_ascii_case(trimmed))
            .copied()
            .ok_or_else(|| ParseError::InvalidFormat(trimmed.to_owned()))
    }
}
