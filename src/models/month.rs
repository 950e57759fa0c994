//! Reference month
//!
//! Snapshot sums are always taken for one calendar month. Income records
//! with a start or end date are active for every month their window touches.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar month, e.g. "2025-01"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReferenceMonth {
    year: i32,
    month: u32,
}

impl ReferenceMonth {
    /// Create a month, returning None when `month` is not 1-12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The month containing today's date
    pub fn current() -> Self {
        Self::containing(chrono::Local::now().date_naive())
    }

    /// The month containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Whether a window with optional inclusive bounds touches this month
    ///
    /// Bounds are compared at month granularity; a missing bound is open.
    pub fn within(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> bool {
        let starts_in_time = start.map_or(true, |s| Self::containing(s) <= *self);
        let ends_in_time = end.map_or(true, |e| Self::containing(e) >= *self);
        starts_in_time && ends_in_time
    }

    /// Parse a month string in the form "YYYY-MM"
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let s = s.trim();
        let invalid = || MonthParseError::InvalidFormat(s.to_string());

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        Self::new(year, month).ok_or(MonthParseError::InvalidMonth(month))
    }
}

impl fmt::Display for ReferenceMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for ReferenceMonth {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ReferenceMonth {
    type Error = MonthParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<ReferenceMonth> for String {
    fn from(month: ReferenceMonth) -> Self {
        month.to_string()
    }
}

/// Error type for month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(s) => write!(f, "Invalid month format (expected YYYY-MM): {}", s),
            Self::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        let month = ReferenceMonth::parse("2025-03").unwrap();
        assert_eq!(month.year(), 2025);
        assert_eq!(month.month(), 3);
        assert_eq!(month.to_string(), "2025-03");

        assert_eq!(
            ReferenceMonth::parse("2025-13"),
            Err(MonthParseError::InvalidMonth(13))
        );
        assert!(ReferenceMonth::parse("March").is_err());
    }

    #[test]
    fn test_within_inclusive_month_bounds() {
        let march = ReferenceMonth::new(2025, 3).unwrap();

        assert!(march.within(None, None));
        // Starts late in the month: still active for the whole month
        assert!(march.within(Some(date(2025, 3, 31)), None));
        // Ends early in the month: still active
        assert!(march.within(None, Some(date(2025, 3, 1))));
        assert!(!march.within(Some(date(2025, 4, 1)), None));
        assert!(!march.within(None, Some(date(2025, 2, 28))));
        assert!(march.within(Some(date(2024, 12, 1)), Some(date(2025, 6, 30))));
    }

    #[test]
    fn test_ordering_across_years() {
        let dec = ReferenceMonth::new(2024, 12).unwrap();
        let jan = ReferenceMonth::new(2025, 1).unwrap();
        assert!(dec < jan);
    }

    #[test]
    fn test_serde_as_string() {
        let month = ReferenceMonth::new(2025, 1).unwrap();
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "\"2025-01\"");
        let back: ReferenceMonth = serde_json::from_str(&json).unwrap();
        assert_eq!(back, month);
    }
}
