//! Calendar-month period used as the aggregation bucket
//!
//! A period is the half-open interval `[first-of-month, first-of-next-month)`.
//! Membership is decided purely by a transaction's `date` field.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar month, e.g. "2025-06"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    pub year: i32,
    pub month: u32,
}

impl Period {
    /// Create a period for the given year and month (1-12)
    ///
    /// Returns None for an out-of-range month.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// The period containing today's date
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    /// The period a date falls in
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// First day of the month (inclusive bound)
    pub fn start(&self) -> NaiveDate {
        // month is validated at construction
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// First day of the next month (exclusive bound)
    pub fn end_exclusive(&self) -> NaiveDate {
        let (year, month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MAX)
    }

    /// Check whether a date falls inside the half-open interval
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start() && date < self.end_exclusive()
    }

    /// The twelve periods of a year, in month order 1..=12
    pub fn months_of(year: i32) -> impl Iterator<Item = Period> {
        (1..=12).map(move |month| Period { year, month })
    }

    /// Parse a period from a "YYYY-MM" string
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();
        let (year_str, month_str) = s
            .split_once('-')
            .ok_or_else(|| PeriodParseError::InvalidFormat(s.to_string()))?;

        let year: i32 = year_str
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month_str
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;

        Self::new(year, month).ok_or(PeriodParseError::InvalidMonth(month))
    }
}

impl Default for Period {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Ord for Period {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month).cmp(&(other.year, other.month))
    }
}

impl PartialOrd for Period {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::InvalidFormat(s) => write!(f, "Invalid period format: {}", s),
            PeriodParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for PeriodParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_bounds() {
        let june = Period::new(2025, 6).unwrap();
        assert_eq!(june.start(), date(2025, 6, 1));
        assert_eq!(june.end_exclusive(), date(2025, 7, 1));
    }

    #[test]
    fn test_december_rolls_over() {
        let dec = Period::new(2024, 12).unwrap();
        assert_eq!(dec.end_exclusive(), date(2025, 1, 1));
    }

    #[test]
    fn test_half_open_contains() {
        let june = Period::new(2025, 6).unwrap();
        assert!(june.contains(date(2025, 6, 1)));
        assert!(june.contains(date(2025, 6, 30)));
        assert!(!june.contains(date(2025, 7, 1)));
        assert!(!june.contains(date(2025, 5, 31)));
    }

    #[test]
    fn test_months_of_year() {
        let months: Vec<_> = Period::months_of(2025).collect();
        assert_eq!(months.len(), 12);
        assert_eq!(months[0], Period::new(2025, 1).unwrap());
        assert_eq!(months[11], Period::new(2025, 12).unwrap());
    }

    #[test]
    fn test_invalid_month_rejected() {
        assert!(Period::new(2025, 0).is_none());
        assert!(Period::new(2025, 13).is_none());
    }

    #[test]
    fn test_parse_and_display() {
        let period = Period::parse("2025-06").unwrap();
        assert_eq!(period, Period::new(2025, 6).unwrap());
        assert_eq!(format!("{}", period), "2025-06");

        assert!(matches!(
            Period::parse("2025-13"),
            Err(PeriodParseError::InvalidMonth(13))
        ));
        assert!(Period::parse("junk").is_err());
    }

    #[test]
    fn test_of_date() {
        assert_eq!(
            Period::of(date(2025, 6, 15)),
            Period::new(2025, 6).unwrap()
        );
    }

    #[test]
    fn test_ordering() {
        let a = Period::new(2024, 12).unwrap();
        let b = Period::new(2025, 1).unwrap();
        assert!(a < b);
    }
}
