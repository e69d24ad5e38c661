//! Calendar month window
//!
//! Monthly summaries operate over the inclusive interval from the first to
//! the last day of a month. The end-of-month arithmetic goes through the
//! first of the following month, which handles the December rollover and
//! leap-year Februaries without a day-count table.

use chrono::{Datelike, Duration, NaiveDate};
use std::fmt;

/// A specific calendar month (e.g. "2026-03")
///
/// The month number is validated at construction, so the date arithmetic
/// below cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Month {
    year: i32,
    /// 1-12
    month: u32,
}

impl Month {
    /// Create a month, rejecting out-of-range month numbers
    pub fn new(year: i32, month: u32) -> Result<Self, MonthParseError> {
        if !(1..=12).contains(&month) {
            return Err(MonthParseError::OutOfRange(month));
        }
        Ok(Self { year, month })
    }

    /// The year
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month number (1-12)
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The month containing today (process clock)
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    /// The month containing the given date
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// First day of the month
    pub fn start_date(&self) -> NaiveDate {
        // month is validated to 1-12 at construction
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("month validated at construction")
    }

    /// Last day of the month (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        let next_month_start = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        };
        next_month_start.expect("month validated at construction") - Duration::days(1)
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date() && date <= self.end_date()
    }

    /// Parse a "YYYY-MM" string
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let (year_str, month_str) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| MonthParseError::InvalidFormat(s.to_string()))?;

        let year: i32 = year_str
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month_str
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;

        Self::new(year, month)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

/// Error type for month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidFormat(String),
    OutOfRange(u32),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthParseError::InvalidFormat(s) => {
                write!(f, "Invalid month format '{}', expected YYYY-MM", s)
            }
            MonthParseError::OutOfRange(m) => {
                write!(f, "Month must be between 1 and 12, got {}", m)
            }
        }
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_bounds() {
        let m = Month::new(2026, 3).unwrap();
        assert_eq!(m.start_date(), NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
        assert_eq!(m.end_date(), NaiveDate::from_ymd_opt(2026, 3, 31).unwrap());
    }

    #[test]
    fn test_december_rollover() {
        let m = Month::new(2026, 12).unwrap();
        assert_eq!(m.end_date(), NaiveDate::from_ymd_opt(2026, 12, 31).unwrap());
    }

    #[test]
    fn test_leap_february() {
        let leap = Month::new(2028, 2).unwrap();
        assert_eq!(leap.end_date(), NaiveDate::from_ymd_opt(2028, 2, 29).unwrap());

        let common = Month::new(2026, 2).unwrap();
        assert_eq!(
            common.end_date(),
            NaiveDate::from_ymd_opt(2026, 2, 28).unwrap()
        );
    }

    #[test]
    fn test_contains() {
        let m = Month::new(2026, 4).unwrap();
        assert!(m.contains(NaiveDate::from_ymd_opt(2026, 4, 1).unwrap()));
        assert!(m.contains(NaiveDate::from_ymd_opt(2026, 4, 30).unwrap()));
        assert!(!m.contains(NaiveDate::from_ymd_opt(2026, 5, 1).unwrap()));
        assert!(!m.contains(NaiveDate::from_ymd_opt(2026, 3, 31).unwrap()));
    }

    #[test]
    fn test_parse() {
        assert_eq!(Month::parse("2026-03").unwrap(), Month::new(2026, 3).unwrap());
        assert_eq!(Month::parse("2026-3").unwrap(), Month::new(2026, 3).unwrap());
        assert!(Month::parse("2026").is_err());
        assert!(Month::parse("2026-13").is_err());
        assert!(Month::parse("march").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Month::new(2026, 3).unwrap().to_string(), "2026-03");
        assert_eq!(Month::new(2026, 12).unwrap().to_string(), "2026-12");
    }
}
