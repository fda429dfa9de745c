//! Calendar periods used for filtering and reporting
//!
//! `Month` and `Year` are parsed at the CLI boundary and carried as typed
//! values everywhere else. Months are read from the user-facing `MM-YYYY`
//! form as well as `YYYY-MM`, and always displayed as `YYYY-MM`.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

/// A calendar month of a specific year
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// Create a month, validating both components
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodParseError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodParseError::InvalidMonth(month.to_string()));
        }
        Year::new(year)?;
        Ok(Self { year, month })
    }

    /// The month containing `date`
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current local month
    pub fn current() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month
    pub fn start_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    /// Last day of the month (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        let next_start = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        };
        match next_start {
            Some(next) => next - Duration::days(1),
            // December of the last representable year
            None => NaiveDate::from_ymd_opt(self.year, 12, 31).unwrap_or_default(),
        }
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Parse a month string
    ///
    /// Formats:
    /// - "01-2024" (MM-YYYY)
    /// - "2024-01" (YYYY-MM)
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();
        let invalid = || PeriodParseError::InvalidFormat(s.to_string());

        let (first, second) = s.split_once('-').ok_or_else(invalid)?;
        if !is_digits(first) || !is_digits(second) {
            return Err(invalid());
        }

        let (year_str, month_str) = match (first.len(), second.len()) {
            (1 | 2, 4) => (second, first),
            (4, 1 | 2) => (first, second),
            _ => return Err(invalid()),
        };

        let year: i32 = year_str.parse().map_err(|_| invalid())?;
        let month: u32 = month_str.parse().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// A calendar year
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Year(i32);

impl Year {
    pub fn new(year: i32) -> Result<Self, PeriodParseError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(PeriodParseError::InvalidYear(year.to_string()));
        }
        Ok(Self(year))
    }

    /// The current local year
    pub fn current() -> Self {
        Self(chrono::Local::now().date_naive().year())
    }

    pub fn value(&self) -> i32 {
        self.0
    }

    pub fn start_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.0, 1, 1).unwrap_or_default()
    }

    pub fn end_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.0, 12, 31).unwrap_or_default()
    }

    /// Parse a four-digit year ("2024")
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();
        if s.len() != 4 || !is_digits(s) {
            return Err(PeriodParseError::InvalidYear(s.to_string()));
        }
        let year: i32 = s
            .parse()
            .map_err(|_| PeriodParseError::InvalidYear(s.to_string()))?;
        Self::new(year)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// Parse a transaction date in ISO form ("2024-01-05")
pub fn parse_date(s: &str) -> Result<NaiveDate, PeriodParseError> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| PeriodParseError::InvalidDate(s.to_string()))
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// Errors produced while parsing dates and periods
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    InvalidMonth(String),
    InvalidYear(String),
    InvalidDate(String),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(s) => write!(f, "Invalid month '{}', expected MM-YYYY", s),
            Self::InvalidMonth(s) => write!(f, "Month out of range: {}", s),
            Self::InvalidYear(s) => write!(f, "Invalid year '{}', expected YYYY", s),
            Self::InvalidDate(s) => write!(f, "Invalid date '{}', expected YYYY-MM-DD", s),
        }
    }
}

impl std::error::Error for PeriodParseError {}
