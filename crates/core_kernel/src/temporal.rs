//! Calendar-date handling for report filtering
//!
//! Dates are exchanged as `YYYY-MM-DD` strings throughout the system and
//! compared as calendar dates. A [`ReportingPeriod`] is a closed interval:
//! both bounds are inclusive, matching the date-range filters on the
//! report and statistics views.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wire format for all dates in the system
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid period: start {start} must not be after end {end}")]
    InvalidPeriod { start: NaiveDate, end: NaiveDate },

    #[error("Invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),
}

/// Parses a `YYYY-MM-DD` date string
pub fn parse_date(s: &str) -> Result<NaiveDate, TemporalError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| TemporalError::InvalidDate(s.to_string()))
}

/// A closed calendar-date interval used to filter records by report date
///
/// Both bounds are inclusive: a period from 2025-01-01 to 2025-01-31
/// contains both endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingPeriod {
    /// First day of the period (inclusive)
    pub start: NaiveDate,
    /// Last day of the period (inclusive)
    pub end: NaiveDate,
}

impl ReportingPeriod {
    /// Creates a new period, rejecting ranges where start is after end
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TemporalError> {
        if start > end {
            return Err(TemporalError::InvalidPeriod { start, end });
        }
        Ok(Self { start, end })
    }

    /// A single-day period
    pub fn single_day(day: NaiveDate) -> Self {
        Self { start: day, end: day }
    }

    /// The `days`-day window ending at `end` (inclusive)
    ///
    /// `trailing_days(end, 1)` is the single day `end`. Used for the
    /// default "last 30 days" and "last 90 days" views.
    pub fn trailing_days(end: NaiveDate, days: u32) -> Self {
        let span = i64::from(days.max(1)) - 1;
        Self {
            start: end - chrono::Duration::days(span),
            end,
        }
    }

    /// Returns true if the period contains the given date
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of calendar days covered, counting both endpoints
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}
