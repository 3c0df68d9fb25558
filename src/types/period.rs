//! Validated query periods as they arrive from the command line:
//! inclusive date ranges (`YYYY-MM-DD|YYYY-MM-DD`) and year ranges
//! (`YYYY|YYYY`).

use crate::codec::date::{parse_day, DATE_FORMAT};
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsePeriodError {
    #[error("expected a date range formatted as YYYY-MM-DD|YYYY-MM-DD")]
    MalformedDateRange,

    #[error("expected a year range formatted as YYYY|YYYY")]
    MalformedYearRange,

    #[error("range start must not be after range end")]
    Inverted,
}

/// An inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ParsePeriodError> {
        if start > end {
            return Err(ParsePeriodError::Inverted);
        }
        Ok(Self { start, end })
    }

    /// Iterate every calendar day in the range, inclusive on both ends.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }
}

impl FromStr for DateRange {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once('|')
            .ok_or(ParsePeriodError::MalformedDateRange)?;
        let start = parse_day(start).ok_or(ParsePeriodError::MalformedDateRange)?;
        let end = parse_day(end).ok_or(ParsePeriodError::MalformedDateRange)?;
        Self::new(start, end)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}",
            self.start.format(DATE_FORMAT),
            self.end.format(DATE_FORMAT)
        )
    }
}

/// An inclusive range of candidate years for historical sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub low: i32,
    pub high: i32,
}

impl YearRange {
    pub fn new(low: i32, high: i32) -> Result<Self, ParsePeriodError> {
        if low > high {
            return Err(ParsePeriodError::Inverted);
        }
        Ok(Self { low, high })
    }

    /// Iterate every year in the range, inclusive on both ends.
    pub fn years(&self) -> impl Iterator<Item = i32> {
        self.low..=self.high
    }
}

impl FromStr for YearRange {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (low, high) = s
            .split_once('|')
            .ok_or(ParsePeriodError::MalformedYearRange)?;
        let low = parse_year(low).ok_or(ParsePeriodError::MalformedYearRange)?;
        let high = parse_year(high).ok_or(ParsePeriodError::MalformedYearRange)?;
        Self::new(low, high)
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}|{:04}", self.low, self.high)
    }
}

fn parse_year(text: &str) -> Option<i32> {
    let trimmed = text.trim();
    if trimmed.len() != 4 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}
