//! Zone-free calendar date.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::{BizdayError, BizdayResult};

/// A civil calendar date with no time-of-day and no timezone.
///
/// A `CalendarDate` stands for midnight UTC of its (year, month, day), so two
/// values built from the same civil date always compare equal, whatever zone
/// the originating value came from. Build one through [`crate::normalize`] or
/// the constructors below.
///
/// # Example
///
/// ```rust
/// use bizday_core::types::CalendarDate;
///
/// let date = CalendarDate::from_ymd(2019, 6, 1).unwrap();
/// assert!(date.is_weekend());
/// assert_eq!(date.add_days(2).to_string(), "2019-06-03");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Builds a date from its civil fields.
    ///
    /// # Errors
    ///
    /// Returns `BizdayError::InvalidDate` if the triple is not a calendar date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> BizdayResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(CalendarDate)
            .ok_or_else(|| BizdayError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Parses `YYYY-MM-DD`, ignoring surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `BizdayError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> BizdayResult<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(CalendarDate)
            .map_err(|_| BizdayError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Civil year.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month, 1 to 12.
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Day of the month.
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Day of the week.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Saturday or Sunday.
    #[must_use]
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Monday through Friday.
    #[must_use]
    pub fn is_weekday(&self) -> bool {
        !self.is_weekend()
    }

    /// Adds a number of calendar days to the date.
    ///
    /// # Panics
    ///
    /// Panics if the result is outside chrono's supported date range; use
    /// [`CalendarDate::checked_add_days`] near the range edges.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        CalendarDate(self.0 + chrono::Duration::days(days))
    }

    /// Adds a number of calendar days, or `None` if the result is outside
    /// chrono's supported date range.
    #[must_use]
    pub fn checked_add_days(&self, days: i64) -> Option<Self> {
        self.0
            .checked_add_signed(chrono::Duration::try_days(days)?)
            .map(CalendarDate)
    }

    /// Calculates the signed number of calendar days from `self` to `other`.
    #[must_use]
    pub fn days_between(&self, other: &CalendarDate) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// The wrapped chrono date.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }

    /// Returns the UTC-midnight instant this date stands for.
    #[must_use]
    pub fn utc_midnight(&self) -> NaiveDateTime {
        self.0.and_time(NaiveTime::MIN)
    }

    /// Formats the date as `dddd, MMMM Do YYYY`, e.g. `Friday, January 25th 2019`.
    #[must_use]
    pub fn format_long(&self) -> String {
        format!(
            "{}, {} {}{} {}",
            self.0.format("%A"),
            self.0.format("%B"),
            self.day(),
            ordinal_suffix(self.day()),
            self.year()
        )
    }
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0.format("%Y-%m-%d").to_string())
    }
}

impl FromStr for CalendarDate {
    type Err = BizdayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        CalendarDate(date)
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

impl Add<i64> for CalendarDate {
    type Output = Self;

    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<i64> for CalendarDate {
    type Output = Self;

    fn sub(self, days: i64) -> Self::Output {
        self.add_days(-days)
    }
}

impl Sub<CalendarDate> for CalendarDate {
    type Output = i64;

    fn sub(self, other: CalendarDate) -> Self::Output {
        other.days_between(&self)
    }
}
