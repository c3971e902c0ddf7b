//! Counting over date ranges.

use crate::engine::BusinessDateEngine;
use crate::normalize::{normalize, IntoCalendarDate};
use crate::providers::{CountryValidator, HolidayProvider};
use crate::types::CalendarDate;

/// Mon..Fri in `[start, start + elapsed)`, with `elapsed >= 0`.
fn count_weekdays_forward(start: CalendarDate, elapsed: i64) -> i64 {
    let full_weeks = elapsed / 7;
    let remainder = elapsed % 7;
    let tail = (0..remainder)
        .filter(|&offset| start.add_days(full_weeks * 7 + offset).is_weekday())
        .count() as i64;
    full_weeks * 5 + tail
}

/// Signed weekday count over the half-open span between two dates.
fn signed_weekdays(start: CalendarDate, end: CalendarDate) -> i64 {
    let elapsed = start.days_between(&end);
    if elapsed >= 0 {
        count_weekdays_forward(start, elapsed)
    } else {
        -count_weekdays_forward(end, -elapsed)
    }
}

impl<V: CountryValidator, H: HolidayProvider> BusinessDateEngine<V, H> {
    /// Counts Monday..Friday days in `[start, end)`.
    ///
    /// When `end` precedes `start` the count for `[end, start)` is returned
    /// negated. Equal dates yield 0.
    pub fn week_days_between<S, E>(&self, start: S, end: E) -> i64
    where
        S: IntoCalendarDate,
        E: IntoCalendarDate,
    {
        signed_weekdays(normalize(start), normalize(end))
    }

    /// Counts Saturday and Sunday days in `[start, end)`, signed like
    /// [`week_days_between`](Self::week_days_between).
    pub fn weekend_days_between<S, E>(&self, start: S, end: E) -> i64
    where
        S: IntoCalendarDate,
        E: IntoCalendarDate,
    {
        let start = normalize(start);
        let end = normalize(end);
        start.days_between(&end) - signed_weekdays(start, end)
    }

    /// Counts holidays in `country` strictly after `start`, up to and
    /// including `end`.
    ///
    /// Returns `-1` when the country is not recognized or when `start` is not
    /// strictly before `end`. Weekend days are counted if they are holidays.
    pub fn holidays_between<S, E>(&self, start: S, end: E, country: &str) -> i64
    where
        S: IntoCalendarDate,
        E: IntoCalendarDate,
    {
        let start = normalize(start);
        let end = normalize(end);
        let Some(country) = self.country(country) else {
            return -1;
        };
        if start >= end {
            tracing::debug!(%start, %end, "holiday range is empty or reversed");
            return -1;
        }

        let calendar = self.holidays().calendar(&country);
        let count = (1..=start.days_between(&end))
            .map(|offset| start.add_days(offset))
            .filter(|&date| calendar.is_holiday(date))
            .count() as i64;

        tracing::debug!(%country, %start, %end, count, "counted holidays");
        count
    }
}
