//! Date normalization.
//!
//! Every engine operation first reduces its date arguments to a
//! [`CalendarDate`]. The year, month and day are read from the value's *local*
//! fields, i.e. as the value itself displays them in its own zone, and then
//! re-anchored as a zone-free date. A `DateTime<Tz>` is therefore never
//! converted to UTC before its fields are taken: "2018-12-25 23:30 -05:00" is
//! December 25th, not December 26th.

use std::time::SystemTime;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

use crate::types::CalendarDate;

/// Values that can be reduced to a [`CalendarDate`].
pub trait IntoCalendarDate {
    /// Returns the civil date of `self` in its own zone.
    fn into_calendar_date(self) -> CalendarDate;
}

/// Normalizes `input` to a zone-free calendar date.
///
/// ```rust
/// use bizday_core::normalize;
/// use chrono::{FixedOffset, TimeZone};
///
/// let new_york = FixedOffset::west_opt(5 * 3600).unwrap();
/// let late_evening = new_york.with_ymd_and_hms(2018, 12, 25, 23, 30, 0).unwrap();
/// assert_eq!(normalize(late_evening).to_string(), "2018-12-25");
/// ```
pub fn normalize<D: IntoCalendarDate>(input: D) -> CalendarDate {
    input.into_calendar_date()
}

impl IntoCalendarDate for CalendarDate {
    fn into_calendar_date(self) -> CalendarDate {
        self
    }
}

impl IntoCalendarDate for NaiveDate {
    fn into_calendar_date(self) -> CalendarDate {
        CalendarDate::from(self)
    }
}

impl IntoCalendarDate for NaiveDateTime {
    fn into_calendar_date(self) -> CalendarDate {
        CalendarDate::from(self.date())
    }
}

impl<Tz: TimeZone> IntoCalendarDate for DateTime<Tz> {
    fn into_calendar_date(self) -> CalendarDate {
        CalendarDate::from(self.date_naive())
    }
}

impl<Tz: TimeZone> IntoCalendarDate for &DateTime<Tz> {
    fn into_calendar_date(self) -> CalendarDate {
        CalendarDate::from(self.date_naive())
    }
}

/// A bare instant has no zone of its own; the process's local zone supplies
/// the fields.
impl IntoCalendarDate for SystemTime {
    fn into_calendar_date(self) -> CalendarDate {
        DateTime::<Local>::from(self).into_calendar_date()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveTime, Utc};

    fn christmas() -> CalendarDate {
        CalendarDate::from_ymd(2018, 12, 25).unwrap()
    }

    #[test]
    fn test_identity() {
        assert_eq!(normalize(christmas()), christmas());
    }

    #[test]
    fn test_naive_date_time_drops_time() {
        let late = NaiveDate::from_ymd_opt(2018, 12, 25)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(23, 59, 59).unwrap());
        assert_eq!(normalize(late), christmas());
    }

    #[test]
    fn test_uses_local_fields_not_utc_fields() {
        // 23:30 in New York is already the 26th in UTC
        let new_york = FixedOffset::west_opt(5 * 3600).unwrap();
        let evening = new_york.with_ymd_and_hms(2018, 12, 25, 23, 30, 0).unwrap();
        assert_eq!(evening.with_timezone(&Utc).date_naive().to_string(), "2018-12-26");
        assert_eq!(normalize(evening), christmas());

        // 00:30 in Tokyo is still the 24th in UTC
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let early = tokyo.with_ymd_and_hms(2018, 12, 25, 0, 30, 0).unwrap();
        assert_eq!(normalize(&early), christmas());
    }

    #[test]
    fn test_same_civil_date_in_any_zone_is_equal() {
        let dates: Vec<CalendarDate> = [-11, -5, 0, 1, 9, 14]
            .iter()
            .map(|hours| {
                let zone = FixedOffset::east_opt(hours * 3600).unwrap();
                normalize(zone.with_ymd_and_hms(2018, 12, 25, 12, 0, 0).unwrap())
            })
            .collect();
        assert!(dates.iter().all(|d| *d == christmas()));
    }

    #[test]
    fn test_system_time_uses_process_local_zone() {
        let now = SystemTime::now();
        let expected = CalendarDate::from(DateTime::<Local>::from(now).date_naive());
        assert_eq!(normalize(now), expected);
    }
}
