//! Rule-table holiday calendar for one country.
//!
//! A [`CountryCalendar`] does not look at a [`CalendarDate`] as a bare civil
//! date. It takes the instant `00:00 UTC` of that date, moves it into the
//! country's reference UTC offset, and tests the resulting local date and
//! time. West of Greenwich that instant is the previous evening, so a date
//! reports the holiday status of the evening before it, including holidays
//! that only begin in the afternoon (e.g. Christmas Eve from 14:00).

use std::collections::HashMap;

use chrono::{
    Datelike, Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, Utc, Weekday,
};

use super::bitmap::{
    easter_sunday, last_weekday_of_month, nth_weekday_of_month, observed_date, HolidayBitmap,
    MAX_YEAR, MIN_YEAR,
};
use crate::providers::HolidayCalendar;
use crate::types::CalendarDate;

/// Holiday calendar built from rules over [`MIN_YEAR`]..=[`MAX_YEAR`].
#[derive(Clone)]
pub struct CountryCalendar {
    name: String,
    utc_offset: FixedOffset,
    full_days: HolidayBitmap,
    partial_days: HashMap<NaiveDate, NaiveTime>,
}

impl std::fmt::Debug for CountryCalendar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountryCalendar")
            .field("name", &self.name)
            .field("utc_offset", &self.utc_offset)
            .field("holiday_count", &self.holiday_count())
            .finish()
    }
}

impl CountryCalendar {
    /// Reference UTC offset used to evaluate dates.
    pub fn utc_offset(&self) -> FixedOffset {
        self.utc_offset
    }

    /// Local date and time at which `date` is evaluated, or `None` when the
    /// shift leaves chrono's date range.
    pub fn evaluation_instant(&self, date: CalendarDate) -> Option<NaiveDateTime> {
        let shift = Duration::seconds(i64::from(self.utc_offset.local_minus_utc()));
        date.utc_midnight().checked_add_signed(shift)
    }

    /// Returns true if a holiday is in effect at local time `local`.
    pub fn is_holiday_at(&self, local: NaiveDateTime) -> bool {
        let day = local.date();
        if self.full_days.contains(day) {
            return true;
        }
        self.partial_days
            .get(&day)
            .is_some_and(|starts_at| local.time() >= *starts_at)
    }

    /// Returns true if the whole local day `date` is a holiday.
    pub fn is_full_day_holiday(&self, date: NaiveDate) -> bool {
        self.full_days.contains(date)
    }

    /// Number of full-day and partial-day holidays in the table.
    pub fn holiday_count(&self) -> usize {
        self.full_days.len() + self.partial_days.len()
    }
}

impl HolidayCalendar for CountryCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_holiday(&self, date: CalendarDate) -> bool {
        self.evaluation_instant(date)
            .is_some_and(|local| self.is_holiday_at(local))
    }
}

/// One yearly holiday rule.
///
/// Rules are expanded per year when [`CalendarRules::build`] runs; a rule that
/// yields no date for a year (e.g. February 30) is skipped for that year.
#[derive(Debug, Clone, Copy)]
pub enum HolidayRule {
    /// Same civil date every year.
    Fixed {
        /// Month, 1-based.
        month: u32,
        /// Day of month.
        day: u32,
    },
    /// Same civil date, moved to Friday when it falls on Saturday and to
    /// Monday when it falls on Sunday.
    Observed {
        /// Month, 1-based.
        month: u32,
        /// Day of month.
        day: u32,
    },
    /// `nth` occurrence of `weekday` in `month`.
    NthWeekday {
        /// Month, 1-based.
        month: u32,
        /// Weekday to count.
        weekday: Weekday,
        /// Occurrence, 1-based.
        nth: u32,
    },
    /// Last occurrence of `weekday` in `month`.
    LastWeekday {
        /// Month, 1-based.
        month: u32,
        /// Weekday to find.
        weekday: Weekday,
    },
    /// Signed day offset from Easter Sunday.
    Easter(i64),
    /// Arbitrary per-year generator.
    Custom(fn(i32) -> Vec<NaiveDate>),
}

impl HolidayRule {
    /// Holiday dates this rule produces in `year`.
    pub fn dates(self, year: i32) -> Vec<NaiveDate> {
        let single = match self {
            Self::Fixed { month, day } => NaiveDate::from_ymd_opt(year, month, day),
            Self::Observed { month, day } => {
                NaiveDate::from_ymd_opt(year, month, day).map(observed_date)
            }
            Self::NthWeekday { month, weekday, nth } => {
                nth_weekday_of_month(year, month, weekday, nth)
            }
            Self::LastWeekday { month, weekday } => last_weekday_of_month(year, month, weekday),
            Self::Easter(offset) => easter_sunday(year)
                .and_then(|easter| easter.checked_add_signed(Duration::days(offset))),
            Self::Custom(generate) => return generate(year),
        };
        single.into_iter().collect()
    }
}

/// Collects [`HolidayRule`]s for one country and expands them into a
/// [`CountryCalendar`].
///
/// ```rust
/// use bizday_core::calendars::{CalendarRules, HolidayRule};
/// use bizday_core::{CalendarDate, HolidayCalendar};
///
/// let calendar = CalendarRules::new("Example", 0)
///     .years(2019, 2019)
///     .with(HolidayRule::Fixed { month: 7, day: 14 })
///     .build();
///
/// assert!(calendar.is_holiday(CalendarDate::from_ymd(2019, 7, 14).unwrap()));
/// ```
#[derive(Debug, Clone)]
pub struct CalendarRules {
    name: String,
    utc_offset: FixedOffset,
    first_year: i32,
    last_year: i32,
    rules: Vec<(i32, HolidayRule)>,
    partial: Vec<(u32, u32, NaiveTime)>,
}

impl CalendarRules {
    /// Starts an empty rule set; `utc_offset_minutes` is east of UTC.
    ///
    /// Offsets outside +/-24h fall back to UTC.
    pub fn new(name: impl Into<String>, utc_offset_minutes: i32) -> Self {
        Self {
            name: name.into(),
            utc_offset: FixedOffset::east_opt(utc_offset_minutes * 60)
                .unwrap_or_else(|| Utc.fix()),
            first_year: MIN_YEAR,
            last_year: MAX_YEAR,
            rules: Vec::new(),
            partial: Vec::new(),
        }
    }

    /// Restricts expansion to `first..=last`, clamped to the table range.
    pub fn years(mut self, first: i32, last: i32) -> Self {
        self.first_year = first.max(MIN_YEAR);
        self.last_year = last.min(MAX_YEAR);
        self
    }

    /// Adds a rule that applies in every year.
    pub fn with(self, rule: HolidayRule) -> Self {
        self.with_since(i32::MIN, rule)
    }

    /// Adds a rule that applies from `first_year` on.
    pub fn with_since(mut self, first_year: i32, rule: HolidayRule) -> Self {
        self.rules.push((first_year, rule));
        self
    }

    /// Adds a holiday on a fixed date that begins at local time `starts_at`
    /// and lasts until midnight.
    pub fn with_partial(mut self, month: u32, day: u32, starts_at: NaiveTime) -> Self {
        self.partial.push((month, day, starts_at));
        self
    }

    /// Expands every rule over the configured years.
    pub fn build(self) -> CountryCalendar {
        let mut full_days = HolidayBitmap::new();
        let mut partial_days: HashMap<NaiveDate, NaiveTime> = HashMap::new();

        for year in self.first_year..=self.last_year {
            for &(since, rule) in &self.rules {
                if year >= since {
                    for date in rule.dates(year) {
                        full_days.insert(date);
                    }
                }
            }
            for &(month, day, starts_at) in &self.partial {
                if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                    let earliest = partial_days.entry(date).or_insert(starts_at);
                    *earliest = (*earliest).min(starts_at);
                }
            }
        }

        let calendar = CountryCalendar {
            name: self.name,
            utc_offset: self.utc_offset,
            full_days,
            partial_days,
        };
        tracing::debug!(
            calendar = %calendar.name,
            rules = self.rules.len(),
            holidays = calendar.holiday_count(),
            "expanded holiday rules"
        );
        calendar
    }
}

/// Weekday of a civil date, if the date exists.
pub(crate) fn weekday_of(year: i32, month: u32, day: u32) -> Option<Weekday> {
    NaiveDate::from_ymd_opt(year, month, day).map(|d| d.weekday())
}
