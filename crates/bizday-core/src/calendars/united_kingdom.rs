//! England and Wales bank holidays.

use chrono::{NaiveDate, Weekday};

use super::bitmap::{last_weekday_of_month, nth_weekday_of_month};
use super::country::{weekday_of, CalendarRules, CountryCalendar, HolidayRule};

/// Reference offset: Europe/London standard time.
const UTC_OFFSET_MINUTES: i32 = 0;

/// Build the GB holiday table.
///
/// ## Holidays
///
/// - New Year's Day (January 1, substitute Monday if weekend)
/// - Good Friday
/// - Easter Monday
/// - Early May Bank Holiday (1st Monday in May, since 1978)
/// - Spring Bank Holiday (last Monday in May)
/// - Summer Bank Holiday (last Monday in August)
/// - Christmas Day and Boxing Day (with substitute days)
pub(crate) fn build() -> CountryCalendar {
    CalendarRules::new("United Kingdom", UTC_OFFSET_MINUTES)
        .with(HolidayRule::Custom(new_years_day))
        .with(HolidayRule::Easter(-2))
        .with(HolidayRule::Easter(1))
        .with(HolidayRule::Custom(early_may_bank_holiday))
        .with(HolidayRule::Custom(spring_bank_holiday))
        .with(HolidayRule::LastWeekday { month: 8, weekday: Weekday::Mon })
        .with(HolidayRule::Custom(christmas))
        .build()
}

fn new_years_day(year: i32) -> Vec<NaiveDate> {
    let day = match weekday_of(year, 1, 1) {
        Some(Weekday::Sat) => 3,
        Some(Weekday::Sun) => 2,
        _ => 1,
    };
    NaiveDate::from_ymd_opt(year, 1, day).into_iter().collect()
}

/// 1st Monday in May; moved to May 8 in 2020 for VE Day.
fn early_may_bank_holiday(year: i32) -> Vec<NaiveDate> {
    if year < 1978 {
        return Vec::new();
    }
    let date = if year == 2020 {
        NaiveDate::from_ymd_opt(2020, 5, 8)
    } else {
        nth_weekday_of_month(year, 5, Weekday::Mon, 1)
    };
    date.into_iter().collect()
}

/// Last Monday in May; moved for the 2002, 2012 and 2022 jubilees.
fn spring_bank_holiday(year: i32) -> Vec<NaiveDate> {
    let date = match year {
        2002 => NaiveDate::from_ymd_opt(2002, 6, 4),
        2012 => NaiveDate::from_ymd_opt(2012, 6, 4),
        2022 => NaiveDate::from_ymd_opt(2022, 6, 2),
        _ => last_weekday_of_month(year, 5, Weekday::Mon),
    };
    date.into_iter().collect()
}

fn christmas(year: i32) -> Vec<NaiveDate> {
    let days: &[u32] = match weekday_of(year, 12, 25) {
        Some(Weekday::Fri) => &[25, 28],
        Some(Weekday::Sat) => &[27, 28],
        Some(Weekday::Sun) => &[26, 27],
        Some(_) => &[25, 26],
        None => &[],
    };
    days.iter()
        .filter_map(|&d| NaiveDate::from_ymd_opt(year, 12, d))
        .collect()
}
