//! United States federal holidays.

use chrono::{NaiveTime, Weekday};

use super::country::{CalendarRules, CountryCalendar, HolidayRule};

/// Reference offset: America/New_York standard time.
const UTC_OFFSET_MINUTES: i32 = -5 * 60;

/// Build the US holiday table.
///
/// ## Holidays
///
/// - New Year's Day (January 1, observed)
/// - Martin Luther King Jr. Day (3rd Monday in January, since 1986)
/// - Washington's Birthday (3rd Monday in February)
/// - Memorial Day (last Monday in May)
/// - Juneteenth (June 19, observed, since 2021)
/// - Independence Day (July 4, observed)
/// - Labor Day (1st Monday in September)
/// - Columbus Day (2nd Monday in October)
/// - Veterans Day (November 11, observed)
/// - Thanksgiving Day (4th Thursday in November)
/// - Christmas Day (December 25, observed)
///
/// Christmas Eve and New Year's Eve count from 14:00 local time.
pub(crate) fn build() -> CountryCalendar {
    let two_pm = NaiveTime::from_hms_opt(14, 0, 0).unwrap_or(NaiveTime::MIN);

    CalendarRules::new("United States", UTC_OFFSET_MINUTES)
        .with(HolidayRule::Observed { month: 1, day: 1 })
        .with_since(1986, HolidayRule::NthWeekday { month: 1, weekday: Weekday::Mon, nth: 3 })
        .with(HolidayRule::NthWeekday { month: 2, weekday: Weekday::Mon, nth: 3 })
        .with(HolidayRule::LastWeekday { month: 5, weekday: Weekday::Mon })
        .with_since(2021, HolidayRule::Observed { month: 6, day: 19 })
        .with(HolidayRule::Observed { month: 7, day: 4 })
        .with(HolidayRule::NthWeekday { month: 9, weekday: Weekday::Mon, nth: 1 })
        .with(HolidayRule::NthWeekday { month: 10, weekday: Weekday::Mon, nth: 2 })
        .with(HolidayRule::Observed { month: 11, day: 11 })
        .with(HolidayRule::NthWeekday { month: 11, weekday: Weekday::Thu, nth: 4 })
        .with(HolidayRule::Observed { month: 12, day: 25 })
        .with_partial(12, 24, two_pm)
        .with_partial(12, 31, two_pm)
        .build()
}
