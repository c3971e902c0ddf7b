//! France public holidays.

use super::country::{CalendarRules, CountryCalendar, HolidayRule};

/// Reference offset: Europe/Paris standard time.
const UTC_OFFSET_MINUTES: i32 = 60;

/// Build the FR holiday table.
///
/// ## Holidays
///
/// - New Year's Day (January 1)
/// - Easter Monday
/// - Labour Day (May 1)
/// - Victory Day (May 8)
/// - Ascension Thursday
/// - Whit Monday
/// - Bastille Day (July 14)
/// - Assumption of Mary (August 15)
/// - All Saints' Day (November 1)
/// - Armistice Day (November 11)
/// - Christmas Day (December 25)
pub(crate) fn build() -> CountryCalendar {
    CalendarRules::new("France", UTC_OFFSET_MINUTES)
        .with(HolidayRule::Fixed { month: 1, day: 1 })
        .with(HolidayRule::Easter(1))
        .with(HolidayRule::Fixed { month: 5, day: 1 })
        .with(HolidayRule::Fixed { month: 5, day: 8 })
        .with(HolidayRule::Easter(39))
        .with(HolidayRule::Easter(50))
        .with(HolidayRule::Fixed { month: 7, day: 14 })
        .with(HolidayRule::Fixed { month: 8, day: 15 })
        .with(HolidayRule::Fixed { month: 11, day: 1 })
        .with(HolidayRule::Fixed { month: 11, day: 11 })
        .with(HolidayRule::Fixed { month: 12, day: 25 })
        .build()
}
