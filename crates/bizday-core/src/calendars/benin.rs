//! Benin public holidays.

use super::country::{CalendarRules, CountryCalendar, HolidayRule};

/// Reference offset: Africa/Porto-Novo.
const UTC_OFFSET_MINUTES: i32 = 60;

/// Build the BJ holiday table.
///
/// ## Holidays
///
/// - New Year's Day (January 1)
/// - Vodoun Day (January 10, since 1998)
/// - Easter Monday
/// - Labour Day (May 1)
/// - Ascension Day
/// - Whit Monday
/// - Independence Day (August 1)
/// - Assumption Day (August 15)
/// - All Saints' Day (November 1)
/// - Christmas Day (December 25)
///
/// Holidays that follow the Islamic calendar are not computed.
pub(crate) fn build() -> CountryCalendar {
    CalendarRules::new("Benin", UTC_OFFSET_MINUTES)
        .with(HolidayRule::Fixed { month: 1, day: 1 })
        .with_since(1998, HolidayRule::Fixed { month: 1, day: 10 })
        .with(HolidayRule::Easter(1))
        .with(HolidayRule::Fixed { month: 5, day: 1 })
        .with(HolidayRule::Easter(39))
        .with(HolidayRule::Easter(50))
        .with(HolidayRule::Fixed { month: 8, day: 1 })
        .with(HolidayRule::Fixed { month: 8, day: 15 })
        .with(HolidayRule::Fixed { month: 11, day: 1 })
        .with(HolidayRule::Fixed { month: 12, day: 25 })
        .build()
}
