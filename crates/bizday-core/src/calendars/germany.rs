//! Germany nationwide public holidays.

use super::country::{CalendarRules, CountryCalendar, HolidayRule};

/// Reference offset: Europe/Berlin standard time.
const UTC_OFFSET_MINUTES: i32 = 60;

/// Build the DE holiday table.
///
/// Only holidays observed in every state are included; regional days such as
/// Epiphany or Corpus Christi are not.
pub(crate) fn build() -> CountryCalendar {
    CalendarRules::new("Germany", UTC_OFFSET_MINUTES)
        .with(HolidayRule::Fixed { month: 1, day: 1 })
        // Good Friday, Easter Monday
        .with(HolidayRule::Easter(-2))
        .with(HolidayRule::Easter(1))
        .with(HolidayRule::Fixed { month: 5, day: 1 })
        // Ascension Day, Whit Monday
        .with(HolidayRule::Easter(39))
        .with(HolidayRule::Easter(50))
        // German Unity Day
        .with_since(1990, HolidayRule::Fixed { month: 10, day: 3 })
        .with(HolidayRule::Fixed { month: 12, day: 25 })
        .with(HolidayRule::Fixed { month: 12, day: 26 })
        .build()
}
