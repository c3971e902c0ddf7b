//! Collaborator traits.
//!
//! The engine knows nothing about holiday rules or the list of countries.
//! It asks a [`CountryValidator`] whether a code is recognized and a
//! [`HolidayProvider`] for the holiday calendar of a validated country.
//! Both must tolerate concurrent reads.

use std::sync::Arc;

use crate::types::{CalendarDate, CountryCode};

mod iso3166;

pub use iso3166::{Iso3166Countries, ALPHA2_CODES};

/// Decides whether a string is a recognized country identifier.
///
/// Codes are uppercased by the caller before they are checked.
pub trait CountryValidator: Send + Sync {
    /// Returns true if `code` is a recognized country.
    fn is_valid(&self, code: &str) -> bool;
}

/// Holiday calendar of one country.
pub trait HolidayCalendar: Send + Sync {
    /// Returns the name of the calendar.
    fn name(&self) -> &str;

    /// Returns true if `date` is a holiday.
    fn is_holiday(&self, date: CalendarDate) -> bool;
}

/// Supplies holiday calendars keyed by country.
///
/// A provider asked for a country it has no rules for must still return a
/// calendar; returning one that never reports a holiday is the expected
/// behavior.
pub trait HolidayProvider: Send + Sync {
    /// Returns the holiday calendar for `country`.
    fn calendar(&self, country: &CountryCode) -> Arc<dyn HolidayCalendar>;

    /// Returns true if `date` is a holiday in `country`.
    fn is_holiday(&self, country: &CountryCode, date: CalendarDate) -> bool {
        self.calendar(country).is_holiday(date)
    }
}

impl<T: CountryValidator + ?Sized> CountryValidator for Arc<T> {
    fn is_valid(&self, code: &str) -> bool {
        (**self).is_valid(code)
    }
}

impl<T: HolidayProvider + ?Sized> HolidayProvider for Arc<T> {
    fn calendar(&self, country: &CountryCode) -> Arc<dyn HolidayCalendar> {
        (**self).calendar(country)
    }
}

impl<T: CountryValidator + ?Sized> CountryValidator for &T {
    fn is_valid(&self, code: &str) -> bool {
        (**self).is_valid(code)
    }
}

impl<T: HolidayProvider + ?Sized> HolidayProvider for &T {
    fn calendar(&self, country: &CountryCode) -> Arc<dyn HolidayCalendar> {
        (**self).calendar(country)
    }
}
