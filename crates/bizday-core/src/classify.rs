//! Classification of single dates.

use crate::engine::BusinessDateEngine;
use crate::normalize::{normalize, IntoCalendarDate};
use crate::providers::{CountryValidator, HolidayCalendar, HolidayProvider};
use crate::types::CalendarDate;

/// Weekend and holiday test shared by classification and advancement.
pub(crate) fn is_business_day_in(calendar: &dyn HolidayCalendar, date: CalendarDate) -> bool {
    !(date.is_weekend() || calendar.is_holiday(date))
}

impl<V: CountryValidator, H: HolidayProvider> BusinessDateEngine<V, H> {
    /// Returns true if `date` falls on a Saturday or Sunday.
    pub fn is_weekend_day<D: IntoCalendarDate>(&self, date: D) -> bool {
        normalize(date).is_weekend()
    }

    /// Returns true if `date` falls on Monday through Friday.
    pub fn is_week_day<D: IntoCalendarDate>(&self, date: D) -> bool {
        !self.is_weekend_day(date)
    }

    /// Returns true if `date` is a holiday in `country`.
    ///
    /// An unrecognized country is not an error: it yields `false`.
    pub fn is_holiday<D: IntoCalendarDate>(&self, date: D, country: &str) -> bool {
        let date = normalize(date);
        match self.country(country) {
            Some(country) => self.holidays().is_holiday(&country, date),
            None => false,
        }
    }

    /// Returns true if `date` is neither a weekend day nor a holiday in
    /// `country`.
    ///
    /// The country is validated before anything else; an unrecognized
    /// country yields `false` without consulting the holiday provider.
    pub fn is_business_date<D: IntoCalendarDate>(&self, date: D, country: &str) -> bool {
        let date = normalize(date);
        let Some(country) = self.country(country) else {
            return false;
        };
        is_business_day_in(self.holidays().calendar(&country).as_ref(), date)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::calendars::NoHolidays;
    use crate::providers::Iso3166Countries;
    use crate::types::CountryCode;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    /// Counts calendar lookups.
    #[derive(Default)]
    struct CountingProvider {
        lookups: AtomicUsize,
    }

    impl HolidayProvider for CountingProvider {
        fn calendar(&self, _country: &CountryCode) -> Arc<dyn HolidayCalendar> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            Arc::new(NoHolidays)
        }
    }

    #[test]
    fn test_weekend_and_weekday() {
        let engine = BusinessDateEngine::builtin();
        assert!(engine.is_weekend_day(date(2019, 6, 1)));
        assert!(engine.is_weekend_day(date(2019, 6, 2)));
        assert!(engine.is_week_day(date(2019, 6, 5)));
        assert!(!engine.is_week_day(date(2019, 6, 1)));
    }

    #[test]
    fn test_invalid_country_skips_provider() {
        let engine = BusinessDateEngine::new(Iso3166Countries, CountingProvider::default());

        assert!(!engine.is_business_date(date(2019, 1, 23), "USAT"));
        assert!(!engine.is_holiday(date(2019, 1, 23), "USAT"));
        assert_eq!(engine.holidays().lookups.load(Ordering::SeqCst), 0);

        assert!(engine.is_business_date(date(2019, 1, 23), "us"));
        assert_eq!(engine.holidays().lookups.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_business_date_excludes_weekends_without_holidays() {
        let engine = BusinessDateEngine::new(Iso3166Countries, CountingProvider::default());
        assert!(!engine.is_business_date(date(2019, 6, 1), "AQ"));
        assert!(engine.is_business_date(date(2019, 6, 3), "AQ"));
    }
}
