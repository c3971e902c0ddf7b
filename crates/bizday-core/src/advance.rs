//! Business-day advancement.

use crate::classify::is_business_day_in;
use crate::engine::BusinessDateEngine;
use crate::normalize::{normalize, IntoCalendarDate};
use crate::providers::{CountryValidator, HolidayProvider};
use crate::types::CalendarDate;

impl<V: CountryValidator, H: HolidayProvider> BusinessDateEngine<V, H> {
    /// Returns the date reached by moving forward `amount` business days in
    /// `country`.
    ///
    /// Days after `date` are examined one at a time; the date on which the
    /// `amount`-th business day is found is returned. `date` itself is never
    /// counted.
    ///
    /// Returns `None` when the country is not recognized, when `amount` is
    /// less than 1, or when the scan runs past the last representable date.
    pub fn add_business_days<D: IntoCalendarDate>(
        &self,
        date: D,
        amount: i64,
        country: &str,
    ) -> Option<CalendarDate> {
        let start = normalize(date);
        let country = self.country(country)?;
        if amount < 1 {
            tracing::debug!(amount, "business-day amount must be positive");
            return None;
        }

        let calendar = self.holidays().calendar(&country);
        let mut current = start;
        let mut found = 0;
        while found < amount {
            let Some(next) = current.checked_add_days(1) else {
                tracing::debug!(%country, %start, amount, found, "ran out of dates");
                return None;
            };
            current = next;
            if is_business_day_in(calendar.as_ref(), current) {
                found += 1;
                tracing::trace!(date = %current, found, "business day");
            }
        }

        tracing::debug!(%country, %start, amount, result = %current, "advanced business days");
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use super::*;
    use crate::providers::{HolidayCalendar, Iso3166Countries};
    use crate::types::CountryCode;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    struct FixedDays(HashSet<CalendarDate>);

    impl HolidayCalendar for FixedDays {
        fn name(&self) -> &str {
            "Fixed"
        }

        fn is_holiday(&self, date: CalendarDate) -> bool {
            self.0.contains(&date)
        }
    }

    struct FixedProvider(Arc<FixedDays>);

    impl FixedProvider {
        fn new(days: &[CalendarDate]) -> Self {
            Self(Arc::new(FixedDays(days.iter().copied().collect())))
        }
    }

    impl HolidayProvider for FixedProvider {
        fn calendar(&self, _country: &CountryCode) -> Arc<dyn HolidayCalendar> {
            self.0.clone()
        }
    }

    #[test]
    fn test_skips_weekends() {
        let engine = BusinessDateEngine::new(Iso3166Countries, FixedProvider::new(&[]));
        // Friday + 1 lands on Monday
        assert_eq!(engine.add_business_days(date(2019, 6, 7), 1, "DE"), Some(date(2019, 6, 10)));
        // Saturday + 1 lands on Monday
        assert_eq!(engine.add_business_days(date(2019, 6, 8), 1, "DE"), Some(date(2019, 6, 10)));
        assert_eq!(engine.add_business_days(date(2019, 6, 3), 10, "DE"), Some(date(2019, 6, 17)));
    }

    #[test]
    fn test_skips_holidays() {
        let engine = BusinessDateEngine::new(
            Iso3166Countries,
            FixedProvider::new(&[date(2019, 6, 10), date(2019, 6, 11)]),
        );
        assert_eq!(engine.add_business_days(date(2019, 6, 7), 1, "DE"), Some(date(2019, 6, 12)));
    }

    #[test]
    fn test_end_of_date_range_yields_none() {
        let engine = BusinessDateEngine::new(Iso3166Countries, FixedProvider::new(&[]));
        let last = CalendarDate::from(chrono::NaiveDate::MAX);
        assert_eq!(engine.add_business_days(last, 1, "DE"), None);
        assert_eq!(engine.add_business_days(last.add_days(-30), 100, "DE"), None);
    }

    #[test]
    fn test_sentinels() {
        let engine = BusinessDateEngine::new(Iso3166Countries, FixedProvider::new(&[]));
        let start = date(2019, 6, 3);
        assert_eq!(engine.add_business_days(start, 0, "DE"), None);
        assert_eq!(engine.add_business_days(start, -3, "DE"), None);
        assert_eq!(engine.add_business_days(start, 5, "XX"), None);
    }
}
