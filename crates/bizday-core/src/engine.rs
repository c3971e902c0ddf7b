//! The business-date engine.
//!
//! [`BusinessDateEngine`] ties the normalizer and the two collaborators
//! together. Its operations are split by layer:
//!
//! - classification: `is_weekend_day`, `is_week_day`, `is_holiday`,
//!   `is_business_date`
//! - range counting: `week_days_between`, `weekend_days_between`,
//!   `holidays_between`
//! - advancement: `add_business_days`
//!
//! The engine holds no mutable state. It is `Send + Sync` whenever its
//! collaborators are, which the collaborator traits require.

use crate::calendars::BuiltinHolidays;
use crate::providers::{CountryValidator, HolidayProvider, Iso3166Countries};
use crate::types::CountryCode;

/// Business-date calculations over a country validator and a holiday provider.
///
/// # Example
///
/// ```rust
/// use bizday_core::{BusinessDateEngine, CalendarDate};
///
/// let engine = BusinessDateEngine::builtin();
/// let start = CalendarDate::from_ymd(2019, 6, 1).unwrap();
/// let end = CalendarDate::from_ymd(2019, 6, 7).unwrap();
///
/// assert_eq!(engine.week_days_between(start, end), 4);
/// assert_eq!(engine.week_days_between(end, start), -4);
/// assert_eq!(engine.add_business_days(start, 0, "US"), None);
/// ```
#[derive(Debug, Clone)]
pub struct BusinessDateEngine<V = Iso3166Countries, H = BuiltinHolidays> {
    validator: V,
    holidays: H,
}

impl BusinessDateEngine {
    /// Engine wired with [`Iso3166Countries`] and [`BuiltinHolidays`].
    pub fn builtin() -> Self {
        Self::new(Iso3166Countries, BuiltinHolidays)
    }
}

impl Default for BusinessDateEngine {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<V: CountryValidator, H: HolidayProvider> BusinessDateEngine<V, H> {
    /// Creates an engine over the given collaborators.
    pub fn new(validator: V, holidays: H) -> Self {
        Self {
            validator,
            holidays,
        }
    }

    /// Returns the country validator.
    pub fn validator(&self) -> &V {
        &self.validator
    }

    /// Returns the holiday provider.
    pub fn holidays(&self) -> &H {
        &self.holidays
    }

    /// Uppercases and validates `code`.
    ///
    /// Every country-dependent operation goes through this first and returns
    /// its sentinel when it yields `None`.
    pub fn country(&self, code: &str) -> Option<CountryCode> {
        let country = CountryCode::new(code, &self.validator);
        if country.is_none() {
            tracing::debug!(code, "country code rejected");
        }
        country
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_engine_is_send_sync() {
        assert_send_sync::<BusinessDateEngine>();
    }

    #[test]
    fn test_country_resolution() {
        let engine = BusinessDateEngine::builtin();
        assert_eq!(engine.country("fr").unwrap().as_str(), "FR");
        assert!(engine.country("USAT").is_none());
        assert!(engine.country("").is_none());
    }
}
