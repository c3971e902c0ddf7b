//! Built-in holiday calendars.
//!
//! This module provides:
//! - [`BuiltinHolidays`], a [`HolidayProvider`] with rule tables for US, GB,
//!   FR, DE and BJ
//! - [`NoHolidays`], the calendar handed out for every other country
//! - [`CalendarRules`] and [`HolidayRule`] for assembling further rule tables

use std::sync::{Arc, OnceLock};

mod benin;
mod bitmap;
mod country;
mod france;
mod germany;
mod united_kingdom;
mod united_states;

pub use bitmap::{
    easter_sunday, last_weekday_of_month, nth_weekday_of_month, observed_date, HolidayBitmap,
    MAX_YEAR, MIN_YEAR,
};
pub use country::{CalendarRules, CountryCalendar, HolidayRule};

use crate::providers::{HolidayCalendar, HolidayProvider};
use crate::types::{CalendarDate, CountryCode};

/// A calendar without holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHolidays;

impl HolidayCalendar for NoHolidays {
    fn name(&self) -> &str {
        "No Holidays"
    }

    fn is_holiday(&self, _date: CalendarDate) -> bool {
        false
    }
}

type Slot = OnceLock<Arc<CountryCalendar>>;

static UNITED_STATES: Slot = OnceLock::new();
static UNITED_KINGDOM: Slot = OnceLock::new();
static FRANCE: Slot = OnceLock::new();
static GERMANY: Slot = OnceLock::new();
static BENIN: Slot = OnceLock::new();

/// Holiday provider backed by the built-in rule tables.
///
/// Each country's table is built on first use and shared for the rest of the
/// process. Valid countries without a table get [`NoHolidays`].
///
/// ```rust
/// use bizday_core::{BuiltinHolidays, CalendarDate, CountryCode};
/// use bizday_core::{HolidayProvider, Iso3166Countries};
///
/// let fr = CountryCode::new("FR", &Iso3166Countries).unwrap();
/// let bastille_day = CalendarDate::from_ymd(2019, 7, 14).unwrap();
/// assert!(BuiltinHolidays.is_holiday(&fr, bastille_day));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinHolidays;

impl BuiltinHolidays {
    /// Codes that have a rule table.
    pub const SUPPORTED: [&'static str; 5] = ["BJ", "DE", "FR", "GB", "US"];

    /// Returns true if `country` has a rule table.
    pub fn supports(country: &CountryCode) -> bool {
        Self::SUPPORTED.contains(&country.as_str())
    }

    fn table(country: &CountryCode) -> Option<Arc<CountryCalendar>> {
        let (slot, build): (&Slot, fn() -> CountryCalendar) = match country.as_str() {
            "US" => (&UNITED_STATES, united_states::build),
            "GB" => (&UNITED_KINGDOM, united_kingdom::build),
            "FR" => (&FRANCE, france::build),
            "DE" => (&GERMANY, germany::build),
            "BJ" => (&BENIN, benin::build),
            _ => return None,
        };
        Some(Arc::clone(slot.get_or_init(|| Arc::new(build()))))
    }
}

impl HolidayProvider for BuiltinHolidays {
    fn calendar(&self, country: &CountryCode) -> Arc<dyn HolidayCalendar> {
        if let Some(table) = Self::table(country) {
            return table;
        }
        tracing::debug!(country = %country, "no holiday rules, using empty calendar");
        Arc::new(NoHolidays)
    }
}
