//! # bizday Core
//!
//! Business-date calculations for a given country: is a date a business day,
//! a weekend day or a holiday; how many week, weekend and holiday days fall
//! in a range; and which date is reached by advancing N business days.
//!
//! The crate is layered:
//!
//! - **Normalizer** ([`normalize`]): turns date and date-time values into a
//!   zone-free [`CalendarDate`] using the value's own local fields
//! - **Classifier**: weekday, weekend, holiday and business-day tests
//! - **Range and advancement algorithms**: counting over spans and
//!   skip-ahead business-day addition
//!
//! Holiday facts and country validity come from two collaborator traits,
//! [`HolidayProvider`] and [`CountryValidator`]. Built-in implementations
//! ([`BuiltinHolidays`], [`Iso3166Countries`]) are provided and can be
//! replaced.
//!
//! Invalid input is reported with sentinel values rather than errors:
//! `false` for predicates, `-1` for [`BusinessDateEngine::holidays_between`]
//! and `None` for [`BusinessDateEngine::add_business_days`].
//!
//! ## Example
//!
//! ```rust
//! use bizday_core::prelude::*;
//!
//! let engine = BusinessDateEngine::builtin();
//! let christmas = CalendarDate::from_ymd(2018, 12, 25).unwrap();
//!
//! assert!(!engine.is_business_date(christmas, "us"));
//! assert!(engine.is_holiday(CalendarDate::from_ymd(2019, 7, 14).unwrap(), "FR"));
//! assert_eq!(engine.holidays_between(christmas, christmas, "US"), -1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::trivially_copy_pass_by_ref)]

mod advance;
pub mod calendars;
mod classify;
pub mod engine;
pub mod error;
pub mod normalize;
pub mod providers;
mod range;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{BuiltinHolidays, CountryCalendar, NoHolidays};
    pub use crate::engine::BusinessDateEngine;
    pub use crate::error::{BizdayError, BizdayResult};
    pub use crate::normalize::{normalize, IntoCalendarDate};
    pub use crate::providers::{
        CountryValidator, HolidayCalendar, HolidayProvider, Iso3166Countries,
    };
    pub use crate::types::{CalendarDate, CountryCode};
}

// Re-export commonly used types at crate root
pub use calendars::BuiltinHolidays;
pub use engine::BusinessDateEngine;
pub use error::{BizdayError, BizdayResult};
pub use normalize::{normalize, IntoCalendarDate};
pub use providers::{CountryValidator, HolidayCalendar, HolidayProvider, Iso3166Countries};
pub use types::{CalendarDate, CountryCode};
