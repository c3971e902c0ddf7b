//! Domain value types.

mod country;
mod date;

pub use country::CountryCode;
pub use date::CalendarDate;
