//! Validated country code.

use serde::Serialize;
use std::fmt;

use crate::error::{BizdayError, BizdayResult};
use crate::providers::CountryValidator;

/// An uppercase ISO 3166-1 alpha-2 country code accepted by a
/// [`CountryValidator`].
///
/// There is no public way to build one without a validator, so every code that
/// reaches a [`crate::HolidayProvider`] has been checked.
///
/// ```rust
/// use bizday_core::{CountryCode, Iso3166Countries};
///
/// let fr = CountryCode::new("fr", &Iso3166Countries).unwrap();
/// assert_eq!(fr.as_str(), "FR");
/// assert!(CountryCode::new("USAT", &Iso3166Countries).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CountryCode(String);

impl CountryCode {
    /// Uppercases `raw` and keeps it if `validator` accepts it.
    pub fn new<V: CountryValidator + ?Sized>(raw: &str, validator: &V) -> Option<Self> {
        let code = raw.to_uppercase();
        validator.is_valid(&code).then_some(CountryCode(code))
    }

    /// Like [`CountryCode::new`] but reports rejection as an error.
    ///
    /// # Errors
    ///
    /// Returns `BizdayError::InvalidCountry` carrying the raw input.
    pub fn try_new<V: CountryValidator + ?Sized>(raw: &str, validator: &V) -> BizdayResult<Self> {
        Self::new(raw, validator).ok_or_else(|| BizdayError::invalid_country(raw))
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CountryCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::Iso3166Countries;

    #[test]
    fn test_normalizes_to_uppercase() {
        let code = CountryCode::new("bj", &Iso3166Countries).unwrap();
        assert_eq!(code.as_str(), "BJ");
        assert_eq!(code.to_string(), "BJ");
    }

    #[test]
    fn test_rejects_unknown_codes() {
        assert!(CountryCode::new("USAT", &Iso3166Countries).is_none());
        assert!(CountryCode::new("", &Iso3166Countries).is_none());
        assert!(CountryCode::new("XX", &Iso3166Countries).is_none());
    }

    #[test]
    fn test_try_new_error() {
        let err = CountryCode::try_new("usa", &Iso3166Countries).unwrap_err();
        assert_eq!(err, BizdayError::invalid_country("usa"));
    }

    #[test]
    fn test_validator_sees_uppercase() {
        struct OnlyUpper;
        impl CountryValidator for OnlyUpper {
            fn is_valid(&self, code: &str) -> bool {
                code == "ZZ"
            }
        }

        assert!(CountryCode::new("zz", &OnlyUpper).is_some());
    }

    #[test]
    fn test_serializes_as_string() {
        let code = CountryCode::new("us", &Iso3166Countries).unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"US\"");
    }
}
