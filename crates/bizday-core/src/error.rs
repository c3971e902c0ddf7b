//! Error types for bizday.
//!
//! Domain-level invalidity (unknown country, reversed ranges, non-positive
//! amounts) is reported through sentinel return values by the engine. The
//! errors here are for construction boundaries: parsing dates and building
//! validated country codes.

use thiserror::Error;

/// A specialized Result type for bizday operations.
pub type BizdayResult<T> = Result<T, BizdayError>;

/// The main error type for bizday operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BizdayError {
    /// Invalid or unparseable calendar date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Country code rejected by the country validator.
    #[error("Invalid country code: {code}")]
    InvalidCountry {
        /// The code as it was given, before normalization.
        code: String,
    },
}

impl BizdayError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid country error.
    #[must_use]
    pub fn invalid_country(code: impl Into<String>) -> Self {
        Self::InvalidCountry { code: code.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BizdayError::invalid_date("2024-02-30");
        assert_eq!(err.to_string(), "Invalid date: 2024-02-30");
    }

    #[test]
    fn test_invalid_country_keeps_raw_code() {
        let err = BizdayError::invalid_country("usat");
        assert!(err.to_string().contains("usat"));
    }

    #[test]
    fn test_errors_come_from_construction() {
        let errors = [
            BizdayError::invalid_date("2019-13-01"),
            BizdayError::invalid_country("ZZ"),
            crate::CalendarDate::parse("2019-02-30").unwrap_err(),
        ];
        for err in errors {
            match err {
                BizdayError::InvalidDate { .. } | BizdayError::InvalidCountry { .. } => {}
            }
        }
    }
}
