//! CLI command implementations.

pub mod add;
pub mod between;
pub mod calendar;
pub mod check;
pub mod config;

pub use add::AddArgs;
pub use between::BetweenArgs;
pub use calendar::CalendarArgs;
pub use check::{CheckArgs, DateArgs};
pub use config::ConfigArgs;

use std::path::PathBuf;

use bizday_core::{BusinessDateEngine, CalendarDate};

use crate::cli::{DateStyle, OutputFormat};
use crate::error::{CliError, CliResult};
use crate::output::{status, Status};

/// Settings resolved from flags, environment and the config file.
pub struct Context {
    pub engine: BusinessDateEngine,
    pub format: OutputFormat,
    /// Uppercased, not validated; the engine reports unknown codes through its
    /// sentinels.
    pub country: String,
    pub date_style: DateStyle,
    pub quiet: bool,
    pub config_path: PathBuf,
}

impl Context {
    /// Warns on stderr when the selected country is not recognized.
    pub fn check_country(&self) {
        if !self.quiet && self.engine.country(&self.country).is_none() {
            let message = format!(
                "Unknown country code '{}': results use the invalid-country defaults",
                self.country
            );
            status(Status::Warning, &message);
        }
    }
}

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<CalendarDate> {
    CalendarDate::parse(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}
