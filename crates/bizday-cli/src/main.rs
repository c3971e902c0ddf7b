//! bizday CLI - Business-date calculations from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Classify a date
//! bizday check 2019-01-23 --country US
//!
//! # Count week days, weekend days and holidays
//! bizday between 2018-12-25 2019-01-25 --country US
//!
//! # Advance by business days
//! bizday add 2018-12-25 20 --country US --style long
//!
//! # List a month
//! bizday calendar 2019-07-01 2019-07-31 --country FR
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod config;
mod error;
mod output;

use bizday_core::BusinessDateEngine;
use cli::{Cli, Commands};
use commands::check::Predicate;
use commands::Context;
use config::{default_config_path, Config, ConfigKey};
use output::{status, Status};

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing(verbose: bool, configured: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "debug" } else { configured })
    });
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => default_config_path()?,
    };
    let config = Config::load(&config_path).unwrap_or_else(|err| {
        if !cli.quiet {
            status(Status::Warning, &format!("Ignoring settings file, using defaults: {err}"));
        }
        Config::default()
    });

    init_tracing(cli.verbose, config.value(ConfigKey::LogLevel));
    if !config.use_colors() {
        colored::control::set_override(false);
    }

    let country = cli
        .country
        .unwrap_or_else(|| config.value(ConfigKey::DefaultCountry).to_string())
        .trim()
        .to_uppercase();

    let ctx = Context {
        engine: BusinessDateEngine::builtin(),
        format: cli.format.unwrap_or_else(|| config.default_format()),
        country,
        date_style: config.date_style(),
        quiet: cli.quiet,
        config_path,
    };
    tracing::debug!(country = %ctx.country, format = ?ctx.format, "resolved settings");

    match cli.command {
        Commands::Check(args) => commands::check::execute(args, &ctx)?,
        Commands::IsBusiness(args) => {
            commands::check::execute_predicate(Predicate::Business, args, &ctx)?;
        }
        Commands::IsHoliday(args) => {
            commands::check::execute_predicate(Predicate::Holiday, args, &ctx)?;
        }
        Commands::IsWeekend(args) => {
            commands::check::execute_predicate(Predicate::Weekend, args, &ctx)?;
        }
        Commands::IsWeekday(args) => {
            commands::check::execute_predicate(Predicate::Weekday, args, &ctx)?;
        }
        Commands::Between(args) => commands::between::execute(args, &ctx)?,
        Commands::Add(args) => commands::add::execute(args, &ctx)?,
        Commands::Calendar(args) => commands::calendar::execute(args, &ctx)?,
        Commands::Config(args) => commands::config::execute(args, &ctx)?,
    }

    Ok(())
}
