//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{AddArgs, BetweenArgs, CalendarArgs, CheckArgs, ConfigArgs, DateArgs};

/// bizday - Business-date calculations per country
#[derive(Parser)]
#[command(name = "bizday")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format [default: configured `default_format`, else table]
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// ISO-3166 alpha-2 country code [default: configured `default_country`, else US]
    #[arg(short, long, env = "BIZDAY_COUNTRY", global = true)]
    pub country: Option<String>,

    /// Path to the configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show the weekday, weekend, holiday and business status of a date
    Check(CheckArgs),

    /// Print whether a date is a business day
    IsBusiness(DateArgs),

    /// Print whether a date is a holiday
    IsHoliday(DateArgs),

    /// Print whether a date falls on a weekend
    IsWeekend(DateArgs),

    /// Print whether a date falls on Monday through Friday
    IsWeekday(DateArgs),

    /// Count week days, weekend days and holidays between two dates
    Between(BetweenArgs),

    /// Advance a date by a number of business days
    Add(AddArgs),

    /// List every day in a range with its classification
    Calendar(CalendarArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}

impl OutputFormat {
    /// Parses a configured format name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::from_str(name, true).ok()
    }
}

/// How result dates are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DateStyle {
    /// 2019-01-28
    #[default]
    Iso,
    /// Monday, January 28th 2019
    Long,
}

impl DateStyle {
    /// Parses a configured style name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::from_str(name, true).ok()
    }
}
