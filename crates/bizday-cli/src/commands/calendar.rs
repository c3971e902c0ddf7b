//! Calendar command implementation.

use anyhow::Result;
use bizday_core::CalendarDate;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use super::{parse_date, Context};
use crate::error::CliError;
use crate::output::{heading, print_rows, yes_no};

/// Arguments for the calendar command.
#[derive(Args, Debug)]
pub struct CalendarArgs {
    /// First day to list (YYYY-MM-DD)
    pub start: String,

    /// Last day to list, inclusive (YYYY-MM-DD)
    pub end: String,

    /// Only list business days
    #[arg(long)]
    pub business_only: bool,
}

/// One listed day.
#[derive(Debug, Serialize, Tabled)]
struct DayRow {
    #[tabled(rename = "Date")]
    date: CalendarDate,
    #[tabled(rename = "Weekday")]
    weekday: String,
    #[tabled(rename = "Weekend", display_with = "display_flag")]
    weekend: bool,
    #[tabled(rename = "Holiday", display_with = "display_flag")]
    holiday: bool,
    #[tabled(rename = "Business", display_with = "display_flag")]
    business: bool,
}

fn display_flag(value: &bool) -> String {
    yes_no(*value).to_string()
}

/// Execute the calendar command.
pub fn execute(args: CalendarArgs, ctx: &Context) -> Result<()> {
    let start = parse_date(&args.start)?;
    let end = parse_date(&args.end)?;
    if end < start {
        return Err(CliError::InvalidRange {
            start: start.to_string(),
            end: end.to_string(),
        }
        .into());
    }
    ctx.check_country();

    let engine = &ctx.engine;
    let rows: Vec<DayRow> = (0..=start.days_between(&end))
        .map(|offset| start.add_days(offset))
        .map(|date| DayRow {
            date,
            weekday: date.as_naive_date().format("%A").to_string(),
            weekend: engine.is_weekend_day(date),
            holiday: engine.is_holiday(date, &ctx.country),
            business: engine.is_business_date(date, &ctx.country),
        })
        .filter(|row| !args.business_only || row.business)
        .collect();

    tracing::debug!(days = rows.len(), country = %ctx.country, "calendar listed");

    if ctx.format == crate::cli::OutputFormat::Table && !ctx.quiet {
        heading(&format!("{} calendar, {start} to {end}", ctx.country));
    }
    print_rows(&rows, ctx.format)
}
