//! Single-date commands: `check` and the `is-*` predicates.

use anyhow::Result;
use bizday_core::CalendarDate;
use clap::Args;
use serde::Serialize;

use super::{parse_date, Context};
use crate::cli::OutputFormat;
use crate::output::{print_record, print_rows, status, Field, Status};

/// Arguments for the check command.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Date to check (YYYY-MM-DD)
    pub date: String,
}

/// Arguments for the predicate commands.
#[derive(Args, Debug)]
pub struct DateArgs {
    /// Date to test (YYYY-MM-DD)
    pub date: String,
}

/// Which single-date question is asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    Business,
    Holiday,
    Weekend,
    Weekday,
}

impl Predicate {
    fn name(self) -> &'static str {
        match self {
            Self::Business => "is_business",
            Self::Holiday => "is_holiday",
            Self::Weekend => "is_weekend",
            Self::Weekday => "is_weekday",
        }
    }

    fn uses_country(self) -> bool {
        matches!(self, Self::Business | Self::Holiday)
    }
}

/// Full classification of one date.
#[derive(Debug, Serialize)]
struct DateStatus {
    date: CalendarDate,
    weekday: String,
    country: String,
    weekend: bool,
    holiday: bool,
    business: bool,
}

#[derive(Debug, Serialize)]
struct PredicateResult {
    date: CalendarDate,
    predicate: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    country: Option<String>,
    value: bool,
}

/// Execute the check command.
pub fn execute(args: CheckArgs, ctx: &Context) -> Result<()> {
    let date = parse_date(&args.date)?;
    ctx.check_country();

    let engine = &ctx.engine;
    let summary = DateStatus {
        date,
        weekday: date.as_naive_date().format("%A").to_string(),
        country: ctx.country.clone(),
        weekend: engine.is_weekend_day(date),
        holiday: engine.is_holiday(date, &ctx.country),
        business: engine.is_business_date(date, &ctx.country),
    };

    match ctx.format {
        OutputFormat::Table => {
            let rows = vec![
                Field::new("Date", date.format_long()),
                Field::new("Weekday", summary.weekday.clone()),
                Field::new("Country", summary.country.clone()),
                Field::flag("Weekend", summary.weekend),
                Field::flag("Holiday", summary.holiday),
                Field::flag("Business day", summary.business),
            ];
            print_rows(&rows, ctx.format)?;
            if !ctx.quiet {
                let line = format!(
                    "{} is {}a business day in {}",
                    date,
                    if summary.business { "" } else { "not " },
                    summary.country
                );
                let kind = if summary.business { Status::Success } else { Status::Failure };
                status(kind, &line);
            }
        }
        OutputFormat::Minimal => println!("{}", serde_json::to_string(&summary)?),
        OutputFormat::Json | OutputFormat::Csv => print_record(&summary, ctx.format)?,
    }
    Ok(())
}

/// Execute one of the `is-*` commands.
pub fn execute_predicate(predicate: Predicate, args: DateArgs, ctx: &Context) -> Result<()> {
    let date = parse_date(&args.date)?;
    if predicate.uses_country() {
        ctx.check_country();
    }

    let engine = &ctx.engine;
    let value = match predicate {
        Predicate::Business => engine.is_business_date(date, &ctx.country),
        Predicate::Holiday => engine.is_holiday(date, &ctx.country),
        Predicate::Weekend => engine.is_weekend_day(date),
        Predicate::Weekday => engine.is_week_day(date),
    };

    match ctx.format {
        OutputFormat::Table | OutputFormat::Minimal => println!("{value}"),
        OutputFormat::Json | OutputFormat::Csv => {
            let result = PredicateResult {
                date,
                predicate: predicate.name(),
                country: predicate.uses_country().then(|| ctx.country.clone()),
                value,
            };
            print_record(&result, ctx.format)?;
        }
    }
    Ok(())
}
