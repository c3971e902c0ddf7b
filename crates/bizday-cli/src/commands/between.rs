//! Between command implementation.

use anyhow::Result;
use bizday_core::CalendarDate;
use clap::Args;
use serde::Serialize;

use super::{parse_date, Context};
use crate::cli::OutputFormat;
use crate::output::{heading, print_record, print_rows, Field};

/// Arguments for the between command.
///
/// Week and weekend days are counted over `[START, END)` and are negative when
/// END precedes START. Holidays are counted over `(START, END]`; `-1` means the
/// country is unknown or START is not before END.
#[derive(Args, Debug)]
pub struct BetweenArgs {
    /// Start date (YYYY-MM-DD)
    pub start: String,

    /// End date (YYYY-MM-DD)
    pub end: String,
}

#[derive(Debug, Serialize)]
struct RangeCounts {
    start: CalendarDate,
    end: CalendarDate,
    country: String,
    week_days: i64,
    weekend_days: i64,
    holidays: i64,
}

/// Execute the between command.
pub fn execute(args: BetweenArgs, ctx: &Context) -> Result<()> {
    let start = parse_date(&args.start)?;
    let end = parse_date(&args.end)?;
    ctx.check_country();

    let engine = &ctx.engine;
    let counts = RangeCounts {
        start,
        end,
        country: ctx.country.clone(),
        week_days: engine.week_days_between(start, end),
        weekend_days: engine.weekend_days_between(start, end),
        holidays: engine.holidays_between(start, end, &ctx.country),
    };

    match ctx.format {
        OutputFormat::Table => {
            if !ctx.quiet {
                heading(&format!("{start} to {end} ({})", counts.country));
            }
            let rows = vec![
                Field::new("Week days", counts.week_days.to_string()),
                Field::new("Weekend days", counts.weekend_days.to_string()),
                Field::new("Holidays", counts.holidays.to_string()),
            ];
            print_rows(&rows, ctx.format)?;
        }
        OutputFormat::Minimal => {
            println!("{} {} {}", counts.week_days, counts.weekend_days, counts.holidays);
        }
        OutputFormat::Json | OutputFormat::Csv => print_record(&counts, ctx.format)?,
    }
    Ok(())
}
