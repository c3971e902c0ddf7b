//! Add command implementation.

use anyhow::Result;
use bizday_core::CalendarDate;
use clap::Args;
use serde::Serialize;

use super::{parse_date, Context};
use crate::cli::{DateStyle, OutputFormat};
use crate::output::{print_record, print_rows, Field};

/// Arguments for the add command.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Start date (YYYY-MM-DD); never counted itself
    pub date: String,

    /// Number of business days to advance; below 1 yields `none`
    #[arg(allow_negative_numbers = true)]
    pub amount: i64,

    /// Result date style [default: configured `date_style`, else iso]
    #[arg(long, value_enum)]
    pub style: Option<DateStyle>,
}

#[derive(Debug, Serialize)]
struct AddResult {
    date: CalendarDate,
    amount: i64,
    country: String,
    result: Option<String>,
}

fn render(date: CalendarDate, style: DateStyle) -> String {
    match style {
        DateStyle::Iso => date.to_string(),
        DateStyle::Long => date.format_long(),
    }
}

/// Execute the add command.
pub fn execute(args: AddArgs, ctx: &Context) -> Result<()> {
    let date = parse_date(&args.date)?;
    ctx.check_country();

    let style = args.style.unwrap_or(ctx.date_style);
    let result = ctx
        .engine
        .add_business_days(date, args.amount, &ctx.country)
        .map(|reached| render(reached, style));

    match ctx.format {
        OutputFormat::Table => {
            let rows = vec![
                Field::new("Start", render(date, style)),
                Field::new("Business days", args.amount.to_string()),
                Field::new("Country", ctx.country.clone()),
                Field::new("Result", result.as_deref().unwrap_or("none")),
            ];
            print_rows(&rows, ctx.format)?;
        }
        OutputFormat::Minimal => println!("{}", result.as_deref().unwrap_or("none")),
        OutputFormat::Json | OutputFormat::Csv => {
            let output = AddResult {
                date,
                amount: args.amount,
                country: ctx.country.clone(),
                result,
            };
            print_record(&output, ctx.format)?;
        }
    }
    Ok(())
}
