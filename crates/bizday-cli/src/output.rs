//! Output formatting utilities.
//!
//! Everything a command prints on stdout goes through [`print_rows`] or
//! [`print_record`]; status lines go through [`status`].

use std::io::Write;

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;

/// Prints a list of rows in the requested format.
///
/// `minimal` writes one compact JSON object per line.
pub fn print_rows<T: Serialize + Tabled>(rows: &[T], format: OutputFormat) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    match format {
        OutputFormat::Table if rows.is_empty() => writeln!(out, "(no rows)")?,
        OutputFormat::Table => {
            let mut table = Table::new(rows);
            table
                .with(Style::sharp())
                .modify(Columns::first(), Alignment::left());
            writeln!(out, "{table}")?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, rows)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(&mut out);
            for row in rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
        OutputFormat::Minimal => {
            for row in rows {
                serde_json::to_writer(&mut out, row)?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}

/// Prints one record as pretty JSON, or as a CSV line with header.
///
/// Commands render their own `table` and `minimal` views and call this for
/// the machine-readable formats.
pub fn print_record<T: Serialize>(record: &T, format: OutputFormat) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    if format == OutputFormat::Csv {
        let mut wtr = csv::Writer::from_writer(&mut out);
        wtr.serialize(record)?;
        wtr.flush()?;
    } else {
        serde_json::to_writer_pretty(&mut out, record)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Kind of a one-line status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
    Warning,
    Info,
}

/// Prints a marked status line. Warnings go to stderr.
pub fn status(kind: Status, message: &str) {
    let marker = match kind {
        Status::Success => "✓".green(),
        Status::Failure => "✗".red(),
        Status::Warning => "⚠".yellow(),
        Status::Info => "ℹ".blue(),
    };
    if kind == Status::Warning {
        eprintln!("{marker} {message}");
    } else {
        println!("{marker} {message}");
    }
}

/// Prints a section title.
pub fn heading(title: &str) {
    println!("{}", title.bold());
}

/// `yes`/`no` rendering of a flag.
pub fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// A labelled value, used for vertical tables.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct Field {
    #[tabled(rename = "Field")]
    pub name: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl Field {
    pub fn new(name: impl Into<String>, value: impl ToString) -> Self {
        Self {
            name: name.into(),
            value: value.to_string(),
        }
    }

    pub fn flag(name: impl Into<String>, value: bool) -> Self {
        Self::new(name, yes_no(value))
    }
}
