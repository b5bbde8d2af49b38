//! Holidays command implementation.

use anyhow::Result;
use clap::Args;

use tradecal_core::calendars::Calendar;

use crate::cli::OutputFormat;
use crate::commands::Session;
use crate::output::{print_header, print_output, DayRow};

/// Arguments for the holidays command.
#[derive(Args, Debug)]
pub struct HolidaysArgs {
    /// Only holidays in this year
    #[arg(short, long)]
    pub year: Option<i32>,
}

/// Execute the holidays command.
pub fn execute(args: HolidaysArgs, session: &Session) -> Result<()> {
    let calendar = session.calendar.calendar(&session.exchange);
    let holidays = match args.year {
        Some(year) => calendar.holidays_in_year(year),
        None => calendar.holidays().collect(),
    };
    let rows: Vec<DayRow> = holidays.into_iter().map(DayRow::from).collect();

    let format = session.format_or(OutputFormat::Table);
    if format == OutputFormat::Table {
        print_header(&format!(
            "{} holidays ({} table, {} dates)",
            session.exchange,
            calendar.name(),
            rows.len()
        ));
    }
    print_output(&rows, format)
}
