//! Weekdays command implementation.

use anyhow::Result;
use clap::Args;

use crate::cli::OutputFormat;
use crate::commands::Session;
use crate::output::{print_output, DayRow};

/// Arguments for the weekdays command.
#[derive(Args, Debug)]
pub struct WeekdaysArgs {
    /// Year (YYYY)
    pub year: i32,

    /// Month (1-12)
    pub month: u32,

    /// Weekday name (e.g. Thursday)
    pub weekday: String,
}

/// Execute the weekdays command.
pub fn execute(args: WeekdaysArgs, session: &Session) -> Result<()> {
    let days: Vec<DayRow> = session
        .calendar
        .dates_of_weekday(args.year, args.month, &args.weekday)?
        .into_iter()
        .map(DayRow::from)
        .collect();

    print_output(&days, session.format_or(OutputFormat::Table))
}
