//! Days command implementation.
//!
//! The working-day generator: `-s/-e/-n` take `-1` for "not provided".

use anyhow::Result;
use clap::Args;

use tradecal_core::range::{WorkingDaysQuery, NOT_PROVIDED};

use crate::cli::OutputFormat;
use crate::commands::Session;
use crate::output::{print_output, DayRow};

/// Arguments for the days command.
#[derive(Args, Debug)]
pub struct DaysArgs {
    /// Window start (YYYYMMDD), -1 when not provided
    #[arg(short = 's', long = "startdate", default_value = NOT_PROVIDED, allow_hyphen_values = true)]
    pub start: String,

    /// Window end (YYYYMMDD), -1 when not provided
    #[arg(short = 'e', long = "enddate", default_value = NOT_PROVIDED, allow_hyphen_values = true)]
    pub end: String,

    /// Number of working days from the start and/or up to the end, -1 when not provided
    #[arg(short = 'n', long = "numdays", default_value = NOT_PROVIDED, allow_hyphen_values = true)]
    pub num_days: String,

    /// Keep only dates on this weekday (e.g. Thursday)
    #[arg(short = 'w', long, default_value = "")]
    pub weekday: String,
}

/// Execute the days command.
pub fn execute(args: DaysArgs, session: &Session) -> Result<()> {
    let query = WorkingDaysQuery::from_sentinels(&args.start, &args.end, &args.num_days, &args.weekday)?;
    tracing::debug!(?query, exchange = %session.exchange, "Generating working days");

    let days: Vec<DayRow> = session
        .calendar
        .working_days_in_range(&query, &session.exchange)?
        .into_iter()
        .map(DayRow::from)
        .collect();

    print_output(&days, session.format_or(OutputFormat::Minimal))
}
