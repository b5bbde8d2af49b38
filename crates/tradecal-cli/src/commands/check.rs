//! Check command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use tradecal_core::calendars::Calendar;
use tradecal_core::Date;

use crate::cli::OutputFormat;
use crate::commands::{parse_date, Session};
use crate::output::{print_failure, print_header, print_output, print_single, print_success, KeyValue};

/// Arguments for the check command.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Date to check (YYYYMMDD or DD-Mon-YYYY). Defaults to today.
    pub date: Option<String>,
}

/// Working-day status of a date.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub date: Date,
    pub weekday: &'static str,
    pub exchange: String,
    pub table: String,
    pub working_day: bool,
    pub next_working_day: Date,
    pub prev_working_day: Date,
}

/// Execute the check command.
pub fn execute(args: CheckArgs, session: &Session) -> Result<()> {
    let date = match args.date {
        Some(ref s) => parse_date(s)?,
        None => Date::today(),
    };

    let exchange = session.exchange.as_str();
    let report = CheckReport {
        date,
        weekday: date.weekday_name(),
        exchange: exchange.to_string(),
        table: session.calendar.calendar(exchange).name().to_string(),
        working_day: session.calendar.is_working_day(date, exchange),
        next_working_day: session.calendar.next_working_day(date, exchange)?,
        prev_working_day: session.calendar.prev_working_day(date, exchange)?,
    };

    match session.format_or(OutputFormat::Table) {
        OutputFormat::Table => {
            print_header(&format!("{} on {}", report.date, report.exchange));
            let status = format!("{} ({})", report.date, report.weekday);
            if report.working_day {
                print_success(&format!("{} is a working day", status));
            } else {
                print_failure(&format!("{} is not a working day", status));
            }
            let rows = vec![
                KeyValue::new("Holiday Table", report.table.clone()),
                KeyValue::from_date("Previous Working Day", report.prev_working_day),
                KeyValue::from_date("Next Working Day", report.next_working_day),
            ];
            print_output(&rows, OutputFormat::Table)?;
        }
        OutputFormat::Minimal => {
            println!("{}", if report.working_day { "working" } else { "holiday" });
        }
        format => print_single(&report, format)?,
    }

    Ok(())
}
