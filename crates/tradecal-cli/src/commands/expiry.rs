//! Expiry command implementation.
//!
//! Reports the weekly and monthly contract expiries for a date along with
//! the previous monthly expiry and the implied weekly label.

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;

use tradecal_core::expiry::ExpiryKind;
use tradecal_core::types::DEFAULT_EXPIRY_WEEKDAY;
use tradecal_core::Date;

use crate::cli::OutputFormat;
use crate::commands::{parse_date, Session};
use crate::output::{print_header, print_output, print_single, print_warning, KeyValue};

/// Arguments for the expiry command.
#[derive(Args, Debug)]
pub struct ExpiryArgs {
    /// Reference date (YYYYMMDD or DD-Mon-YYYY). Defaults to today.
    pub date: Option<String>,

    /// Expiry weekday
    #[arg(short, long, default_value = DEFAULT_EXPIRY_WEEKDAY)]
    pub weekday: String,

    /// Expiry printed in minimal format
    #[arg(short, long, value_enum, default_value = "monthly")]
    pub kind: KindArg,
}

/// Contract cycle selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    /// Weekly expiry
    Weekly,
    /// Monthly expiry
    Monthly,
}

impl From<KindArg> for ExpiryKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Weekly => ExpiryKind::Weekly,
            KindArg::Monthly => ExpiryKind::Monthly,
        }
    }
}

/// Expiries for a reference date.
#[derive(Debug, Serialize)]
pub struct ExpiryReport {
    pub date: Date,
    pub exchange: String,
    pub weekday: String,
    pub weekly_expiry: Date,
    pub monthly_expiry: Date,
    pub prev_monthly_expiry: Option<Date>,
    pub implied_weekly: String,
}

/// Execute the expiry command.
pub fn execute(args: ExpiryArgs, session: &Session) -> Result<()> {
    let date = match args.date {
        Some(ref s) => parse_date(s)?,
        None => Date::today(),
    };
    let cal = &session.calendar;
    let exchange = session.exchange.as_str();

    let weekly = cal.expiry(date, exchange, ExpiryKind::Weekly, &args.weekday)?;
    let monthly = cal.expiry(date, exchange, ExpiryKind::Monthly, &args.weekday)?;

    let prev_monthly = match cal.prev_monthly_expiry_on(date, exchange, &args.weekday) {
        Ok(prev) => Some(prev),
        Err(e) if e.is_not_found() => {
            print_warning(&e.to_string());
            None
        }
        Err(e) => return Err(e.into()),
    };

    let report = ExpiryReport {
        date,
        exchange: exchange.to_string(),
        weekday: args.weekday.trim().to_string(),
        weekly_expiry: weekly.date,
        monthly_expiry: monthly.date,
        prev_monthly_expiry: prev_monthly,
        implied_weekly: cal.implied_weekly_label_for(date, exchange, &args.weekday)?,
    };

    match session.format_or(OutputFormat::Table) {
        OutputFormat::Table => {
            print_header(&format!("Expiries for {} on {}", report.date, report.exchange));
            let rows = vec![
                KeyValue::new("Expiry Weekday", report.weekday.clone()),
                KeyValue::from_date("Weekly Expiry", report.weekly_expiry),
                KeyValue::from_date("Monthly Expiry", report.monthly_expiry),
                KeyValue::new(
                    "Previous Monthly Expiry",
                    report
                        .prev_monthly_expiry
                        .map_or_else(|| "not found".to_string(), |d| d.to_string()),
                ),
                KeyValue::new("Implied Weekly", report.implied_weekly.clone()),
            ];
            print_output(&rows, OutputFormat::Table)?;
        }
        OutputFormat::Minimal => match ExpiryKind::from(args.kind) {
            ExpiryKind::Weekly => println!("{}", weekly.date),
            ExpiryKind::Monthly => println!("{}", monthly.date),
        },
        format => print_single(&report, format)?,
    }

    Ok(())
}
