//! Convert command implementation.
//!
//! Converts a date between the compact `YYYYMMDD` form, the bhav-copy form
//! (`24-Jun-2021`) and the timestamp form (`2021-06-24  00:00:00`).

use anyhow::Result;
use clap::{Args, ValueEnum};

use tradecal_core::Date;

use crate::cli::OutputFormat;
use crate::commands::{parse_date, Session};
use crate::output::{print_output, KeyValue};

/// Arguments for the convert command.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Date (YYYYMMDD or DD-Mon-YYYY)
    pub date: String,

    /// Target style; all styles when omitted
    #[arg(short, long, value_enum)]
    pub to: Option<DateStyle>,
}

/// Date text styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DateStyle {
    /// YYYYMMDD
    Compact,
    /// DD-Mon-YYYY
    Bhav,
    /// YYYY-MM-DD  00:00:00
    Cl,
}

impl DateStyle {
    const ALL: [DateStyle; 3] = [DateStyle::Compact, DateStyle::Bhav, DateStyle::Cl];

    fn label(self) -> &'static str {
        match self {
            DateStyle::Compact => "compact",
            DateStyle::Bhav => "bhav",
            DateStyle::Cl => "cl",
        }
    }

    fn render(self, date: Date) -> String {
        match self {
            DateStyle::Compact => date.to_string(),
            DateStyle::Bhav => date.to_bhav_style(),
            DateStyle::Cl => date.to_cl_timestamp(),
        }
    }
}

/// Execute the convert command.
pub fn execute(args: ConvertArgs, session: &Session) -> Result<()> {
    let date = parse_date(&args.date)?;

    let styles = match args.to {
        Some(style) => vec![style],
        None => DateStyle::ALL.to_vec(),
    };
    let rows: Vec<KeyValue> = styles
        .into_iter()
        .map(|style| KeyValue::new(style.label(), style.render(date)))
        .collect();

    print_output(&rows, session.format_or(OutputFormat::Minimal))
}
