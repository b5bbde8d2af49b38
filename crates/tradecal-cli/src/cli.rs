//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::commands::{CheckArgs, ConvertArgs, DaysArgs, ExpiryArgs, HolidaysArgs, WeekdaysArgs};

/// Tradecal - exchange trading calendar: working days, holidays and expiries
#[derive(Parser)]
#[command(name = "tradecal")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (each command has its own default)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Exchange code; unknown codes use the default holiday table
    #[arg(
        short = 'x',
        long,
        default_value = "NSEFO",
        env = "TRADECAL_EXCHANGE",
        global = true
    )]
    pub exchange: String,

    /// Holiday-table configuration file (TOML, or JSON with a .json extension)
    #[arg(long, env = "TRADECAL_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate working days from a start/end window and/or a day count
    Days(DaysArgs),

    /// Check whether a date is a working day
    Check(CheckArgs),

    /// Weekly, monthly and previous monthly expiry for a date
    Expiry(ExpiryArgs),

    /// List every date of a month falling on a weekday
    Weekdays(WeekdaysArgs),

    /// Convert a date between YYYYMMDD, bhav-copy and timestamp styles
    Convert(ConvertArgs),

    /// List the holidays of an exchange
    Holidays(HolidaysArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (one value per line)
    Minimal,
}
