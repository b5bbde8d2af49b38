//! Tradecal CLI - exchange trading calendar from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Ten NSE working days from a start date
//! tradecal days -s 20230301 -n 10
//!
//! # Thursdays between two dates
//! tradecal days -s 20230301 -e 20230331 -w thursday
//!
//! # Expiries for a date on B3
//! tradecal expiry 20230301 --exchange B3FO
//!
//! # Holiday tables from a file
//! tradecal --config holidays.toml holidays --year 2024
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::Session;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; library `log` records are bridged in by the subscriber
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let session = Session::new(cli.exchange, cli.config.as_deref(), cli.format)?;

    match cli.command {
        Commands::Days(args) => commands::days::execute(args, &session)?,
        Commands::Check(args) => commands::check::execute(args, &session)?,
        Commands::Expiry(args) => commands::expiry::execute(args, &session)?,
        Commands::Weekdays(args) => commands::weekdays::execute(args, &session)?,
        Commands::Convert(args) => commands::convert::execute(args, &session)?,
        Commands::Holidays(args) => commands::holidays::execute(args, &session)?,
    }

    Ok(())
}
