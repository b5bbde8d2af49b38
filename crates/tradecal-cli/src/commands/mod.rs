//! CLI command implementations.

pub mod check;
pub mod convert;
pub mod days;
pub mod expiry;
pub mod holidays;
pub mod weekdays;

// Re-export submodules for convenience
pub use check::CheckArgs;
pub use convert::ConvertArgs;
pub use days::DaysArgs;
pub use expiry::ExpiryArgs;
pub use holidays::HolidaysArgs;
pub use weekdays::WeekdaysArgs;

use std::path::Path;
use std::sync::Arc;

use tradecal_core::calendars::CalendarRegistry;
use tradecal_core::{Date, TradingCalendar};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// State shared by every command.
pub struct Session {
    /// Calendar engine over the loaded holiday tables.
    pub calendar: TradingCalendar,
    /// Exchange code from the command line.
    pub exchange: String,
    /// Requested output format, if any.
    pub format: Option<OutputFormat>,
}

impl Session {
    /// Builds a session, loading holiday tables from `config` when given.
    pub fn new(exchange: String, config: Option<&Path>, format: Option<OutputFormat>) -> CliResult<Self> {
        let registry = match config {
            Some(path) => {
                tracing::debug!("Loading holiday tables from {}", path.display());
                let registry = CalendarRegistry::from_file(path)
                    .map_err(|e| CliError::Config(e.to_string()))?;
                Arc::new(registry)
            }
            None => CalendarRegistry::builtin(),
        };

        Ok(Self {
            calendar: TradingCalendar::new(registry),
            exchange,
            format,
        })
    }

    /// The requested format, or the command's default.
    pub fn format_or(&self, default: OutputFormat) -> OutputFormat {
        self.format.unwrap_or(default)
    }
}

/// Parses a date in YYYYMMDD or DD-Mon-YYYY form.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse(s)
        .or_else(|_| Date::parse_bhav_style(s))
        .map_err(|_| CliError::InvalidDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_accepts_both_styles() {
        let compact = parse_date("20210624").unwrap();
        assert_eq!(parse_date("24-Jun-2021").unwrap(), compact);
        assert!(matches!(parse_date("2021-06-24"), Err(CliError::InvalidDate(_))));
    }

    #[test]
    fn test_session_format_default() {
        let session = Session::new("NSEFO".into(), None, None).unwrap();
        assert_eq!(session.format_or(OutputFormat::Minimal), OutputFormat::Minimal);

        let session = Session::new("NSEFO".into(), None, Some(OutputFormat::Json)).unwrap();
        assert_eq!(session.format_or(OutputFormat::Minimal), OutputFormat::Json);
    }

    #[test]
    fn test_session_missing_config() {
        let err = Session::new("NSEFO".into(), Some(Path::new("/nonexistent.toml")), None);
        assert!(matches!(err, Err(CliError::Config(_))));
    }
}
