//! Output formatting utilities.

use colored::Colorize;
use serde::Serialize;
use std::fmt;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use tradecal_core::Date;

use crate::cli::OutputFormat;

/// Formats and prints rows based on the specified format.
///
/// Minimal output prints each row's `Display` form on its own line.
pub fn print_output<T>(data: &[T], format: OutputFormat) -> anyhow::Result<()>
where
    T: Serialize + Tabled + fmt::Display,
{
    match format {
        OutputFormat::Table => print_table(data),
        OutputFormat::Json => print_json(data),
        OutputFormat::Csv => print_csv(data),
        OutputFormat::Minimal => print_minimal(data),
    }
}

/// Prints a single serializable record.
pub fn print_single<T: Serialize>(data: &T, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            wtr.serialize(data)?;
            wtr.flush()?;
        }
        _ => println!("{}", serde_json::to_string_pretty(data)?),
    }
    Ok(())
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(data: &[T]) -> anyhow::Result<()> {
    if data.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
    Ok(())
}

/// Prints data as JSON.
fn print_json<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints data as CSV.
fn print_csv<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

fn print_minimal<T: fmt::Display>(data: &[T]) -> anyhow::Result<()> {
    for item in data {
        println!("{}", item);
    }
    Ok(())
}

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Prints a failed check.
pub fn print_failure(message: &str) {
    println!("{} {}", "✗".red(), message);
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Field")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a key-value pair from a date.
    pub fn from_date(key: impl Into<String>, date: Date) -> Self {
        Self::new(key, date.to_string())
    }
}

impl fmt::Display for KeyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// A date with its weekday, one row per date.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct DayRow {
    #[tabled(rename = "Date")]
    pub date: Date,
    #[tabled(rename = "Weekday")]
    pub weekday: &'static str,
}

impl From<Date> for DayRow {
    fn from(date: Date) -> Self {
        Self {
            date,
            weekday: date.weekday_name(),
        }
    }
}

impl fmt::Display for DayRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_row_from_date() {
        let row = DayRow::from(Date::parse("20230302").unwrap());
        assert_eq!(row.weekday, "Thursday");
        assert_eq!(row.to_string(), "20230302");
        assert_eq!(
            serde_json::to_string(&row).unwrap(),
            r#"{"date":"20230302","weekday":"Thursday"}"#
        );
    }

    #[test]
    fn test_key_value_minimal_is_value() {
        let kv = KeyValue::from_date("Monthly Expiry", Date::parse("20230330").unwrap());
        assert_eq!(kv.to_string(), "20230330");
    }
}
