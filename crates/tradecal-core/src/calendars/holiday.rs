//! Named holiday sets.

use std::collections::BTreeSet;

use super::config::TableConfig;
use super::Calendar;
use crate::error::{TradeCalError, TradeCalResult};
use crate::types::Date;

/// A named set of exchange holidays over a Saturday/Sunday weekend.
///
/// Holidays are kept sorted so listings come out in chronological order.
/// A `HolidayCalendar` is built once and then shared read-only through a
/// [`CalendarRegistry`](super::CalendarRegistry).
///
/// # Example
///
/// ```
/// use tradecal_core::calendars::{Calendar, HolidayCalendar};
/// use tradecal_core::types::Date;
///
/// let cal = HolidayCalendar::from_strings("Custom", ["20250101", "20251225"]).unwrap();
///
/// assert!(!cal.is_working_day(Date::parse("20250101").unwrap()));
/// assert!(cal.is_working_day(Date::parse("20250102").unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayCalendar {
    name: String,
    holidays: BTreeSet<Date>,
}

impl HolidayCalendar {
    /// Create a new calendar with no holidays.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            holidays: BTreeSet::new(),
        }
    }

    /// Create a calendar from a list of holiday dates.
    pub fn from_dates(name: impl Into<String>, holidays: impl IntoIterator<Item = Date>) -> Self {
        Self {
            name: name.into(),
            holidays: holidays.into_iter().collect(),
        }
    }

    /// Create a calendar from `YYYYMMDD` strings.
    ///
    /// Each string is trimmed before parsing, so stray whitespace in a
    /// hand-maintained list does not silently drop a holiday.
    pub fn from_strings<I, S>(name: impl Into<String>, holidays: I) -> TradeCalResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = name.into();
        let holidays = holidays
            .into_iter()
            .map(|s| {
                Date::parse(s.as_ref()).map_err(|e| {
                    TradeCalError::config(format!("Invalid holiday in table '{}': {}", name, e))
                })
            })
            .collect::<TradeCalResult<BTreeSet<_>>>()?;

        Ok(Self { name, holidays })
    }

    /// Build a calendar from its configuration form.
    pub fn from_table_config(config: TableConfig) -> TradeCalResult<Self> {
        Self::from_strings(config.name, config.holidays)
    }

    /// Export the calendar to its configuration form.
    pub fn to_table_config(&self) -> TableConfig {
        TableConfig {
            name: self.name.clone(),
            holidays: self.holidays.iter().map(ToString::to_string).collect(),
        }
    }

    /// Add a holiday date.
    pub fn add_holiday(&mut self, date: Date) {
        self.holidays.insert(date);
    }

    /// Add multiple holidays.
    pub fn add_holidays(&mut self, dates: impl IntoIterator<Item = Date>) {
        self.holidays.extend(dates);
    }

    /// Check if a date is listed as a holiday (weekends are not listed).
    pub fn contains(&self, date: Date) -> bool {
        self.holidays.contains(&date)
    }

    /// Count listed holidays.
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }

    /// Iterate over the listed holidays in chronological order.
    pub fn holidays(&self) -> impl Iterator<Item = Date> + '_ {
        self.holidays.iter().copied()
    }

    /// Listed holidays falling in the given year.
    pub fn holidays_in_year(&self, year: i32) -> Vec<Date> {
        self.holidays
            .iter()
            .filter(|d| d.year() == year)
            .copied()
            .collect()
    }
}

impl Calendar for HolidayCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_working_day(&self, date: Date) -> bool {
        !date.is_weekend() && !self.holidays.contains(&date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Date {
        Date::parse(s).unwrap()
    }

    #[test]
    fn test_holiday_calendar_new() {
        let cal = HolidayCalendar::new("Test");
        assert_eq!(cal.name(), "Test");
        assert_eq!(cal.holiday_count(), 0);
        assert!(cal.is_working_day(d("20250101")));
    }

    #[test]
    fn test_holiday_calendar_from_dates() {
        let cal = HolidayCalendar::from_dates("Test", [d("20250101"), d("20251225")]);

        assert!(!cal.is_working_day(d("20250101")));
        assert!(!cal.is_working_day(d("20251225")));
        assert!(cal.is_working_day(d("20250102")));
        assert_eq!(cal.holiday_count(), 2);
    }

    #[test]
    fn test_weekend_is_never_working() {
        let cal = HolidayCalendar::new("Test");

        assert!(!cal.is_working_day(d("20250104")));
        assert!(!cal.is_working_day(d("20250105")));
        assert!(cal.is_working_day(d("20250106")));
        // Weekends are not listed as holidays
        assert!(!cal.contains(d("20250104")));
    }

    #[test]
    fn test_from_strings_trims() {
        let cal = HolidayCalendar::from_strings("B3", [" 20231102", "20231115 "]).unwrap();
        assert!(cal.contains(d("20231102")));
        assert!(cal.contains(d("20231115")));
    }

    #[test]
    fn test_from_strings_rejects_malformed() {
        let err = HolidayCalendar::from_strings("Bad", ["2023-11-02"]).unwrap_err();
        assert!(matches!(err, TradeCalError::ConfigError { .. }));
        assert!(err.to_string().contains("Bad"));
    }

    #[test]
    fn test_holidays_sorted_and_by_year() {
        let cal = HolidayCalendar::from_dates(
            "Test",
            [d("20240101"), d("20230126"), d("20231225")],
        );
        let all: Vec<String> = cal.holidays().map(|h| h.to_string()).collect();
        assert_eq!(all, vec!["20230126", "20231225", "20240101"]);
        assert_eq!(cal.holidays_in_year(2023).len(), 2);
    }

    #[test]
    fn test_table_config_round_trip() {
        let cal = HolidayCalendar::from_dates("Test", [d("20250101")]);
        let config = cal.to_table_config();
        assert_eq!(config.holidays, vec!["20250101".to_string()]);
        assert_eq!(HolidayCalendar::from_table_config(config).unwrap(), cal);
    }
}
