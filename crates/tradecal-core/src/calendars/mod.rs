//! Working-day calendars.
//!
//! This module provides:
//! - The [`Calendar`] trait and working-day stepping
//! - Named holiday sets and the exchange registry that selects them

mod config;
mod exchange;
mod holiday;
mod registry;
mod tables;

pub use config::{RegistryConfig, TableConfig};
pub use exchange::Exchange;
pub use holiday::HolidayCalendar;
pub use registry::CalendarRegistry;
pub use tables::{B3_TABLE, NSE_TABLE};

use crate::error::TradeCalResult;
use crate::types::Date;

/// Trait for working-day calendars.
///
/// A working day is a date that is neither a weekend day nor a holiday of
/// the calendar. All stepping methods are built on [`Calendar::is_working_day`].
///
/// Stepping terminates for any calendar with a finite holiday set, since
/// weekday cycling always reaches a non-holiday weekday eventually. It fails
/// with `InvalidInput` when it would leave the `YYYYMMDD` date range.
pub trait Calendar: Send + Sync {
    /// Returns the name of the calendar.
    fn name(&self) -> &str;

    /// Returns true if the date is a working day.
    fn is_working_day(&self, date: Date) -> bool;

    /// Returns true if the date is not a working day.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_working_day(date)
    }

    /// Returns the first working day strictly after the given date.
    fn next_working_day(&self, date: Date) -> TradeCalResult<Date> {
        let mut result = date.next_day()?;
        while !self.is_working_day(result) {
            result = result.next_day()?;
        }
        Ok(result)
    }

    /// Returns the last working day strictly before the given date.
    fn prev_working_day(&self, date: Date) -> TradeCalResult<Date> {
        let mut result = date.prev_day()?;
        while !self.is_working_day(result) {
            result = result.prev_day()?;
        }
        Ok(result)
    }

    /// Returns the date itself if it is a working day, otherwise the last
    /// working day before it.
    fn working_day_on_or_before(&self, date: Date) -> TradeCalResult<Date> {
        if self.is_working_day(date) {
            Ok(date)
        } else {
            self.prev_working_day(date)
        }
    }
}

/// A weekend-only calendar (no holidays).
///
/// Useful for testing or when holiday data is not available.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendCalendar;

impl Calendar for WeekendCalendar {
    fn name(&self) -> &str {
        "Weekend Only"
    }

    fn is_working_day(&self, date: Date) -> bool {
        !date.is_weekend()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Date {
        Date::parse(s).unwrap()
    }

    #[test]
    fn test_weekend_calendar() {
        let cal = WeekendCalendar;

        assert!(cal.is_working_day(d("20250106"))); // Monday
        assert!(!cal.is_working_day(d("20250104"))); // Saturday
        assert!(!cal.is_working_day(d("20250105"))); // Sunday
    }

    #[test]
    fn test_next_and_prev_are_strict() {
        let cal = WeekendCalendar;

        // Wednesday -> Thursday, never the same day
        assert_eq!(cal.next_working_day(d("20230301")).unwrap(), d("20230302"));
        assert_eq!(cal.prev_working_day(d("20230301")).unwrap(), d("20230228"));

        // Friday -> Monday
        assert_eq!(cal.next_working_day(d("20230303")).unwrap(), d("20230306"));
        // Monday -> Friday
        assert_eq!(cal.prev_working_day(d("20230306")).unwrap(), d("20230303"));
    }

    #[test]
    fn test_working_day_on_or_before() {
        let cal = WeekendCalendar;

        // Saturday rolls back to Friday, Monday stays put
        assert_eq!(cal.working_day_on_or_before(d("20250104")).unwrap(), d("20250103"));
        assert_eq!(cal.working_day_on_or_before(d("20250106")).unwrap(), d("20250106"));
    }

    #[test]
    fn test_stepping_fails_at_range_boundary() {
        let cal = WeekendCalendar;

        // 99991231 is a Friday; the next Monday would be 100000103
        assert!(cal.next_working_day(d("99991231")).unwrap_err().is_invalid_input());
        assert_eq!(cal.prev_working_day(d("99991231")).unwrap(), d("99991230"));
        // 00000101 is a Saturday
        assert!(cal.prev_working_day(d("00000103")).is_err());
    }
}
