//! Derivative-contract expiry dates and the trading calendar engine.
//!
//! Expiry rules, for a configured weekday (Thursday by default):
//!
//! - **Monthly expiry**: the last occurrence of the weekday in the month. A
//!   date past that occurrence belongs to the next month's contract.
//! - **Weekly expiry**: the first occurrence of the weekday on or after the
//!   date, rolling into the next month when none remains.
//!
//! Either way, an occurrence that is not a working day moves back to the
//! previous working day ([`Calendar::working_day_on_or_before`]). Expiries
//! that would fall after 99991231 are reported as `InvalidInput`.

use chrono::{NaiveDate, Weekday};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::calendars::{Calendar, CalendarRegistry, HolidayCalendar};
use crate::error::{TradeCalError, TradeCalResult};
use crate::range::WorkingDaysQuery;
use crate::types::{parse_weekday, Date, DEFAULT_EXPIRY_WEEKDAY};

/// Default bound on backward steps taken by [`prev_monthly_expiry`].
pub const MAX_PREV_EXPIRY_STEPS: u32 = 60;

// ============================================================================
// Expiry descriptors
// ============================================================================

/// Contract cycle of an expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpiryKind {
    /// Weekly contract.
    Weekly,
    /// Monthly contract.
    Monthly,
}

impl fmt::Display for ExpiryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpiryKind::Weekly => write!(f, "Weekly"),
            ExpiryKind::Monthly => write!(f, "Monthly"),
        }
    }
}

/// An expiry date tagged with its contract cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Expiry {
    /// The (holiday-adjusted) expiry date.
    pub date: Date,
    /// Contract cycle.
    pub kind: ExpiryKind,
}

impl fmt::Display for Expiry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.date, self.kind)
    }
}

// ============================================================================
// Expiry rules
// ============================================================================

/// Days from `from` forward to the next `target`, zero when they match.
fn days_until(from: Weekday, target: Weekday) -> i64 {
    let from = i64::from(from.num_days_from_monday());
    let target = i64::from(target.num_days_from_monday());
    (7 + target - from) % 7
}

/// First day of a month.
fn first_of_month(year: i32, month: u32) -> TradeCalResult<Date> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(Date::from)
        .ok_or_else(|| TradeCalError::invalid_input(format!("Invalid month: {year}-{month:02}")))
}

/// All dates of a month falling on `weekday`, ascending.
pub fn weekday_occurrences(year: i32, month: u32, weekday: Weekday) -> TradeCalResult<Vec<Date>> {
    let first = first_of_month(year, month)?;
    let mut current = first.add_days(days_until(first.weekday(), weekday));

    let mut dates = Vec::with_capacity(5);
    while current.month() == month {
        dates.push(current);
        current = current.add_days(7);
    }
    Ok(dates)
}

/// All dates of a month falling on the named weekday, ascending.
///
/// ```
/// use tradecal_core::expiry::dates_of_weekday;
///
/// let days: Vec<String> = dates_of_weekday(2023, 3, "Thursday")
///     .unwrap()
///     .iter()
///     .map(|d| d.to_string())
///     .collect();
/// assert_eq!(days, ["20230302", "20230309", "20230316", "20230323", "20230330"]);
/// ```
pub fn dates_of_weekday(year: i32, month: u32, weekday_name: &str) -> TradeCalResult<Vec<Date>> {
    weekday_occurrences(year, month, parse_weekday(weekday_name)?)
}

/// Last occurrence of `weekday` in the month containing `date`.
pub fn last_occurrence(date: Date, weekday: Weekday) -> Date {
    let last = date.end_of_month();
    let back = days_until(weekday, last.weekday());
    last.add_days(-back)
}

/// First occurrence of `weekday` on or after `date`.
fn next_occurrence(date: Date, weekday: Weekday) -> TradeCalResult<Date> {
    date.try_add_days(days_until(date.weekday(), weekday))
}

/// Monthly expiry of the contract trading on `date`.
pub fn monthly_expiry<C: Calendar + ?Sized>(
    calendar: &C,
    date: Date,
    weekday: Weekday,
) -> TradeCalResult<Date> {
    let mut last = last_occurrence(date, weekday);
    if date > last {
        last = last_occurrence(date.start_of_next_month()?, weekday);
    }
    calendar.working_day_on_or_before(last)
}

/// Weekly expiry of the contract trading on `date`.
///
/// The raw occurrence is never before `date`; the adjusted one can be, when
/// `date` is itself a non-working expiry day.
pub fn weekly_expiry<C: Calendar + ?Sized>(
    calendar: &C,
    date: Date,
    weekday: Weekday,
) -> TradeCalResult<Date> {
    calendar.working_day_on_or_before(next_occurrence(date, weekday)?)
}

/// The monthly expiry before the one `date` belongs to.
///
/// Steps back one working day at a time from the current monthly expiry
/// until a stepped-back day maps to a different monthly expiry. Gives up
/// with [`TradeCalError::NotFound`] after `max_steps` steps.
pub fn prev_monthly_expiry<C: Calendar + ?Sized>(
    calendar: &C,
    date: Date,
    weekday: Weekday,
    max_steps: u32,
) -> TradeCalResult<Date> {
    let current = monthly_expiry(calendar, date, weekday)?;
    let mut cursor = current;

    for _ in 0..max_steps {
        cursor = calendar.prev_working_day(cursor)?;
        let expiry = monthly_expiry(calendar, cursor, weekday)?;
        if expiry != current {
            return Ok(expiry);
        }
    }

    warn!(
        "No previous monthly expiry for {} within {} working days on {}",
        date,
        max_steps,
        calendar.name()
    );
    Err(TradeCalError::not_found(
        format!("previous monthly expiry for {date}"),
        max_steps,
    ))
}

/// Number of weekly expiries before the monthly expiry, as `W.<count>`.
///
/// Walks from `date` one weekday occurrence at a time, counting each weekly
/// expiry that lands before the monthly expiry. The walk advances from the
/// raw occurrence, so a weekly expiry pulled back by a holiday counts once.
pub fn implied_weekly_label<C: Calendar + ?Sized>(
    calendar: &C,
    date: Date,
    weekday: Weekday,
) -> TradeCalResult<String> {
    let monthly = monthly_expiry(calendar, date, weekday)?;
    let mut count = 0;
    let mut cursor = date;

    while cursor < monthly {
        let occurrence = next_occurrence(cursor, weekday)?;
        if calendar.working_day_on_or_before(occurrence)? >= monthly {
            break;
        }
        count += 1;
        cursor = occurrence.next_day()?;
    }

    Ok(format!("W.{count}"))
}

// ============================================================================
// TradingCalendar
// ============================================================================

/// Exchange-aware calendar engine.
///
/// Holds an injected [`CalendarRegistry`]; every exchange argument is
/// resolved through it, so unknown exchange codes use the registry's default
/// table. Weekday arguments are English weekday names, case-insensitive.
///
/// # Example
///
/// ```
/// use tradecal_core::expiry::TradingCalendar;
/// use tradecal_core::types::Date;
///
/// let cal = TradingCalendar::builtin();
/// let date = Date::parse("20230301").unwrap();
///
/// assert_eq!(cal.weekly_expiry(date, "NSEFO", "Thursday").unwrap().to_string(), "20230302");
/// assert_eq!(cal.monthly_expiry(date, "NSEFO", "Thursday").unwrap().to_string(), "20230330");
/// assert_eq!(cal.implied_weekly_label(date).unwrap(), "W.4");
/// ```
#[derive(Debug, Clone)]
pub struct TradingCalendar {
    registry: Arc<CalendarRegistry>,
    max_prev_expiry_steps: u32,
}

impl TradingCalendar {
    /// Creates an engine over the given registry.
    pub fn new(registry: Arc<CalendarRegistry>) -> Self {
        Self {
            registry,
            max_prev_expiry_steps: MAX_PREV_EXPIRY_STEPS,
        }
    }

    /// Creates an engine over the embedded holiday tables.
    pub fn builtin() -> Self {
        Self::new(CalendarRegistry::builtin())
    }

    /// Sets the step bound used by [`TradingCalendar::prev_monthly_expiry`].
    pub fn with_max_prev_expiry_steps(mut self, steps: u32) -> Self {
        self.max_prev_expiry_steps = steps;
        self
    }

    /// The registry backing this engine.
    pub fn registry(&self) -> &CalendarRegistry {
        &self.registry
    }

    /// The holiday set used for an exchange.
    pub fn calendar(&self, exchange: &str) -> &HolidayCalendar {
        self.registry.resolve(exchange)
    }

    /// Returns true if the date is neither a weekend nor an exchange holiday.
    pub fn is_working_day(&self, date: Date, exchange: &str) -> bool {
        self.calendar(exchange).is_working_day(date)
    }

    /// First working day strictly after `date`.
    pub fn next_working_day(&self, date: Date, exchange: &str) -> TradeCalResult<Date> {
        self.calendar(exchange).next_working_day(date)
    }

    /// Last working day strictly before `date`.
    pub fn prev_working_day(&self, date: Date, exchange: &str) -> TradeCalResult<Date> {
        self.calendar(exchange).prev_working_day(date)
    }

    /// All dates of a month on the named weekday.
    pub fn dates_of_weekday(&self, year: i32, month: u32, weekday_name: &str) -> TradeCalResult<Vec<Date>> {
        dates_of_weekday(year, month, weekday_name)
    }

    /// Monthly expiry for `date` on an exchange.
    pub fn monthly_expiry(&self, date: Date, exchange: &str, weekday_name: &str) -> TradeCalResult<Date> {
        let weekday = parse_weekday(weekday_name)?;
        monthly_expiry(self.calendar(exchange), date, weekday)
    }

    /// Weekly expiry for `date` on an exchange.
    pub fn weekly_expiry(&self, date: Date, exchange: &str, weekday_name: &str) -> TradeCalResult<Date> {
        let weekday = parse_weekday(weekday_name)?;
        weekly_expiry(self.calendar(exchange), date, weekday)
    }

    /// Expiry of the given cycle for `date`.
    pub fn expiry(
        &self,
        date: Date,
        exchange: &str,
        kind: ExpiryKind,
        weekday_name: &str,
    ) -> TradeCalResult<Expiry> {
        let date = match kind {
            ExpiryKind::Weekly => self.weekly_expiry(date, exchange, weekday_name)?,
            ExpiryKind::Monthly => self.monthly_expiry(date, exchange, weekday_name)?,
        };
        Ok(Expiry { date, kind })
    }

    /// Previous Thursday monthly expiry for `date` on an exchange.
    pub fn prev_monthly_expiry(&self, date: Date, exchange: &str) -> TradeCalResult<Date> {
        self.prev_monthly_expiry_on(date, exchange, DEFAULT_EXPIRY_WEEKDAY)
    }

    /// Previous monthly expiry for `date` with a custom expiry weekday.
    pub fn prev_monthly_expiry_on(
        &self,
        date: Date,
        exchange: &str,
        weekday_name: &str,
    ) -> TradeCalResult<Date> {
        let weekday = parse_weekday(weekday_name)?;
        prev_monthly_expiry(
            self.calendar(exchange),
            date,
            weekday,
            self.max_prev_expiry_steps,
        )
    }

    /// Implied weekly label on the default table with Thursday expiries.
    pub fn implied_weekly_label(&self, date: Date) -> TradeCalResult<String> {
        implied_weekly_label(self.registry.default_calendar(), date, Weekday::Thu)
    }

    /// Implied weekly label for an exchange and expiry weekday.
    pub fn implied_weekly_label_for(
        &self,
        date: Date,
        exchange: &str,
        weekday_name: &str,
    ) -> TradeCalResult<String> {
        let weekday = parse_weekday(weekday_name)?;
        implied_weekly_label(self.calendar(exchange), date, weekday)
    }

    /// Runs a working-day query against an exchange's holidays.
    pub fn working_days_in_range(
        &self,
        query: &WorkingDaysQuery,
        exchange: &str,
    ) -> TradeCalResult<Vec<Date>> {
        query.run(self.calendar(exchange))
    }
}

impl Default for TradingCalendar {
    fn default() -> Self {
        Self::builtin()
    }
}
