//! Working-day sequence generation.
//!
//! Three independent generation modes:
//!
//! - [`working_days_between`]: working days inside a date window
//! - [`working_days_forward`]: a count of working days from a start date
//! - [`working_days_backward`]: a count of working days up to an end date
//!
//! [`WorkingDaysQuery`] composes them the way the `tradecal days -s/-e/-n` date
//! generator does: window first, forward run appended, backward run placed in
//! front, no deduplication, then an optional weekday filter.

use chrono::Weekday;

use crate::calendars::Calendar;
use crate::error::{TradeCalError, TradeCalResult};
use crate::types::{parse_weekday, Date};

/// Sentinel for "argument not provided".
pub const NOT_PROVIDED: &str = "-1";

/// Working days strictly between the snapped window ends.
///
/// The start snaps back to the working day before `start`, and the end snaps
/// to `end` itself when it is a working day or to the working day before it
/// otherwise. Days strictly between the two snapped ends are returned in
/// ascending order. A window with `start >= end` yields nothing.
pub fn working_days_between<C: Calendar + ?Sized>(
    calendar: &C,
    start: Date,
    end: Date,
) -> TradeCalResult<Vec<Date>> {
    let mut days = Vec::new();
    if start >= end {
        return Ok(days);
    }

    let snapped_end = calendar.working_day_on_or_before(end)?;
    let mut current = first_working_day_from(calendar, start)?;
    while current < snapped_end {
        days.push(current);
        current = calendar.next_working_day(current)?;
    }
    Ok(days)
}

/// `count` working days going forward, starting with `start` if it is a working day.
///
/// Fails with `InvalidInput` when the run would pass 99991231.
pub fn working_days_forward<C: Calendar + ?Sized>(
    calendar: &C,
    start: Date,
    count: usize,
) -> TradeCalResult<Vec<Date>> {
    check_count_fits(start, count, 1)?;

    let mut days = Vec::new();
    if count == 0 {
        return Ok(days);
    }
    let mut current = first_working_day_from(calendar, start)?;
    days.push(current);
    while days.len() < count {
        current = calendar.next_working_day(current)?;
        days.push(current);
    }
    Ok(days)
}

/// `count` working days going backward, ending with `end` if it is a working day.
///
/// The result is in ascending order. Fails with `InvalidInput` when the run
/// would pass 00000101.
pub fn working_days_backward<C: Calendar + ?Sized>(
    calendar: &C,
    end: Date,
    count: usize,
) -> TradeCalResult<Vec<Date>> {
    check_count_fits(end, count, -1)?;

    let mut days = Vec::new();
    if count == 0 {
        return Ok(days);
    }
    let mut current = calendar.working_day_on_or_before(end)?;
    days.push(current);
    while days.len() < count {
        current = calendar.prev_working_day(current)?;
        days.push(current);
    }
    days.reverse();
    Ok(days)
}

/// The date itself if it is a working day, otherwise the next working day.
fn first_working_day_from<C: Calendar + ?Sized>(
    calendar: &C,
    date: Date,
) -> TradeCalResult<Date> {
    if calendar.is_working_day(date) {
        Ok(date)
    } else {
        calendar.next_working_day(date)
    }
}

/// Rejects counts needing more calendar days than remain before the range
/// boundary in `direction` (1 forward, -1 backward).
fn check_count_fits(from: Date, count: usize, direction: i64) -> TradeCalResult<()> {
    let span = count.checked_sub(1).and_then(|span| i64::try_from(span).ok());
    let fits = match span {
        None => count == 0,
        Some(span) => from.checked_add_days(direction * span).is_some(),
    };
    if fits {
        Ok(())
    } else {
        Err(TradeCalError::invalid_input(format!(
            "{count} working days from {from} leave the range 00000101..=99991231"
        )))
    }
}

/// A composed working-day query.
///
/// Each mode runs only when its inputs are present:
///
/// | inputs            | mode                       | placement        |
/// |-------------------|----------------------------|------------------|
/// | `start` + `end`   | [`working_days_between`]   | first            |
/// | `start` + count   | [`working_days_forward`]   | appended         |
/// | `end` + count     | [`working_days_backward`]  | prepended        |
///
/// # Example
///
/// ```
/// use tradecal_core::calendars::WeekendCalendar;
/// use tradecal_core::range::WorkingDaysQuery;
/// use tradecal_core::types::Date;
///
/// let query = WorkingDaysQuery::new()
///     .with_start(Date::parse("20230301").unwrap())
///     .with_num_days(3);
/// let days = query.run(&WeekendCalendar).unwrap();
/// let days: Vec<String> = days.iter().map(|d| d.to_string()).collect();
/// assert_eq!(days, vec!["20230301", "20230302", "20230303"]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkingDaysQuery {
    /// Window start.
    pub start: Option<Date>,
    /// Window end.
    pub end: Option<Date>,
    /// Number of working days for the forward/backward modes.
    pub num_days: Option<usize>,
    /// Keep only dates falling on this weekday.
    pub weekday: Option<Weekday>,
}

impl WorkingDaysQuery {
    /// An empty query; running it yields nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the window start.
    pub fn with_start(mut self, start: Date) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the window end.
    pub fn with_end(mut self, end: Date) -> Self {
        self.end = Some(end);
        self
    }

    /// Set the working-day count.
    pub fn with_num_days(mut self, num_days: usize) -> Self {
        self.num_days = Some(num_days);
        self
    }

    /// Keep only dates falling on the given weekday.
    pub fn with_weekday(mut self, weekday: Weekday) -> Self {
        self.weekday = Some(weekday);
        self
    }

    /// Build a query from `-s/-e/-n/-w` style string arguments.
    ///
    /// `"-1"` marks an absent start, end or count; an empty (or blank)
    /// weekday means no filter. A count too large to fit before the date
    /// range boundary is rejected here.
    pub fn from_sentinels(
        start: &str,
        end: &str,
        num_days: &str,
        weekday: &str,
    ) -> TradeCalResult<Self> {
        let start = parse_optional(start, Date::parse)?;
        let end = parse_optional(end, Date::parse)?;
        let num_days = parse_optional(num_days, |s| {
            s.trim().parse::<usize>().map_err(|_| {
                TradeCalError::invalid_input(format!("'{s}' is not a working-day count"))
            })
        })?;
        let weekday = if weekday.trim().is_empty() {
            None
        } else {
            Some(parse_weekday(weekday)?)
        };

        if let Some(count) = num_days {
            if let Some(start) = start {
                check_count_fits(start, count, 1)?;
            }
            if let Some(end) = end {
                check_count_fits(end, count, -1)?;
            }
        }

        Ok(Self {
            start,
            end,
            num_days,
            weekday,
        })
    }

    /// Run every active mode and combine the results.
    pub fn run<C: Calendar + ?Sized>(&self, calendar: &C) -> TradeCalResult<Vec<Date>> {
        let mut days = Vec::new();

        if let (Some(start), Some(end)) = (self.start, self.end) {
            days.extend(working_days_between(calendar, start, end)?);
        }
        if let (Some(start), Some(count)) = (self.start, self.num_days) {
            days.extend(working_days_forward(calendar, start, count)?);
        }
        if let (Some(end), Some(count)) = (self.end, self.num_days) {
            let mut backward = working_days_backward(calendar, end, count)?;
            backward.append(&mut days);
            days = backward;
        }

        if let Some(weekday) = self.weekday {
            days.retain(|d| d.weekday() == weekday);
        }
        Ok(days)
    }
}

fn parse_optional<T>(
    value: &str,
    parse: impl FnOnce(&str) -> TradeCalResult<T>,
) -> TradeCalResult<Option<T>> {
    if value.trim() == NOT_PROVIDED {
        Ok(None)
    } else {
        parse(value).map(Some)
    }
}
