//! English weekday names.

use chrono::Weekday;

use crate::error::{TradeCalError, TradeCalResult};

/// Weekday on which derivative contracts expire unless told otherwise.
pub const DEFAULT_EXPIRY_WEEKDAY: &str = "Thursday";

const WEEKDAYS: [(Weekday, &str); 7] = [
    (Weekday::Mon, "Monday"),
    (Weekday::Tue, "Tuesday"),
    (Weekday::Wed, "Wednesday"),
    (Weekday::Thu, "Thursday"),
    (Weekday::Fri, "Friday"),
    (Weekday::Sat, "Saturday"),
    (Weekday::Sun, "Sunday"),
];

/// Parses a full English weekday name.
///
/// Matching is case-insensitive and ignores surrounding whitespace, so
/// `" thursday "` and `"THURSDAY"` both name Thursday. Abbreviations are
/// rejected.
///
/// # Errors
///
/// Returns `TradeCalError::InvalidInput` for anything that is not a weekday
/// name.
pub fn parse_weekday(name: &str) -> TradeCalResult<Weekday> {
    let needle = name.trim();
    WEEKDAYS
        .iter()
        .find(|(_, full)| full.eq_ignore_ascii_case(needle))
        .map(|(weekday, _)| *weekday)
        .ok_or_else(|| TradeCalError::invalid_weekday(name))
}

/// Returns the full English name of a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAYS[weekday.num_days_from_monday() as usize].1
}
