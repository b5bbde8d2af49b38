//! Date type for trading-calendar calculations.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use super::weekday::weekday_name;
use crate::error::{TradeCalError, TradeCalResult};

/// Three-letter English month abbreviations, January first.
const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A calendar date with no time component.
///
/// This is a newtype wrapper around `chrono::NaiveDate`. Its canonical text
/// form is the fixed-width `YYYYMMDD` string, so ordering of `Date` values and
/// lexicographic ordering of their canonical strings agree.
///
/// # Example
///
/// ```rust
/// use tradecal_core::types::Date;
///
/// let date: Date = "20230301".parse().unwrap();
/// assert_eq!(date.next_day().unwrap().to_string(), "20230302");
/// assert_eq!(date.to_bhav_style(), "01-Mar-2023");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `TradeCalError::InvalidInput` if the date does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> TradeCalResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .filter(Date::is_representable)
            .ok_or_else(|| {
                TradeCalError::invalid_input(format!("{year:04}{month:02}{day:02} does not exist"))
            })
    }

    /// Parses a date from its canonical `YYYYMMDD` form.
    ///
    /// Exactly eight ASCII digits are required; surrounding whitespace is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns `TradeCalError::InvalidInput` if the string is malformed or
    /// names a day that does not exist.
    pub fn parse(s: &str) -> TradeCalResult<Self> {
        let trimmed = s.trim();
        if trimmed.len() != 8 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TradeCalError::invalid_date(s));
        }

        let year: i32 = trimmed[0..4]
            .parse()
            .map_err(|_| TradeCalError::invalid_date(s))?;
        let month: u32 = trimmed[4..6]
            .parse()
            .map_err(|_| TradeCalError::invalid_date(s))?;
        let day: u32 = trimmed[6..8]
            .parse()
            .map_err(|_| TradeCalError::invalid_date(s))?;

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| TradeCalError::invalid_date(s))
    }

    /// Parses a bhav-copy style date such as `24-Jun-2021`.
    ///
    /// The month abbreviation is matched case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns `TradeCalError::InvalidInput` if the string is malformed.
    pub fn parse_bhav_style(s: &str) -> TradeCalResult<Self> {
        let malformed = || TradeCalError::invalid_input(format!("'{s}' is not a DD-Mon-YYYY date"));

        let mut parts = s.trim().split('-');
        let (Some(day), Some(month), Some(year), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };

        let day: u32 = day.parse().map_err(|_| malformed())?;
        let year: i32 = year.parse().map_err(|_| malformed())?;
        let month = MONTH_ABBREVIATIONS
            .iter()
            .position(|abbr| abbr.eq_ignore_ascii_case(month))
            .ok_or_else(malformed)? as u32
            + 1;

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .filter(Date::is_representable)
            .ok_or_else(malformed)
    }

    /// Returns today's date in local time.
    #[must_use]
    pub fn today() -> Self {
        Date(chrono::Local::now().date_naive())
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the day of week.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Returns the English name of the day of week, e.g. `Thursday`.
    #[must_use]
    pub fn weekday_name(&self) -> &'static str {
        weekday_name(self.weekday())
    }

    /// Checks if the date is a Saturday or Sunday.
    #[must_use]
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Returns true if the date has a `YYYYMMDD` form (years 0000 to 9999).
    #[must_use]
    pub fn is_representable(&self) -> bool {
        (0..=9999).contains(&self.year())
    }

    /// Adds a number of calendar days to the date.
    ///
    /// Only for offsets known to stay within a few weeks of a representable
    /// date; use [`Date::checked_add_days`] for anything caller-supplied.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Adds calendar days, returning `None` if the result has no `YYYYMMDD` form.
    #[must_use]
    pub fn checked_add_days(&self, days: i64) -> Option<Self> {
        chrono::Duration::try_days(days)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Date)
            .filter(Date::is_representable)
    }

    /// Adds calendar days, failing at the `YYYYMMDD` range boundary.
    ///
    /// # Errors
    ///
    /// Returns `TradeCalError::InvalidInput` if the result is before
    /// `00000101` or after `99991231`.
    pub fn try_add_days(&self, days: i64) -> TradeCalResult<Self> {
        self.checked_add_days(days).ok_or_else(|| {
            TradeCalError::invalid_input(format!(
                "{days} days from {self} leaves the range 00000101..=99991231"
            ))
        })
    }

    /// Returns the following calendar day.
    pub fn next_day(&self) -> TradeCalResult<Self> {
        self.try_add_days(1)
    }

    /// Returns the preceding calendar day.
    pub fn prev_day(&self) -> TradeCalResult<Self> {
        self.try_add_days(-1)
    }

    /// Calculates the number of calendar days between two dates.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the first day of the month.
    #[must_use]
    pub fn start_of_month(&self) -> Self {
        Date(self.0.with_day(1).unwrap_or(self.0))
    }

    /// Returns the last day of the month.
    #[must_use]
    pub fn end_of_month(&self) -> Self {
        let (year, month) = next_month(self.year(), self.month());
        NaiveDate::from_ymd_opt(year, month, 1)
            .and_then(|first| first.pred_opt())
            .map_or(*self, Date)
    }

    /// Returns the first day of the following month.
    ///
    /// December rolls over into January of the next year.
    ///
    /// # Errors
    ///
    /// Returns `TradeCalError::InvalidInput` for December 9999.
    pub fn start_of_next_month(&self) -> TradeCalResult<Self> {
        self.end_of_month().next_day()
    }

    /// Formats the date in bhav-copy style, e.g. `24-Jun-2021`.
    #[must_use]
    pub fn to_bhav_style(&self) -> String {
        format!(
            "{:02}-{}-{:04}",
            self.day(),
            MONTH_ABBREVIATIONS[self.month0()],
            self.year()
        )
    }

    /// Formats the date as a midnight timestamp, e.g. `2021-06-24  00:00:00`.
    #[must_use]
    pub fn to_cl_timestamp(&self) -> String {
        format!("{}  00:00:00", self.0.format("%Y-%m-%d"))
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }

    fn month0(&self) -> usize {
        self.0.month0() as usize
    }
}

/// Returns the (year, month) following the given one.
pub(crate) fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y%m%d"))
    }
}

impl FromStr for Date {
    type Err = TradeCalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Date::parse(s)
    }
}

impl Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Date::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Add<i64> for Date {
    type Output = Self;

    /// Adds days to a date.
    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<i64> for Date {
    type Output = Self;

    /// Subtracts days from a date.
    fn sub(self, days: i64) -> Self::Output {
        self.add_days(-days)
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compact() {
        let date = Date::parse("20230301").unwrap();
        assert_eq!(date.year(), 2023);
        assert_eq!(date.month(), 3);
        assert_eq!(date.day(), 1);

        // Leading whitespace appears in hand-maintained holiday lists
        assert_eq!(Date::parse(" 20231102").unwrap().to_string(), "20231102");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(Date::parse("2023-03-01").is_err());
        assert!(Date::parse("2023031").is_err());
        assert!(Date::parse("202303011").is_err());
        assert!(Date::parse("20230230").is_err());
        assert!(Date::parse("20231301").is_err());
        assert!(Date::parse("").is_err());
        assert!(Date::parse("-1").unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_display_is_zero_padded() {
        let date = Date::from_ymd(2023, 1, 5).unwrap();
        assert_eq!(date.to_string(), "20230105");
    }

    #[test]
    fn test_ordering_matches_string_ordering() {
        let dates = ["20221231", "20230101", "20230110", "20230201"];
        for pair in dates.windows(2) {
            let a = Date::parse(pair[0]).unwrap();
            let b = Date::parse(pair[1]).unwrap();
            assert!(a < b);
            assert!(a.to_string() < b.to_string());
        }
    }

    #[test]
    fn test_next_prev_day() {
        let date = Date::parse("20231231").unwrap();
        assert_eq!(date.next_day().unwrap().to_string(), "20240101");
        assert_eq!(date.next_day().unwrap().prev_day().unwrap(), date);

        let leap = Date::parse("20240228").unwrap();
        assert_eq!(leap.next_day().unwrap().to_string(), "20240229");
    }

    #[test]
    fn test_stepping_stops_at_range_boundary() {
        let last = Date::parse("99991231").unwrap();
        assert!(last.next_day().unwrap_err().is_invalid_input());
        assert!(last.start_of_next_month().is_err());
        assert_eq!(last.prev_day().unwrap().to_string(), "99991230");

        let first = Date::parse("00000101").unwrap();
        assert!(first.prev_day().is_err());
        assert_eq!(first.next_day().unwrap().to_string(), "00000102");

        assert!(first.checked_add_days(i64::MAX).is_none());
        assert!(last.checked_add_days(i64::MIN).is_none());
        assert_eq!(
            last.checked_add_days(-365).map(|d| d.to_string()),
            Some("99981231".to_string())
        );
    }

    #[test]
    fn test_constructors_reject_five_digit_years() {
        assert!(Date::from_ymd(10000, 1, 1).is_err());
        assert!(Date::from_ymd(-1, 12, 31).is_err());
        assert!(Date::parse_bhav_style("01-Jan-10000").is_err());
    }

    #[test]
    fn test_weekday_name() {
        // 2023-03-02 was a Thursday
        assert_eq!(Date::parse("20230302").unwrap().weekday_name(), "Thursday");
        assert!(Date::parse("20230304").unwrap().is_weekend());
        assert!(!Date::parse("20230306").unwrap().is_weekend());
    }

    #[test]
    fn test_month_boundaries() {
        let date = Date::parse("20231215").unwrap();
        assert_eq!(date.start_of_month().to_string(), "20231201");
        assert_eq!(date.end_of_month().to_string(), "20231231");
        assert_eq!(date.start_of_next_month().unwrap().to_string(), "20240101");

        let feb = Date::parse("20240210").unwrap();
        assert_eq!(feb.end_of_month().to_string(), "20240229");
    }

    #[test]
    fn test_bhav_style() {
        let date = Date::parse("20210624").unwrap();
        assert_eq!(date.to_bhav_style(), "24-Jun-2021");
        assert_eq!(Date::parse_bhav_style("24-Jun-2021").unwrap(), date);
        assert_eq!(Date::parse_bhav_style("24-JUN-2021").unwrap(), date);
        assert_eq!(
            Date::parse_bhav_style("5-Jan-2022").unwrap().to_string(),
            "20220105"
        );
        assert!(Date::parse_bhav_style("24-Foo-2021").is_err());
        assert!(Date::parse_bhav_style("24-Jun").is_err());
    }

    #[test]
    fn test_cl_timestamp() {
        let date = Date::parse("20210624").unwrap();
        assert_eq!(date.to_cl_timestamp(), "2021-06-24  00:00:00");
    }

    #[test]
    fn test_date_arithmetic_operators() {
        let d1 = Date::parse("20230101").unwrap();
        let d2 = d1 + 10;
        assert_eq!(d2.day(), 11);
        assert_eq!((d2 - 5).day(), 6);
        assert_eq!(d2 - d1, 10);
    }

    #[test]
    fn test_serde() {
        let date = Date::parse("20230330").unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"20230330\"");
        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
        assert!(serde_json::from_str::<Date>("\"2023-03-30\"").is_err());
    }
}
