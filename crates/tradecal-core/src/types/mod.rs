//! Domain types for trading-calendar calculations.
//!
//! - [`Date`]: calendar date with canonical `YYYYMMDD` text form
//! - [`parse_weekday`] / [`weekday_name`]: English weekday names

mod date;
mod weekday;

pub use date::Date;
pub use weekday::{parse_weekday, weekday_name, DEFAULT_EXPIRY_WEEKDAY};
