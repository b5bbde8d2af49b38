//! # Tradecal Core
//!
//! Exchange trading-calendar engine: working days, derivative expiry dates
//! and working-day range generation over exchange holiday tables.
//!
//! - **Types**: `Date` with canonical `YYYYMMDD` text form, weekday names
//! - **Calendars**: the `Calendar` trait, holiday tables and the exchange registry
//! - **Expiry**: weekly/monthly expiries and the `TradingCalendar` engine
//! - **Range**: working-day sequences between dates or by count
//!
//! ## Example
//!
//! ```rust
//! use tradecal_core::prelude::*;
//!
//! let cal = TradingCalendar::builtin();
//! let date = Date::parse("20230301").unwrap();
//!
//! assert!(cal.is_working_day(date, "NSEFO"));
//! assert_eq!(cal.monthly_expiry(date, "NSEFO", "Thursday").unwrap().to_string(), "20230330");
//!
//! // Unknown exchanges use the default holiday table
//! assert_eq!(cal.next_working_day(date, "CME"), cal.next_working_day(date, "NSEFO"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::redundant_closure_for_method_calls)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::cast_possible_truncation)]

pub mod calendars;
pub mod error;
pub mod expiry;
pub mod range;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{
        Calendar, CalendarRegistry, Exchange, HolidayCalendar, RegistryConfig, TableConfig,
    };
    pub use crate::error::{TradeCalError, TradeCalResult};
    pub use crate::expiry::{Expiry, ExpiryKind, TradingCalendar};
    pub use crate::range::{WorkingDaysQuery, NOT_PROVIDED};
    pub use crate::types::{parse_weekday, Date, DEFAULT_EXPIRY_WEEKDAY};
}

// Re-export commonly used types at crate root
pub use error::{TradeCalError, TradeCalResult};
pub use expiry::TradingCalendar;
pub use types::Date;
