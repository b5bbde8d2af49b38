//! Embedded exchange holiday tables.
//!
//! These are the tables the built-in registry is constructed from. Extra
//! years or corrections go in a registry configuration file rather than here.

use super::HolidayCalendar;
use crate::types::Date;

/// Name of the default multi-market table (NSE/BSE segments).
pub const NSE_TABLE: &str = "NSE";

/// Name of the Brazilian B3 table.
pub const B3_TABLE: &str = "B3";

/// NSE/BSE trading holidays, 2019 to 2023.
pub(crate) const NSE_HOLIDAYS: &[&str] = &[
    // 2019
    "20190304", "20190321", "20190417", "20190419", "20190429", "20190501", "20190605",
    "20190812", "20190815", "20190902", "20190910", "20191002", "20191008", "20191021",
    "20191028", "20191112", "20191202", "20191203", "20191206", "20191225",
    // 2020
    "20200221", "20200310", "20200313", "20200402", "20200406", "20200410", "20200414",
    "20200501", "20200525", "20200602", "20201002", "20201116", "20201130", "20201225",
    // 2021
    "20210126", "20210311", "20210329", "20210402", "20210414", "20210421", "20210513",
    "20210721", "20210819", "20210910", "20211015", "20211105", "20211119",
    // 2022
    "20220126", "20220301", "20220318", "20220414", "20220415", "20220503", "20220809",
    "20220815", "20220831", "20220912", "20220913", "20220923", "20220926", "20221005",
    "20221024", "20221026", "20221108",
    // 2023
    "20230126", "20230307", "20230404", "20230407", "20230414", "20230501", "20230628",
    "20230815", "20230919", "20231002", "20231024", "20231114", "20231127", "20231225",
];

/// B3 (Brazil) trading holidays, 2022 to 2023.
pub(crate) const B3_HOLIDAYS: &[&str] = &[
    // 2022
    "20220101", "20220228", "20220301", "20220302", "20220415", "20220421", "20220616",
    "20220907", "20221012", "20221102", "20221115", "20221230",
    // 2023
    "20230220", "20230221", "20230407", "20230421", "20230501", "20230608", "20230907",
    "20231012", "20231102", "20231115", "20231225", "20231229",
];

/// Builds the calendar for an embedded table.
pub(crate) fn builtin_calendar(name: &str, holidays: &[&str]) -> HolidayCalendar {
    HolidayCalendar::from_dates(name, holidays.iter().filter_map(|s| Date::parse(s).ok()))
}
