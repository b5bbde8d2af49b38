//! Property tests over the embedded NSE and B3 holiday tables.

use proptest::prelude::*;
use tradecal_core::expiry::MAX_PREV_EXPIRY_STEPS;
use tradecal_core::prelude::*;
use tradecal_core::range::{working_days_between, working_days_forward};

fn date_strategy() -> impl Strategy<Value = Date> {
    (2018i32..2025i32, 1u32..13u32, 1u32..32u32)
        .prop_filter_map("valid date", |(year, month, day)| {
            Date::from_ymd(year, month, day).ok()
        })
}

fn exchange_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["NSEFO", "NSECM", "BSECD", "B3FO", "b3", "CME"])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn next_working_day_is_later_and_working(d in date_strategy(), x in exchange_strategy()) {
        let cal = TradingCalendar::builtin();
        let next = cal.next_working_day(d, x).unwrap();
        prop_assert!(next > d);
        prop_assert!(cal.is_working_day(next, x));
        prop_assert!(!next.is_weekend());
    }

    #[test]
    fn prev_of_next_returns_working_day(d in date_strategy(), x in exchange_strategy()) {
        let cal = TradingCalendar::builtin();
        prop_assume!(cal.is_working_day(d, x));
        let next = cal.next_working_day(d, x).unwrap();
        prop_assert_eq!(cal.prev_working_day(next, x).unwrap(), d);
    }

    #[test]
    fn monthly_expiry_is_idempotent(d in date_strategy(), x in exchange_strategy()) {
        let cal = TradingCalendar::builtin();
        let expiry = cal.monthly_expiry(d, x, "Thursday").unwrap();
        prop_assert_eq!(cal.monthly_expiry(expiry, x, "Thursday").unwrap(), expiry);
        prop_assert!(cal.is_working_day(expiry, x));
    }

    #[test]
    fn weekly_expiry_never_after_monthly(d in date_strategy(), x in exchange_strategy()) {
        let cal = TradingCalendar::builtin();
        let weekly = cal.weekly_expiry(d, x, "Thursday").unwrap();
        let monthly = cal.monthly_expiry(d, x, "Thursday").unwrap();
        prop_assert!(weekly <= monthly);
        prop_assert!(cal.is_working_day(weekly, x));
    }

    #[test]
    fn prev_monthly_expiry_is_an_earlier_expiry(d in date_strategy(), x in exchange_strategy()) {
        let cal = TradingCalendar::builtin();
        let current = cal.monthly_expiry(d, x, "Thursday").unwrap();
        let prev = cal.prev_monthly_expiry(d, x).unwrap();
        prop_assert!(prev < current);
        prop_assert_eq!(cal.monthly_expiry(prev, x, "Thursday").unwrap(), prev);
        prop_assert!(current.days_between(&prev).abs() < i64::from(MAX_PREV_EXPIRY_STEPS) * 2);
    }

    #[test]
    fn implied_label_counts_at_most_five(d in date_strategy()) {
        let cal = TradingCalendar::builtin();
        let label = cal.implied_weekly_label(d).unwrap();
        let count: u32 = label.trim_start_matches("W.").parse().unwrap();
        prop_assert!(label.starts_with("W."));
        prop_assert!(count <= 5);
    }

    #[test]
    fn forward_run_is_ascending_working_days(
        d in date_strategy(),
        n in 0usize..40,
        x in exchange_strategy(),
    ) {
        let cal = TradingCalendar::builtin();
        let holidays = cal.calendar(x);
        let days = working_days_forward(holidays, d, n).unwrap();

        prop_assert_eq!(days.len(), n);
        prop_assert!(days.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(days.iter().all(|day| *day >= d && holidays.is_working_day(*day)));
    }

    #[test]
    fn window_stays_inside_bounds(
        start in date_strategy(),
        span in 0i64..60,
        x in exchange_strategy(),
    ) {
        let cal = TradingCalendar::builtin();
        let holidays = cal.calendar(x);
        let end = start.add_days(span);
        let days = working_days_between(holidays, start, end).unwrap();

        prop_assert!(days.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(days.iter().all(|day| *day >= start && *day < end));
        prop_assert!(days.iter().all(|day| holidays.is_working_day(*day)));
    }

    #[test]
    fn stepping_near_year_9999_stays_eight_digits(offset in 0i64..30) {
        let cal = TradingCalendar::builtin();
        let d = Date::parse("99991231").unwrap().add_days(-offset);
        match cal.next_working_day(d, "NSEFO") {
            Ok(next) => prop_assert_eq!(next.to_string().len(), 8),
            Err(e) => prop_assert!(e.is_invalid_input()),
        }
    }
}
