use chrono::{Days, NaiveDate};

/// Length of the trailing window, in calendar days
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Start of the trailing window: `today` at start of day, minus `window_days`.
pub fn cutoff_for(today: NaiveDate, window_days: u32) -> NaiveDate {
    today
        .checked_sub_days(Days::new(u64::from(window_days)))
        .unwrap_or(NaiveDate::MIN)
}

/// A trade counts only when dated strictly after the cutoff day.
pub fn is_within_window(trade_date: NaiveDate, cutoff: NaiveDate) -> bool {
    trade_date > cutoff
}
