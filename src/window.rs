//! Which dates a single request asks the upstream for.
//!
//! The window always starts today and runs, one day at a time, through the
//! upcoming Sunday. Weekdays count from Sunday = 0, so on a Sunday the
//! upcoming Sunday is a week away. Saturdays skip the nearly empty tail of
//! the week and run through the Sunday after next (eight days ahead).

use chrono::{Datelike, NaiveDate};

const SATURDAY_SPAN: i64 = 8;

/// Number of days between `today` and the last day of its window.
fn days_to_window_end(today: NaiveDate) -> i64 {
    match today.weekday().num_days_from_sunday() {
        6 => SATURDAY_SPAN,
        weekday => 7 - i64::from(weekday),
    }
}

pub fn date_iter(start: NaiveDate, count: i64) -> impl Iterator<Item = NaiveDate> {
    (0..count).map(move |x| start + chrono::Duration::days(x))
}

/// Dates to query for `today`, in chronological order. Never empty.
pub fn menu_window(today: NaiveDate) -> Vec<NaiveDate> {
    date_iter(today, days_to_window_end(today) + 1).collect()
}
