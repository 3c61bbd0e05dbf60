//! Days-since arithmetic for habit display.
//!
//! # Invariants
//! - Counts whole calendar days; partial days never round up.
//! - `1` is the only singular count.

use chrono::NaiveDate;

/// Whole calendar days from `start` to `today`, never negative.
pub fn days_since(start: NaiveDate, today: NaiveDate) -> i64 {
    (today - start).num_days().max(0)
}

/// Renders a day count as `1 day` or `N days`.
pub fn format_days(days: i64) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{days} days")
    }
}
