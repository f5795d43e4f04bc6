//! Renewal date arithmetic.

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};

use crate::core::constants::{REMINDER_UTC_OFFSET_HOURS, RENEWAL_THRESHOLDS};

/// Calendar date at `now` in the fixed UTC+8 reminder timezone.
pub fn today(now: DateTime<Utc>) -> NaiveDate {
    (now + TimeDelta::hours(REMINDER_UTC_OFFSET_HOURS)).date_naive()
}

/// Whole days from `today` until `next_date`. Negative once the date passed.
pub fn days_left(next_date: NaiveDate, today: NaiveDate) -> i64 {
    (next_date - today).num_days()
}

/// Whether a subscription `days` away from its charge should be reminded.
pub fn is_renewal_threshold(days: i64) -> bool {
    RENEWAL_THRESHOLDS.contains(&days)
}
