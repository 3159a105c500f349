//! Cycle scheduling
//!
//! A cycle runs every `update_interval_minutes` and additionally at a fixed
//! wall-clock time each day, so the date in the header flips promptly.

use chrono::{Duration, NaiveDateTime, NaiveTime};

/// When the next cycle is due.
///
/// The earlier of `last_run + interval` and the first occurrence of
/// `daily_at` strictly after `last_run`. A time already in the past (the
/// previous cycle overran) is clamped to `now`.
pub fn next_due(
    now: NaiveDateTime,
    last_run: NaiveDateTime,
    interval: Duration,
    daily_at: NaiveTime,
) -> NaiveDateTime {
    let by_interval = last_run + interval;

    let mut by_clock = last_run.date().and_time(daily_at);
    if by_clock <= last_run {
        by_clock += Duration::days(1);
    }

    by_interval.min(by_clock).max(now)
}
