//! Time calculations for listing publication windows.

use chrono::{Duration, NaiveDateTime, Utc};

/// Current time as a naive UTC timestamp, the representation stored in every table
pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// Furthest a publication may be scheduled ahead of now
pub const MAX_SCHEDULE_AHEAD_DAYS: i64 = 365;

/// Resolves when a publication starts and ends.
///
/// A missing or past `requested_start` publishes immediately.
///
/// # Arguments
/// - `requested_start` - Optional start requested by the company
/// - `duration_days` - Duration of the tier the listing is published under
/// - `now` - Current time
///
/// # Returns
/// - `Some((starts_at, ends_at))` - `ends_at` is `starts_at` plus the tier duration
/// - `None` - Start lies more than [`MAX_SCHEDULE_AHEAD_DAYS`] ahead, or the end is not
///   representable
pub fn publication_window(
    requested_start: Option<NaiveDateTime>,
    duration_days: i32,
    now: NaiveDateTime,
) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let starts_at = requested_start
        .filter(|start| *start > now)
        .unwrap_or(now);

    let latest_start = now.checked_add_signed(Duration::days(MAX_SCHEDULE_AHEAD_DAYS))?;
    if starts_at > latest_start {
        return None;
    }

    let ends_at = starts_at.checked_add_signed(Duration::days(duration_days.into()))?;

    Some((starts_at, ends_at))
}
