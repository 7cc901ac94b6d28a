//! Time utilities for trailing windows and report timestamps

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};

/// Seconds in a day (24 × 60 × 60 = 86400)
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Seconds in a week (7 × 24 × 60 × 60 = 604800)
pub const SECONDS_PER_WEEK: i64 = 7 * SECONDS_PER_DAY;

/// Seconds in the 30-day month window (2592000)
pub const SECONDS_PER_MONTH: i64 = 30 * SECONDS_PER_DAY;

/// Format a unix timestamp as RFC 3339 in UTC
///
/// Returns the epoch for timestamps outside chrono's range.
///
/// # Examples
/// ```
/// use lnd_balance_report::utils::time::timestamp_to_rfc3339;
/// assert_eq!(timestamp_to_rfc3339(0), "1970-01-01T00:00:00Z");
/// assert_eq!(timestamp_to_rfc3339(1704067200), "2024-01-01T00:00:00Z");
/// ```
pub fn timestamp_to_rfc3339(timestamp: i64) -> String {
    Utc.timestamp_opt(timestamp, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
        .to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Current wall-clock time as unix seconds
pub fn now_unix() -> i64 {
    Utc::now().timestamp()
}
