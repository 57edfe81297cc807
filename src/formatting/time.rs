//! Timestamp labels for the forecast views
//!
//! Timestamps are epoch milliseconds. The caller picks the time zone so the
//! same reading renders consistently in tests and on device.

use chrono::{DateTime, TimeZone};
use std::fmt::Display;

fn to_datetime<Tz: TimeZone>(millis: i64, tz: &Tz) -> Option<DateTime<Tz>> {
    tz.timestamp_millis_opt(millis).single()
}

/// Heading for the current conditions card, e.g. `"Monday, Jan 05"`
pub fn format_day_heading<Tz>(millis: i64, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    to_datetime(millis, tz).map(|dt| dt.format("%A, %b %d").to_string())
}

/// Label for one slot of the hourly strip: `"3 PM"`, or `"15:00"` on a
/// 24-hour clock
pub fn format_hour_label<Tz>(millis: i64, tz: &Tz, use_24_hour_clock: bool) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let pattern = if use_24_hour_clock { "%H:%M" } else { "%-I %p" };
    to_datetime(millis, tz).map(|dt| dt.format(pattern).to_string())
}

/// Two-line label for a daily forecast tile, e.g. `"Mon\n05"`
pub fn format_day_tile<Tz>(millis: i64, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    to_datetime(millis, tz).map(|dt| dt.format("%a\n%d").to_string())
}
