//! Date helpers for the Australian-timezone booking display.
//!
//! Day boundaries are taken from the Australia/Sydney calendar but encoded
//! at a fixed +10:00 offset: a calendar day's "midnight" is that day at
//! 14:00 UTC. The encoding ignores the +11:00 daylight-saving offset, so
//! the instant can be an hour off true local midnight during DST. Every
//! helper here builds on the same encoding, which keeps same-day checks,
//! week starts and night counts consistent with each other. Keep it that
//! way: "fixing" the offset would shift every dependent calculation.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Australia::Sydney;
use thiserror::Error;

const MS_PER_DAY: i64 = 86_400_000;

/// Hour of the UTC day that encodes AEST midnight (24 - 10).
const AEST_MIDNIGHT_UTC_HOUR: i64 = 14;

/// Error parsing a date-like string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    #[error("unrecognized date string: {0:?}")]
    Unrecognized(String),
}

/// Parse a date-like string into an instant.
///
/// Accepts RFC 3339 timestamps (offset-aware) and bare `YYYY-MM-DD` dates,
/// which resolve to midnight UTC.
pub fn to_date(s: &str) -> Result<DateTime<Utc>, DateParseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)));
    }
    Err(DateParseError::Unrecognized(s.to_string()))
}

/// Start of `d`'s Sydney calendar day, in the fixed +10:00 encoding
/// described in the module docs.
pub fn start_of_day_aest(d: DateTime<Utc>) -> DateTime<Utc> {
    let day = d.with_timezone(&Sydney).date_naive();
    Utc.from_utc_datetime(&day.and_time(NaiveTime::MIN)) + Duration::hours(AEST_MIDNIGHT_UTC_HOUR)
}

/// Offset `d` by exactly `days` × 86 400 000 ms. `days` may be negative.
pub fn add_days(d: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    d + Duration::milliseconds(days * MS_PER_DAY)
}

/// Start of day of the Monday on or before `d`'s AEST calendar day.
pub fn start_of_week_aest(d: DateTime<Utc>) -> DateTime<Utc> {
    let sod = start_of_day_aest(d);
    let dow = i64::from(sod.weekday().num_days_from_sunday()); // Sunday = 0
    let diff = if dow == 0 { -6 } else { 1 - dow };
    add_days(sod, diff)
}

/// Number of whole AEST calendar days between the two instants' start of
/// day. Zero unless `end`'s start of day is strictly after `start`'s.
pub fn nights_between(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let s = start_of_day_aest(start).timestamp_millis();
    let e = start_of_day_aest(end).timestamp_millis();
    if e <= s {
        return 0;
    }
    ((e - s) as f64 / MS_PER_DAY as f64).round() as i64
}

/// Start of the current AEST calendar day.
pub fn today_aest() -> DateTime<Utc> {
    start_of_day_aest(Utc::now())
}
