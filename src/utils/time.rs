//! Time utilities: RFC 3339 timestamps, due-time arithmetic and countdown
//! formatting.

use chrono::{DateTime, FixedOffset, Local};

/// Countdown shown when no due time exists or the target is unreadable.
pub const COUNTDOWN_UNKNOWN: &str = "--:--:--";

/// Countdown shown once the due time has been reached.
pub const COUNTDOWN_DUE: &str = "due now";

/// Current instant as RFC 3339 text with the local UTC offset.
/// The representation round-trips through [`parse_timestamp`] and the CSV
/// codec without precision loss.
pub fn now_timestamp() -> String {
    Local::now().to_rfc3339()
}

/// Parse an RFC 3339 timestamp, tolerating surrounding whitespace.
pub fn parse_timestamp(ts: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(ts.trim()).ok()
}

/// Offset `ts` forward by a (possibly fractional) number of hours.
/// Sub-second remainders are truncated so all arithmetic happens at
/// whole-second granularity. Returns `None` when `ts` does not parse.
pub fn add_hours(ts: &str, hours: f64) -> Option<String> {
    let dt = parse_timestamp(ts)?;
    let secs = (hours * 3600.0).trunc() as i64;
    Some((dt + chrono::Duration::seconds(secs)).to_rfc3339())
}

/// Render the remaining time until `target` as `HH:MM:SS`.
///
/// The hours field is not capped at 24: a 30-hour wait renders as
/// `30:00:00`. A target at or before `now` yields [`COUNTDOWN_DUE`]; an
/// absent or unparseable target yields [`COUNTDOWN_UNKNOWN`].
pub fn format_countdown(target: Option<&str>, now: DateTime<Local>) -> String {
    let Some(due) = target.and_then(parse_timestamp) else {
        return COUNTDOWN_UNKNOWN.to_string();
    };

    let secs = due.timestamp() - now.timestamp();
    if secs <= 0 {
        return COUNTDOWN_DUE.to_string();
    }

    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}
