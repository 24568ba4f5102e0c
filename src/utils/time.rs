//! Time utilities: parsing clock times from the feed, formatting them back.

use chrono::{DateTime, NaiveDateTime, NaiveTime};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Parse a check-in/check-out value.
///
/// The feed is not consistent: plain `HH:MM`, `HH:MM:SS` (optionally with
/// fractional seconds) and full RFC-3339 timestamps all occur. For
/// timestamps only the wall-clock time in their own offset is kept.
pub fn parse_clock_time(s: &str) -> Option<NaiveTime> {
    let s = s.trim();

    if let Some(t) = parse_time(s) {
        return Some(t);
    }
    if let Ok(t) = NaiveTime::parse_from_str(s, "%H:%M:%S%.f") {
        return Some(t);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.time());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.time());
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f")
        .ok()
        .map(|dt| dt.time())
}

/// `HH:MM`, or `--:--` when missing.
pub fn format_optional_time(t: Option<NaiveTime>) -> String {
    t.map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}
