use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parse a reference "now" given on the command line.
///
/// Accepts:
/// - YYYY-MM-DD              (taken at midnight)
/// - YYYY-MM-DDTHH:MM[:SS]
/// - YYYY-MM-DD HH:MM[:SS]
pub fn parse_reference_now(s: &str) -> AppResult<NaiveDateTime> {
    let s = s.trim();

    if let Some(d) = parse_date(s) {
        return Ok(d.and_time(NaiveTime::default()));
    }

    for fmt in [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }

    Err(AppError::InvalidDate(s.to_string()))
}

pub fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}
