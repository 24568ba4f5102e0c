//! Formatting utilities used for CLI and export outputs.

use crate::models::AttendanceStatus;
use crate::utils::colors::{GREEN, GREY, MAGENTA, RED, YELLOW};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 && want_sign {
        "-"
    } else {
        ""
    };

    if short {
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// `50.00%`
pub fn format_pct(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Human label and ANSI colour for a status, matching the portal's palette
/// (green present, yellow on leave, red absent, purple late).
pub fn describe_status(status: &AttendanceStatus) -> (String, &'static str) {
    match status {
        AttendanceStatus::Present => ("Present".into(), GREEN),
        AttendanceStatus::OnLeave => ("On Leave".into(), YELLOW),
        AttendanceStatus::Absent => ("Absent".into(), RED),
        AttendanceStatus::Late => ("Late".into(), MAGENTA),
        AttendanceStatus::Unknown(code) => (format!("Unknown ({code})"), GREY),
    }
}
