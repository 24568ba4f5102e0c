#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use rattendance::models::{AttendanceRecord, AttendanceStatus};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME pointed at an isolated directory so a real
/// user configuration never leaks into the assertions.
pub fn rat(home: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("rattendance");
    cmd.env("HOME", home)
        .env("APPDATA", home)
        .env_remove("RUST_LOG");
    cmd
}

/// Create (or reset) a unique directory inside the system temp dir
pub fn temp_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp home");
    path.to_string_lossy().to_string()
}

/// Write a feed file inside the temp dir and return its path
pub fn write_feed(name: &str, ext: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_feed.{}", name, ext));
    fs::write(&path, content).expect("write feed");
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    day(y, m, d).and_hms_opt(h, min, 0).expect("valid time")
}

pub fn rec(id: u64, date: NaiveDate, code: &str) -> AttendanceRecord {
    AttendanceRecord::new(id, date, AttendanceStatus::from_code(code))
}

/// `n` records on consecutive ids, all dated `date`, cycling through P/L/A/O.
pub fn many(n: usize, date: NaiveDate) -> Vec<AttendanceRecord> {
    let codes = ["P", "L", "A", "O"];
    (0..n)
        .map(|i| rec(i as u64 + 1, date, codes[i % codes.len()]))
        .collect()
}

/// JSON feed for user 7 (three records) and user 9 (one record),
/// relative to a reference "now" of 2026-10-21.
pub const TEAM_FEED_JSON: &str = r#"[
  {"id": 1, "employee": 7, "date": "2026-10-21", "status": "P", "check_in_time": "2026-10-21T09:05:00Z", "check_out_time": "2026-10-21T17:35:00Z", "working_hours": "08:30:00"},
  {"id": 2, "employee": 7, "date": "2026-10-21", "status": "L", "check_in_time": "09:45", "check_out_time": null},
  {"id": 3, "employee": 7, "date": "2026-09-11", "status": "A", "check_in_time": null, "check_out_time": null},
  {"id": 4, "employee": 9, "date": "2026-10-20", "status": "O"}
]"#;
