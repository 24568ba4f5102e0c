use super::status::AttendanceStatus;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// One attendance entry as supplied by the record source.
/// Read-only for the engine: it is never mutated after the fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceRecord {
    pub id: u64,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub check_in_time: Option<NaiveTime>,
    pub check_out_time: Option<NaiveTime>,
}

impl AttendanceRecord {
    pub fn new(id: u64, date: NaiveDate, status: AttendanceStatus) -> Self {
        Self {
            id,
            date,
            status,
            check_in_time: None,
            check_out_time: None,
        }
    }

    pub fn with_times(mut self, check_in: Option<NaiveTime>, check_out: Option<NaiveTime>) -> Self {
        self.check_in_time = check_in;
        self.check_out_time = check_out;
        self
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Minutes between check-in and check-out.
    /// None when a time is missing or check-out precedes check-in.
    pub fn worked_minutes(&self) -> Option<i64> {
        let (start, end) = (self.check_in_time?, self.check_out_time?);
        let mins = (end - start).num_minutes();
        (mins >= 0).then_some(mins)
    }
}
