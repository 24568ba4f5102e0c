use crate::models::{AttendanceRecord, AttendanceStatus, AttendanceSummary};
use serde::Serialize;
use tracing::warn;

/// Raw status counts behind a summary.
///
/// `total` counts every record, including the `unknown` ones, and is the
/// denominator for all four percentages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusTally {
    pub present: usize,
    pub on_leave: usize,
    pub absent: usize,
    pub late: usize,
    pub unknown: usize,
    pub total: usize,
}

impl StatusTally {
    pub fn record(&mut self, status: &AttendanceStatus) {
        self.total += 1;
        match status {
            AttendanceStatus::Present => self.present += 1,
            AttendanceStatus::OnLeave => self.on_leave += 1,
            AttendanceStatus::Absent => self.absent += 1,
            AttendanceStatus::Late => self.late += 1,
            AttendanceStatus::Unknown(_) => self.unknown += 1,
        }
    }

    pub fn to_summary(&self) -> AttendanceSummary {
        AttendanceSummary {
            present: percentage(self.present, self.total),
            on_leave: percentage(self.on_leave, self.total),
            absent: percentage(self.absent, self.total),
            late: percentage(self.late, self.total),
        }
    }
}

/// Count statuses across `records`. Unknown codes are reported, not fatal.
pub fn tally<'a, I>(records: I) -> StatusTally
where
    I: IntoIterator<Item = &'a AttendanceRecord>,
{
    let mut counts = StatusTally::default();

    for record in records {
        if let AttendanceStatus::Unknown(code) = &record.status {
            warn!(
                record_id = record.id,
                code = %code,
                "unknown attendance status code, excluded from summary buckets"
            );
        }
        counts.record(&record.status);
    }

    counts
}

/// Percentage breakdown of `records`. An empty subset gives all zeros.
pub fn summarize<'a, I>(records: I) -> AttendanceSummary
where
    I: IntoIterator<Item = &'a AttendanceRecord>,
{
    tally(records).to_summary()
}

/// `count / total * 100` rounded half away from zero to 2 decimals.
///
/// Rounded in hundredths of a percent on integers, so exact midpoints such
/// as 23/160 = 14.375 are not lost to binary floating point.
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let (count, total) = (count as u128, total as u128);
    let hundredths = (count * 20_000 + total) / (2 * total);
    hundredths as f64 / 100.0
}
