use crate::core::classifier::belongs_to_window;
use crate::models::{AttendanceRecord, TimeWindow, WeekStart};
use chrono::NaiveDateTime;

/// Keep the records inside `window`, preserving their relative order.
pub fn filter_records<'a>(
    records: &'a [AttendanceRecord],
    window: TimeWindow,
    now: NaiveDateTime,
    week_start: WeekStart,
) -> Vec<&'a AttendanceRecord> {
    records
        .iter()
        .filter(|r| belongs_to_window(r.date, window, now, week_start))
        .collect()
}
