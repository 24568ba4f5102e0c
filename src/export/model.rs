// src/export/model.rs

use crate::core::{StatusTally, ViewState};
use crate::models::{AttendanceRecord, AttendanceSummary, RecordOwner, SummaryScope, TimeWindow};
use crate::utils::time::format_optional_time;
use serde::Serialize;

/// Flat record row for CSV / JSON.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RecordExport {
    pub id: u64,
    pub date: String,
    pub status: String,
    pub status_label: String,
    pub check_in_time: String,
    pub check_out_time: String,
    pub worked_minutes: Option<i64>,
}

impl From<&AttendanceRecord> for RecordExport {
    fn from(r: &AttendanceRecord) -> Self {
        Self {
            id: r.id,
            date: r.date_str(),
            status: r.status.code().to_string(),
            status_label: r.status.label().to_string(),
            check_in_time: opt_time(r.check_in_time),
            check_out_time: opt_time(r.check_out_time),
            worked_minutes: r.worked_minutes(),
        }
    }
}

fn opt_time(t: Option<chrono::NaiveTime>) -> String {
    if t.is_some() {
        format_optional_time(t)
    } else {
        String::new()
    }
}

/// Whole view as written to JSON.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ViewExport {
    pub owner: RecordOwner,
    pub window: TimeWindow,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
    pub scope: SummaryScope,
    pub summary: AttendanceSummary,
    pub tally: StatusTally,
    pub no_records: bool,
    pub records: Vec<RecordExport>,
}

impl ViewExport {
    pub fn new(owner: RecordOwner, state: &ViewState) -> Self {
        Self {
            owner,
            window: state.window,
            page: state.page,
            page_size: state.page_size,
            total_pages: state.total_pages,
            filtered_count: state.filtered_count,
            scope: state.scope,
            summary: state.summary,
            tally: state.tally,
            no_records: state.no_records,
            records: state.page_slice.iter().map(RecordExport::from).collect(),
        }
    }
}

/// Header per CSV
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id",
        "date",
        "status",
        "status_label",
        "check_in_time",
        "check_out_time",
        "worked_minutes",
    ]
}
