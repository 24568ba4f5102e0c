use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceRecord, AttendanceStatus, RecordOwner};
use crate::utils::{date, time};
use serde::Deserialize;

/// Raw row as found in a JSON or CSV feed.
/// Extra columns (working hours, out-of-sight time, ...) are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct SourceRow {
    pub id: u64,
    #[serde(default)]
    pub employee: Option<u64>,
    pub date: String,
    pub status: AttendanceStatus,
    #[serde(default)]
    pub check_in_time: Option<String>,
    #[serde(default)]
    pub check_out_time: Option<String>,
}

impl SourceRow {
    /// Rows without an `employee` column belong to whoever is asking.
    pub fn belongs_to(&self, owner: &RecordOwner) -> bool {
        self.employee.is_none_or(|e| e == owner.user_id())
    }

    pub fn into_record(self) -> AppResult<AttendanceRecord> {
        let day = date::parse_date(self.date.trim())
            .ok_or_else(|| AppError::InvalidDate(format!("{} (record {})", self.date, self.id)))?;

        let check_in = parse_optional(self.check_in_time.as_deref(), self.id)?;
        let check_out = parse_optional(self.check_out_time.as_deref(), self.id)?;

        Ok(
            AttendanceRecord::new(self.id, day, self.status)
                .with_times(check_in, check_out),
        )
    }
}

fn parse_optional(raw: Option<&str>, id: u64) -> AppResult<Option<chrono::NaiveTime>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => time::parse_clock_time(s)
            .map(Some)
            .ok_or_else(|| AppError::InvalidTime(format!("{s} (record {id})"))),
    }
}
