use super::RecordSource;
use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceRecord, RecordOwner};
use std::collections::HashMap;

/// In-process record source keyed by user id.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    by_user: HashMap<u64, Vec<AttendanceRecord>>,
    failure: Option<String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source whose every fetch fails with `reason`.
    pub fn unavailable<S: Into<String>>(reason: S) -> Self {
        Self {
            by_user: HashMap::new(),
            failure: Some(reason.into()),
        }
    }

    /// Replace the records held for `user_id`.
    pub fn insert(&mut self, user_id: u64, records: Vec<AttendanceRecord>) {
        self.by_user.insert(user_id, records);
    }

    pub fn with_records(mut self, user_id: u64, records: Vec<AttendanceRecord>) -> Self {
        self.insert(user_id, records);
        self
    }
}

impl RecordSource for MemorySource {
    fn fetch(&self, owner: &RecordOwner) -> AppResult<Vec<AttendanceRecord>> {
        if let Some(reason) = &self.failure {
            return Err(AppError::SourceUnavailable(reason.clone()));
        }

        Ok(self
            .by_user
            .get(&owner.user_id())
            .cloned()
            .unwrap_or_default())
    }
}
