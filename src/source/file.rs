use super::RecordSource;
use super::row::SourceRow;
use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceRecord, RecordOwner};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// JSON feeds come either as a bare array or wrapped in the portal's
/// `{ "error", "message", "data" }` envelope. Any other object (e.g. a
/// `{"detail": ...}` auth failure) lands in the envelope without `data`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonFeed {
    Rows(Vec<SourceRow>),
    Envelope {
        #[serde(default)]
        error: bool,
        #[serde(default)]
        message: Option<String>,
        #[serde(default)]
        detail: Option<String>,
        #[serde(default)]
        data: Option<Vec<SourceRow>>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FeedFormat {
    Json,
    Csv,
}

/// Attendance feed read from a `.json` or `.csv` file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    fn format(&self) -> AppResult<FeedFormat> {
        let ext = self
            .path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(FeedFormat::Json),
            "csv" => Ok(FeedFormat::Csv),
            other => Err(self.unavailable(format!("unsupported feed format '{other}'"))),
        }
    }

    fn read_rows(&self) -> AppResult<Vec<SourceRow>> {
        let format = self.format()?;
        let content = fs::read_to_string(&self.path).map_err(|e| self.unavailable(e))?;

        match format {
            FeedFormat::Json => match serde_json::from_str::<JsonFeed>(&content) {
                Ok(JsonFeed::Rows(rows)) => Ok(rows),
                Ok(JsonFeed::Envelope {
                    error: false,
                    data: Some(rows),
                    ..
                }) => Ok(rows),
                Ok(JsonFeed::Envelope {
                    message, detail, ..
                }) => {
                    let reason = message
                        .filter(|m| !m.trim().is_empty())
                        .or(detail)
                        .unwrap_or_else(|| "response carries no attendance data".to_string());
                    Err(self.unavailable(reason))
                }
                Err(e) => Err(self.unavailable(e)),
            },
            FeedFormat::Csv => {
                let mut reader = csv::ReaderBuilder::new()
                    .trim(csv::Trim::All)
                    .from_reader(content.as_bytes());

                reader
                    .deserialize::<SourceRow>()
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|e| self.unavailable(e))
            }
        }
    }

    fn unavailable<E: std::fmt::Display>(&self, reason: E) -> AppError {
        AppError::SourceUnavailable(format!("{}: {}", self.path.display(), reason))
    }
}

impl RecordSource for FileSource {
    fn fetch(&self, owner: &RecordOwner) -> AppResult<Vec<AttendanceRecord>> {
        let rows = self.read_rows()?;
        let total = rows.len();

        let records = rows
            .into_iter()
            .filter(|row| row.belongs_to(owner))
            .map(SourceRow::into_record)
            .collect::<AppResult<Vec<_>>>()
            .map_err(|e| self.unavailable(e))?;

        debug!(
            path = %self.path.display(),
            rows = total,
            kept = records.len(),
            owner = %owner,
            "attendance feed loaded"
        );

        Ok(records)
    }
}
