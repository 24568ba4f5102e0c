//! Configuration file consistency checks.

use crate::errors::{AppError, AppResult};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Every key a complete configuration file carries.
pub const EXPECTED_FIELDS: [&str; 7] = [
    "source",
    "user_id",
    "page_size",
    "default_window",
    "week_start",
    "summary_scope",
    "color",
];

/// Keys from `EXPECTED_FIELDS` absent from the YAML file at `path`.
/// Missing keys fall back to defaults on load; this only reports them.
pub fn missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let yaml: Value = serde_yaml::from_str(&content)?;

    let map = yaml
        .as_mapping()
        .ok_or_else(|| AppError::Config(format!("{}: not a YAML mapping", path.display())))?;

    Ok(EXPECTED_FIELDS
        .iter()
        .copied()
        .filter(|field| !map.contains_key(*field))
        .collect())
}
