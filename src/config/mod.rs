use crate::core::ViewSettings;
use crate::errors::{AppError, AppResult};
use crate::models::{DEFAULT_PAGE_SIZE, SummaryScope, TimeWindow, WeekStart};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod check;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Attendance feed (.json or .csv)
    #[serde(default = "default_source")]
    pub source: String,
    /// Id of the logged-in user, used for "my attendance"
    #[serde(default = "default_user_id")]
    pub user_id: u64,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default)]
    pub default_window: TimeWindow,
    #[serde(default)]
    pub week_start: WeekStart,
    #[serde(default)]
    pub summary_scope: SummaryScope,
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_source() -> String {
    Config::config_dir()
        .join("attendance.json")
        .to_string_lossy()
        .to_string()
}
fn default_user_id() -> u64 {
    1
}
fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}
fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: default_source(),
            user_id: default_user_id(),
            page_size: default_page_size(),
            default_window: TimeWindow::default(),
            week_start: WeekStart::default(),
            summary_scope: SummaryScope::default(),
            color: default_color(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rattendance")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rattendance")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rattendance.conf")
    }

    /// Load configuration from the standard file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.page_size == 0 {
            return Err(AppError::InvalidPageSize(self.page_size));
        }
        Ok(())
    }

    /// Feed path with `~/` expanded.
    pub fn source_path(&self) -> PathBuf {
        expand_tilde(&self.source)
    }

    pub fn view_settings(&self) -> ViewSettings {
        ViewSettings {
            page_size: self.page_size,
            week_start: self.week_start,
            scope: self.summary_scope,
        }
    }

    /// Create the configuration directory and write a default config file.
    /// In test mode nothing is written; the target path is still returned.
    pub fn init_all(is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        let path = Self::config_file();

        if is_test {
            return Ok(path);
        }

        fs::create_dir_all(&dir)?;

        if path.exists() {
            return Ok(path);
        }

        let yaml = serde_yaml::to_string(&Config::default())?;
        fs::write(&path, yaml).map_err(|_| AppError::ConfigSave)?;

        Ok(path)
    }
}
