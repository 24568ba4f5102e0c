// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{write_csv, write_json};
use crate::export::model::ViewExport;
use crate::export::{ExportFormat, notify_export_success};
use crate::ui::messages::info;
use crate::utils::path::{expand_tilde, is_absolute};
use std::fs::File;
use std::io::BufWriter;
use tracing::debug;

pub struct ExportLogic;

impl ExportLogic {
    /// Write `view` to `file` in `format`.
    ///
    /// The path must be absolute; an existing file is only replaced with
    /// `force` or after confirmation.
    pub fn export(view: &ViewExport, format: ExportFormat, file: &str, force: bool) -> AppResult<()> {
        if !is_absolute(file) {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let path = expand_tilde(file);
        ensure_writable(&path, force)?;

        info(format!(
            "Exporting to {}: {}",
            format.as_str().to_uppercase(),
            path.display()
        ));

        let out = BufWriter::new(File::create(&path)?);
        match format {
            ExportFormat::Json => write_json(view, out)?,
            ExportFormat::Csv => write_csv(&view.records, out)?,
        }

        debug!(path = %path.display(), records = view.records.len(), "export written");
        notify_export_success(&format.as_str().to_uppercase(), &path);
        Ok(())
    }
}
