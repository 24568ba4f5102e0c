// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::model::{RecordExport, ViewExport, get_headers};
use std::io::Write;

/// Write the whole view as pretty-printed JSON.
pub fn write_json<W: Write>(view: &ViewExport, mut out: W) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut out, view)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

/// Write the page records as CSV. The header is always present, even for
/// an empty page.
pub fn write_csv<W: Write>(records: &[RecordExport], out: W) -> AppResult<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(out);

    wtr.write_record(get_headers())?;
    for item in records {
        wtr.serialize(item)?;
    }

    wtr.flush()?;
    Ok(())
}
