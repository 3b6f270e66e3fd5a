use std::fmt::Write;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::core::SessionRecord;
use crate::error::AppError;
use crate::output::format::{HourStyle, format_duration};

const CSV_HEADER: &str = "Workspace,Date,Duration,Start Time,End Time";

fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Render records as CSV, one row per record in the given order
pub(crate) fn export_csv(records: &[SessionRecord]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');

    for r in records {
        let _ = writeln!(
            out,
            "{},{},{},{},{}",
            csv_escape(&r.workspace),
            csv_escape(&r.date),
            format_duration(r.duration, HourStyle::TwoDigit),
            csv_escape(&r.start_time),
            csv_escape(&r.end_time),
        );
    }

    out
}

/// Write the CSV rendering of `records` to `path`, returning the row count
pub(crate) fn write_csv(path: &Path, records: &[SessionRecord]) -> Result<usize, AppError> {
    fs::write(path, export_csv(records)).map_err(|source| AppError::Export {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), rows = records.len(), "exported CSV");
    Ok(records.len())
}
