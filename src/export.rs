//! Spreadsheet export
//!
//! Writes the `Frame Name` / `Status` columns of a collection to a fresh,
//! timestamped file. Store-assigned ids are never exported.

use crate::error::ApiError;
use crate::frame::{Collection, Frame};
use chrono::{DateTime, Local};
use rust_xlsxwriter::{Format, Workbook};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

pub const EXPORT_HEADERS: [&str; 2] = ["Frame Name", "Status"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Xlsx,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "xlsx" => Ok(ExportFormat::Xlsx),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(ApiError::Export(format!(
                "unsupported export format '{}' (must be 'xlsx' or 'csv')",
                other
            ))),
        }
    }
}

/// `<dir>/<collection>_<YYYYmmdd_HHMMSS>.<ext>`, with `_1`, `_2`, ... appended
/// when a file of that name already exists.
pub fn export_path(
    dir: &Path,
    collection: Collection,
    format: ExportFormat,
    timestamp: DateTime<Local>,
) -> PathBuf {
    let stem = format!("{}_{}", collection.as_str(), timestamp.format("%Y%m%d_%H%M%S"));
    let ext = format.extension();
    let mut candidate = dir.join(format!("{}.{}", stem, ext));
    let mut n = 1;
    while candidate.exists() {
        candidate = dir.join(format!("{}_{}.{}", stem, n, ext));
        n += 1;
    }
    candidate
}

/// Write `frames` to a new export file under `dir` and return its path.
pub fn write_export(
    frames: &[Frame],
    collection: Collection,
    dir: &Path,
    format: ExportFormat,
    timestamp: DateTime<Local>,
) -> Result<PathBuf, ApiError> {
    std::fs::create_dir_all(dir).map_err(|e| {
        ApiError::Export(format!(
            "Failed to create export directory {}: {}",
            dir.display(),
            e
        ))
    })?;
    let path = export_path(dir, collection, format, timestamp);

    match format {
        ExportFormat::Xlsx => write_xlsx(frames, collection, &path)?,
        ExportFormat::Csv => std::fs::write(&path, to_csv(frames)).map_err(|e| {
            ApiError::Export(format!("Failed to write {}: {}", path.display(), e))
        })?,
    }

    info!(
        collection = %collection,
        rows = frames.len(),
        path = %path.display(),
        "Exported frames"
    );
    Ok(path)
}

/// Header row plus one line per frame; values containing commas, quotes or
/// newlines are quoted with inner quotes doubled.
pub fn to_csv(frames: &[Frame]) -> String {
    let mut out = EXPORT_HEADERS.join(",");
    out.push('\n');
    for frame in frames {
        out.push_str(&escape_csv(&frame.name));
        out.push(',');
        out.push_str(frame.status.as_str());
        out.push('\n');
    }
    out
}

fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn write_xlsx(frames: &[Frame], collection: Collection, path: &Path) -> Result<(), ApiError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(collection.sheet_name())?;

    for (col, title) in EXPORT_HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *title, &header)?;
    }
    for (i, frame) in frames.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet.write_string(row, 0, &frame.name)?;
        worksheet.write_string(row, 1, frame.status.as_str())?;
    }
    worksheet.set_column_width(0, 32)?;
    worksheet.set_column_width(1, 12)?;

    workbook.save(path)?;
    Ok(())
}
