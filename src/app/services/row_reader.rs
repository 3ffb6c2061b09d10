//! Row source for prepared result sheets.
//!
//! Discovers `*.csv` result sheets under the two category folders of the
//! data directory and reads their data rows into [`RawRow`] values. This
//! is a thin I/O wrapper around the normalization core: malformed or
//! unreadable files are surfaced as errors here so the caller can report
//! and skip them, and the core never sees them.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::app::models::RawRow;
use crate::constants::{CSV_EXTENSION, GENDER_FOLDERS};
use crate::{Error, Result};

/// One discovered result sheet with its category context
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    /// File name component, e.g. `100m.csv`
    pub file_name: String,
    /// Category folder the file was found under, e.g. `men`
    pub gender_folder: String,
}

/// Discover result sheets under the category folders of the data directory.
///
/// Only the configured gender folders are scanned; files are sorted per
/// folder for a deterministic processing order. A missing folder is
/// logged and skipped, but a missing data directory is an error.
pub fn discover_source_files(data_dir: &Path) -> Result<Vec<SourceFile>> {
    if !data_dir.is_dir() {
        return Err(Error::data_dir_not_found(data_dir));
    }

    let mut files = Vec::new();

    for folder in GENDER_FOLDERS {
        let folder_path = data_dir.join(folder);
        if !folder_path.is_dir() {
            warn!("Category folder missing, skipping: {}", folder_path.display());
            continue;
        }

        let mut folder_files = Vec::new();
        for entry in WalkDir::new(&folder_path)
            .follow_links(false)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && has_csv_extension(path) {
                let file_name = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or_default()
                    .to_string();
                folder_files.push(SourceFile {
                    path: path.to_path_buf(),
                    file_name,
                    gender_folder: folder.to_string(),
                });
            }
        }

        folder_files.sort_by(|a, b| a.path.cmp(&b.path));
        files.extend(folder_files);
    }

    debug!(
        "Discovered {} result sheets in {}",
        files.len(),
        data_dir.display()
    );

    Ok(files)
}

/// Read the data rows of one result sheet, skipping the header row.
///
/// Short rows are tolerated (missing trailing fields become empty/absent
/// in the [`RawRow`]); any CSV-level error makes the whole file
/// unreadable and is returned for the caller to report and skip.
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string();

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_path(path)
        .map_err(|e| Error::csv(&file_name, "failed to open result sheet", Some(e)))?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record =
            record.map_err(|e| Error::csv(&file_name, "failed to read row", Some(e)))?;
        rows.push(RawRow::from_record(&record));
    }

    Ok(rows)
}

fn has_csv_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(CSV_EXTENSION))
}
