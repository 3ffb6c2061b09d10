//! Prepare command: raw result sheet pre-cleaning.
//!
//! Raw exports place wind-reading columns at arbitrary positions. The
//! normalization core expects the wind reading as the trailing field, so
//! this pass rewrites every sheet whose header contains a `WIND` column,
//! moving all such columns to the end of each row. Sheets without a
//! wind column are left untouched.

use std::path::{Path, PathBuf};

use colored::Colorize;
use tracing::{debug, info, warn};

use crate::app::services::row_reader::discover_source_files;
use crate::cli::args::PrepareArgs;
use crate::cli::commands::shared::{self, RunStats};
use crate::config::DEFAULT_INPUT_DIR;
use crate::constants::WIND_COLUMN_KEYWORD;
use crate::{Error, Result};

/// Run the prepare command
pub async fn run_prepare(args: PrepareArgs) -> Result<RunStats> {
    args.validate()?;
    shared::setup_logging(args.get_log_level(), false)?;

    let input_path = args
        .input_path
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR));

    let start_time = std::time::Instant::now();
    let files = discover_source_files(&input_path)?;

    let mut stats = RunStats::default();
    let mut files_changed = 0;

    for file in &files {
        match reorder_wind_columns(&file.path) {
            Ok(changed) => {
                stats.files_processed += 1;
                if changed {
                    files_changed += 1;
                    info!("Reordered wind columns: {}", file.path.display());
                }
            }
            Err(e) => {
                warn!("Skipping unreadable file {}: {}", file.path.display(), e);
                stats.files_failed += 1;
            }
        }
    }

    stats.processing_time = start_time.elapsed();

    println!(
        "Prepared {} sheets, {} reordered, {} failed",
        stats.files_processed.to_string().green(),
        files_changed,
        stats.files_failed
    );

    Ok(stats)
}

/// Move all columns whose header contains `WIND` to the end of each row.
///
/// Returns `false` when the sheet has no wind column and was left as-is.
/// The rewrite goes through a temp file in the same directory so a crash
/// never leaves a half-written sheet behind.
pub fn reorder_wind_columns(path: &Path) -> Result<bool> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string();

    // Header row is data here, so read without header handling
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_path(path)
        .map_err(|e| Error::csv(&file_name, "failed to open result sheet", Some(e)))?;

    let mut rows: Vec<csv::StringRecord> = Vec::new();
    for record in reader.records() {
        rows.push(record.map_err(|e| Error::csv(&file_name, "failed to read row", Some(e)))?);
    }

    let Some(header) = rows.first() else {
        debug!("Empty sheet, nothing to prepare: {}", path.display());
        return Ok(false);
    };

    let mut wind_indices = Vec::new();
    let mut other_indices = Vec::new();
    for (i, column) in header.iter().enumerate() {
        if column.to_uppercase().contains(WIND_COLUMN_KEYWORD) {
            wind_indices.push(i);
        } else {
            other_indices.push(i);
        }
    }

    if wind_indices.is_empty() {
        return Ok(false);
    }

    let temp_path = path.with_extension("csv.tmp");
    {
        let mut writer = csv::Writer::from_path(&temp_path)
            .map_err(|e| Error::csv(&file_name, "failed to create temp sheet", Some(e)))?;

        for row in &rows {
            let mut reordered: Vec<&str> = Vec::with_capacity(row.len());
            for &i in &other_indices {
                reordered.push(row.get(i).unwrap_or(""));
            }
            for &i in &wind_indices {
                reordered.push(row.get(i).unwrap_or(""));
            }
            writer
                .write_record(&reordered)
                .map_err(|e| Error::csv(&file_name, "failed to write row", Some(e)))?;
        }

        writer
            .flush()
            .map_err(|e| Error::io("failed to flush temp sheet", e))?;
    }

    std::fs::rename(&temp_path, path)
        .map_err(|e| Error::io("failed to replace result sheet", e))?;

    Ok(true)
}
