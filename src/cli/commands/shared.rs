//! Shared components for CLI commands
//!
//! This module contains common types, utilities, and functions used across
//! multiple CLI command implementations: run-level statistics, logging
//! setup and progress bar styling.

use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::Result;
use crate::app::services::normalizer::FileStats;

/// Aggregate statistics for one run, reported across all commands
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Number of result sheets processed
    pub files_processed: usize,
    /// Number of result sheets skipped as unreadable
    pub files_failed: usize,
    /// Number of documents handed to the index sink
    pub documents_indexed: usize,
    /// Number of rows rejected with field-parse failures
    pub rows_failed: usize,
    /// Total processing time
    pub processing_time: std::time::Duration,
    /// Per-file statistics for diagnostics
    pub file_stats: Vec<FileStats>,
}

impl RunStats {
    /// Total number of data rows seen across all files
    pub fn rows_total(&self) -> usize {
        self.file_stats.iter().map(|s| s.rows_total).sum()
    }

    /// Calculate row success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        let total = self.rows_total();
        if total == 0 {
            0.0
        } else {
            (self.documents_indexed as f64 / total as f64) * 100.0
        }
    }

    /// Calculate files processed per second
    pub fn files_per_second(&self) -> f64 {
        if self.processing_time.as_secs_f64() > 0.0 {
            self.files_processed as f64 / self.processing_time.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Set up structured logging for a command, given its resolved level.
///
/// Safe to call once per process; later calls are ignored so tests can
/// exercise commands repeatedly.
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("athletics_normalizer={}", log_level)));

    let result = if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    if result.is_ok() {
        debug!("Logging initialized at level: {}", log_level);
    }
    Ok(())
}

/// Create a progress bar with appropriate styling
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}
