//! Per-file normalization statistics.
//!
//! Tracks how many rows of one source file were assembled cleanly and
//! which rows failed, for end-of-run diagnostics.

use serde::{Deserialize, Serialize};

/// Normalization statistics for one source file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileStats {
    /// Source file name
    pub file: String,

    /// Total number of data rows encountered
    pub rows_total: usize,

    /// Number of rows assembled cleanly and handed to the sink
    pub rows_indexed: usize,

    /// Number of rows with at least one field-parse failure
    pub rows_failed: usize,

    /// Row-scoped error descriptions for debugging
    pub errors: Vec<String>,
}

impl FileStats {
    /// Create empty statistics for one file
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            rows_total: 0,
            rows_indexed: 0,
            rows_failed: 0,
            errors: Vec::new(),
        }
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.rows_total == 0 {
            0.0
        } else {
            (self.rows_indexed as f64 / self.rows_total as f64) * 100.0
        }
    }

    /// Check if normalization was mostly successful (>90% success rate)
    pub fn is_successful(&self) -> bool {
        self.success_rate() > 90.0
    }
}
