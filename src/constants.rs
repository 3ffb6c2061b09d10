//! Application constants for the athletics normalizer
//!
//! This module contains the fixed lookup tables and default values used
//! throughout the normalizer: the phase-code table for finishing
//! positions, the month-abbreviation table for partial dates, and the
//! folder/index conventions of the input layout.

// =============================================================================
// Input Layout
// =============================================================================

/// Top-level category folders expected under the data directory
pub const GENDER_FOLDERS: &[&str] = &["men", "women"];

/// File extension of result sheets (matched case-insensitively)
pub const CSV_EXTENSION: &str = "csv";

/// Header keyword identifying wind-reading columns in raw sheets
pub const WIND_COLUMN_KEYWORD: &str = "WIND";

// =============================================================================
// Index Conventions
// =============================================================================

/// Default search index name for normalized documents
pub const DEFAULT_INDEX_NAME: &str = "sport-results";

/// First document identifier assigned in a run (ids increase monotonically)
pub const FIRST_DOCUMENT_ID: u64 = 1;

// =============================================================================
// Lookup Tables
// =============================================================================

/// Resolve a competition phase code to its display label.
///
/// Codes are case-sensitive lowercase keys as they appear in the raw
/// position column (e.g. `2sf3` encodes rank 2, semifinal, heat 3).
/// Returns `None` for codes absent from the table; callers must treat
/// that as an error rather than reusing a previous label.
pub fn phase_label(code: &str) -> Option<&'static str> {
    match code {
        "f" => Some("Finale"),
        "h" => Some("Vorrunde"),
        "er" => Some("Extra"),
        "sf" | "sr" => Some("Halbfinale"),
        "pr" => Some("Vorausscheid"),
        "ce" => Some("Kombiniert"),
        "qf" => Some("Viertelfinale"),
        "q" => Some("Qualifikation"),
        _ => None,
    }
}

/// Resolve a 3-letter month abbreviation (case-insensitive) to its number
pub fn month_number(abbrev: &str) -> Option<u32> {
    match abbrev.to_ascii_uppercase().as_str() {
        "JAN" => Some(1),
        "FEB" => Some(2),
        "MAR" => Some(3),
        "APR" => Some(4),
        "MAY" => Some(5),
        "JUN" => Some(6),
        "JUL" => Some(7),
        "AUG" => Some(8),
        "SEP" => Some(9),
        "OCT" => Some(10),
        "NOV" => Some(11),
        "DEC" => Some(12),
        _ => None,
    }
}
