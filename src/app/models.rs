//! Core data structures for result-sheet normalization.
//!
//! Defines the raw input row, the typed sub-field values produced by the
//! field parsers, and the final index-ready document. Every structure is
//! built fresh per row and never mutated afterwards; there is no shared
//! state between rows or between parser calls.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Ordered raw text fields of one input record.
///
/// Column layout of a prepared result sheet:
/// `[mark, competitor, dob, nat, position, venue, date, wind]`.
/// Older sheets have no wind column; missing trailing fields are treated
/// as absent, never as an error.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub mark: String,
    pub competitor: String,
    pub dob: String,
    pub nat: String,
    pub pos: String,
    pub venue: String,
    pub date: String,
    /// Present only when the row carries an 8th field
    pub wind: Option<String>,
}

impl RawRow {
    /// Build a raw row from a CSV record, tolerating short rows
    pub fn from_record(record: &csv::StringRecord) -> Self {
        let field = |i: usize| record.get(i).unwrap_or("").to_string();

        Self {
            mark: field(0),
            competitor: field(1),
            dob: field(2),
            nat: field(3),
            pos: field(4),
            venue: field(5),
            date: field(6),
            wind: record.get(7).map(|s| s.to_string()),
        }
    }
}

/// Classified format of a performance mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkFormat {
    Points,
    Seconds,
    Minutes,
    Hours,
    Meters,
}

impl MarkFormat {
    /// Unit suffix attached to marks of this format
    pub fn unit(&self) -> &'static str {
        match self {
            MarkFormat::Points => "",
            MarkFormat::Seconds => "s",
            MarkFormat::Minutes => "min",
            MarkFormat::Hours => "h",
            MarkFormat::Meters => "m",
        }
    }

    /// Keyword value stored in the index
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkFormat::Points => "Points",
            MarkFormat::Seconds => "Seconds",
            MarkFormat::Minutes => "Minutes",
            MarkFormat::Hours => "Hours",
            MarkFormat::Meters => "Meters",
        }
    }
}

/// A competitor's measured performance in one event.
///
/// Either all optional fields are `None` (empty input) or all are
/// populated consistently with `format_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    pub raw_value: Option<String>,
    pub display_value: Option<String>,
    pub numeric_value: Option<f64>,
    pub format_type: Option<MarkFormat>,
    pub unit: String,
}

impl Mark {
    /// The all-null mark produced for empty input
    pub fn empty() -> Self {
        Self {
            raw_value: None,
            display_value: None,
            numeric_value: None,
            format_type: None,
            unit: String::new(),
        }
    }

    /// Build a fully populated mark for one classified format
    pub fn with_format(value: String, numeric: f64, format: MarkFormat) -> Self {
        Self {
            raw_value: Some(value.clone()),
            display_value: Some(value),
            numeric_value: Some(numeric),
            format_type: Some(format),
            unit: format.unit().to_string(),
        }
    }
}

/// A decoded finishing position.
///
/// `group` is populated only when the raw string encodes a heat/phase
/// suffix; `numeric_pos` stays `None` for DNF-style inputs that match
/// none of the recognized patterns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub raw_pos: Option<String>,
    pub numeric_pos: Option<i64>,
    pub group: Option<String>,
}

impl Position {
    /// The all-null position produced for empty or unrecognized input
    pub fn empty() -> Self {
        Self {
            raw_pos: None,
            numeric_pos: None,
            group: None,
        }
    }
}

/// A venue string split into its components.
///
/// `country` is always the parenthesized segment with parentheses
/// stripped; absent components default to the empty string, not null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub venue_raw: String,
    pub city: String,
    pub country: String,
    pub stadium: String,
    pub extra: String,
}

impl Venue {
    /// The all-empty venue produced for empty input
    pub fn empty() -> Self {
        Self {
            venue_raw: String::new(),
            city: String::new(),
            country: String::new(),
            stadium: String::new(),
            extra: String::new(),
        }
    }
}

/// Resolved dates and derived competition-day age.
///
/// All fields are `None` iff either input date string was empty;
/// otherwise both dates are resolved to day precision (missing day and
/// month default to the 1st).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeInfo {
    pub age_at_competition: Option<i32>,
    pub dob: Option<NaiveDate>,
    pub date: Option<NaiveDate>,
}

impl AgeInfo {
    /// The all-null age info produced when either date is missing
    pub fn empty() -> Self {
        Self {
            age_at_competition: None,
            dob: None,
            date: None,
        }
    }
}

/// The fully normalized, index-ready representation of one result row.
///
/// Created once per raw row by the record assembler and immutable after
/// construction. Field names mirror the published index mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedResult {
    #[serde(flatten)]
    pub age: AgeInfo,
    pub competitor: Option<String>,
    pub nat: Option<String>,
    /// Source file name with the `.csv` suffix stripped
    pub discipline: String,
    /// Capitalized category folder label
    pub gender: String,
    /// 1-based row sequence number within the source file
    pub world_rank: usize,
    pub mark: Mark,
    pub pos: Position,
    pub venue: Venue,
    pub wind: Option<f64>,
}
