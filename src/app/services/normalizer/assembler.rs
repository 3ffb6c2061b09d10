//! Record assembly.
//!
//! Composes the four field parsers' outputs with the passthrough scalars
//! into one immutable [`NormalizedResult`] per raw row. The parsers are
//! independent of one another, so a failure in one field never corrupts
//! or blocks the others: the failed field falls back to its documented
//! all-null value and the error is collected as a per-row issue for the
//! caller to surface.

use std::path::Path;

use super::{age, mark, position, venue};
use crate::app::models::{AgeInfo, Mark, NormalizedResult, Position, RawRow, Venue};
use crate::Error;

/// Per-row context supplied by the row source
#[derive(Debug, Clone)]
pub struct RowContext {
    /// Source file name, e.g. `100m.csv`
    pub file_name: String,
    /// Category folder label, e.g. `men`
    pub gender_folder: String,
    /// 1-based row sequence number within the source file
    pub row_ordinal: usize,
}

/// One assembled row: the document plus any field-level parse issues
#[derive(Debug)]
pub struct AssembledRecord {
    pub document: NormalizedResult,
    pub issues: Vec<Error>,
}

impl AssembledRecord {
    /// True when every sub-field parsed cleanly
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Assemble one raw row into a fresh, fully specified document.
///
/// Passthrough fields (`world_rank`, `discipline`, `gender`, `competitor`,
/// `nat`) are always populated regardless of parse failures in the four
/// structured sub-fields.
pub fn assemble(row: &RawRow, ctx: &RowContext) -> AssembledRecord {
    let mut issues = Vec::new();

    let mark = mark::parse(&row.mark, &ctx.file_name).unwrap_or_else(|e| {
        issues.push(e);
        Mark::empty()
    });

    let pos = position::parse(&row.pos).unwrap_or_else(|e| {
        issues.push(e);
        Position::empty()
    });

    let venue = venue::parse(&row.venue).unwrap_or_else(|e| {
        issues.push(e);
        Venue::empty()
    });

    let age = age::compute(&row.date, &row.dob).unwrap_or_else(|e| {
        issues.push(e);
        AgeInfo::empty()
    });

    let wind = match row.wind.as_deref().filter(|w| !w.is_empty()) {
        Some(raw) => match raw.parse::<f64>() {
            Ok(value) => Some(value),
            Err(e) => {
                issues.push(Error::field_parse(
                    "wind",
                    raw,
                    format!("not a number: {}", e),
                ));
                None
            }
        },
        None => None,
    };

    let document = NormalizedResult {
        age,
        competitor: non_empty(&row.competitor),
        nat: non_empty(&row.nat),
        discipline: discipline_from_file_name(&ctx.file_name),
        gender: capitalize(&ctx.gender_folder),
        world_rank: ctx.row_ordinal,
        mark,
        pos,
        venue,
        wind,
    };

    AssembledRecord { document, issues }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Strip the `.csv` suffix (any casing) from a source file name
fn discipline_from_file_name(file_name: &str) -> String {
    let path = Path::new(file_name);
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    if is_csv {
        path.file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(file_name)
            .to_string()
    } else {
        file_name.to_string()
    }
}

/// Capitalize the first character of a folder label (`men` -> `Men`)
fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
