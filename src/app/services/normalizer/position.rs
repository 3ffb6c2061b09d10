//! Finishing position decoding.
//!
//! A position column carries one of four shapes: a plain rank (`12`), a
//! rank with a discarded trailer after a dot (`2.`), a rank with a phase
//! and heat code (`2sf3` = rank 2, semifinal, heat 3), or a non-numeric
//! DNF-style marker. Each call classifies from scratch; no label or rank
//! ever leaks from a previous call.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::app::models::Position;
use crate::constants::phase_label;
use crate::{Error, Result};

/// `digits, letters, digits` shape of a phase-coded position
fn phase_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(\d+)([a-zA-Z]+)(\d+)$").expect("valid position regex"))
}

/// Parse a raw position string into a typed [`Position`].
///
/// Unknown phase codes are an [`Error::UnknownPhaseCode`]; inputs that
/// match none of the recognized shapes yield the explicit all-null
/// position rather than an error.
pub fn parse(pos: &str) -> Result<Position> {
    if pos.is_empty() {
        return Ok(Position::empty());
    }

    // Rank with a discarded trailer after the first dot. The full raw
    // string is preserved so the trailer stays recoverable downstream.
    if let Some((rank, trailer)) = pos.split_once('.') {
        if !trailer.is_empty() {
            debug!("Discarding position trailer '{}' in '{}'", trailer, pos);
        }
        let numeric = parse_rank(pos, rank)?;
        return Ok(Position {
            raw_pos: Some(pos.to_string()),
            numeric_pos: Some(numeric),
            group: None,
        });
    }

    // Plain rank
    if pos.chars().all(|c| c.is_ascii_digit()) {
        let numeric = parse_rank(pos, pos)?;
        return Ok(Position {
            raw_pos: Some(pos.to_string()),
            numeric_pos: Some(numeric),
            group: None,
        });
    }

    // Rank with phase/heat code
    if let Some(captures) = phase_pattern().captures(pos) {
        let rank = captures.get(1).map_or("", |m| m.as_str());
        let code = captures.get(2).map_or("", |m| m.as_str());
        let heat = captures.get(3).map_or("", |m| m.as_str());

        let label =
            phase_label(code).ok_or_else(|| Error::unknown_phase_code(code, pos))?;
        let numeric = parse_rank(pos, rank)?;

        return Ok(Position {
            raw_pos: Some(pos.to_string()),
            numeric_pos: Some(numeric),
            group: Some(format!("{} {}", label, heat)),
        });
    }

    // DNF-style marker or anything else outside the input grammar
    debug!("Unrecognized position format: '{}'", pos);
    Ok(Position::empty())
}

fn parse_rank(pos: &str, rank: &str) -> Result<i64> {
    rank.parse::<i64>().map_err(|_| {
        Error::field_parse("pos", pos, format!("non-numeric rank '{}'", rank))
    })
}
