//! Performance mark classification and conversion.
//!
//! A mark column mixes several independent formats: championship points,
//! sprint times in seconds, longer times with one or two colons, and
//! distances in meters. Classification relies entirely on punctuation and
//! character classes, plus one contextual hint: sub-minute dotted values
//! are seconds when the source file name contains a digit (track events
//! like `100m.csv`) and meters otherwise (field events like `longjump.csv`).

use crate::app::models::{Mark, MarkFormat};
use crate::{Error, Result};

/// Parse a raw mark string into a typed [`Mark`].
///
/// Any literal `h` is first replaced with `0` (hand-timed/placeholder
/// convention of the source sheets); both `raw_value` and `display_value`
/// reflect the substituted string. Empty input yields the all-null mark.
pub fn parse(mark: &str, context_filename: &str) -> Result<Mark> {
    let mark = mark.replace('h', "0");

    if mark.is_empty() {
        return Ok(Mark::empty());
    }

    let colons = mark.matches(':').count();
    let dots = mark.matches('.').count();

    if colons == 0 {
        if dots == 0 {
            // Championship points, a plain integer
            let numeric = parse_float(&mark)?;
            return Ok(Mark::with_format(mark, numeric, MarkFormat::Points));
        }

        // Sub-minute time or distance; the dot is a decimal point either
        // way, only the label differs
        let numeric = parse_float(&mark)?;
        let format = if context_filename.chars().any(|c| c.is_ascii_digit()) {
            MarkFormat::Seconds
        } else {
            MarkFormat::Meters
        };
        return Ok(Mark::with_format(mark, numeric, format));
    }

    match (colons, dots) {
        // minutes:seconds.millis
        (1, 1) => {
            let (minutes, rest) = split_once_required(&mark, ':')?;
            let (seconds, millis) = split_once_required(rest, '.')?;
            let total_seconds = parse_int(&mark, minutes)? * 60 + parse_int(&mark, seconds)?;
            let numeric = parse_float(&format!("{}.{}", total_seconds, millis))
                .map_err(|_| bad_component(&mark, millis))?;
            Ok(Mark::with_format(mark, numeric, MarkFormat::Minutes))
        }
        // minutes:seconds
        (1, 0) => {
            let (minutes, seconds) = split_once_required(&mark, ':')?;
            let total_seconds = parse_int(&mark, minutes)? * 60 + parse_int(&mark, seconds)?;
            Ok(Mark::with_format(mark, total_seconds as f64, MarkFormat::Minutes))
        }
        // hours:minutes:seconds
        (2, 0) => {
            let (hours, rest) = split_once_required(&mark, ':')?;
            let (minutes, seconds) = split_once_required(rest, ':')?;
            let total_seconds = parse_int(&mark, hours)? * 3600
                + parse_int(&mark, minutes)? * 60
                + parse_int(&mark, seconds)?;
            Ok(Mark::with_format(mark, total_seconds as f64, MarkFormat::Hours))
        }
        // hours:minutes:seconds.millis
        (2, 1) => {
            let (hours, rest) = split_once_required(&mark, ':')?;
            let (minutes, rest) = split_once_required(rest, ':')?;
            let (seconds, millis) = split_once_required(rest, '.')?;
            let total_seconds = parse_int(&mark, hours)? * 3600
                + parse_int(&mark, minutes)? * 60
                + parse_int(&mark, seconds)?;
            let numeric = parse_float(&format!("{}.{}", total_seconds, millis))
                .map_err(|_| bad_component(&mark, millis))?;
            Ok(Mark::with_format(mark, numeric, MarkFormat::Hours))
        }
        _ => Err(Error::field_parse(
            "mark",
            mark,
            format!("unsupported time layout ({} colons, {} dots)", colons, dots),
        )),
    }
}

fn parse_float(value: &str) -> Result<f64> {
    value
        .parse::<f64>()
        .map_err(|e| Error::field_parse("mark", value, format!("not a number: {}", e)))
}

fn parse_int(mark: &str, component: &str) -> Result<i64> {
    component
        .parse::<i64>()
        .map_err(|_| bad_component(mark, component))
}

fn bad_component(mark: &str, component: &str) -> Error {
    Error::field_parse(
        "mark",
        mark,
        format!("non-numeric time component '{}'", component),
    )
}

fn split_once_required(value: &str, separator: char) -> Result<(&str, &str)> {
    value.split_once(separator).ok_or_else(|| {
        Error::field_parse(
            "mark",
            value,
            format!("expected separator '{}'", separator),
        )
    })
}
