//! Tests for performance mark classification

use crate::app::models::MarkFormat;
use crate::app::services::normalizer::mark;
use crate::Error;

#[test]
fn test_empty_mark_is_all_null() {
    let result = mark::parse("", "100m.csv").unwrap();
    assert!(result.raw_value.is_none());
    assert!(result.display_value.is_none());
    assert!(result.numeric_value.is_none());
    assert!(result.format_type.is_none());
    assert_eq!(result.unit, "");
}

#[test]
fn test_points_without_punctuation() {
    let result = mark::parse("8832", "decathlon.csv").unwrap();
    assert_eq!(result.numeric_value, Some(8832.0));
    assert_eq!(result.format_type, Some(MarkFormat::Points));
    assert_eq!(result.unit, "");
    assert_eq!(result.raw_value.as_deref(), Some("8832"));
}

#[test]
fn test_dotted_mark_is_seconds_when_filename_has_digit() {
    let result = mark::parse("9.58", "100m.csv").unwrap();
    assert_eq!(result.numeric_value, Some(9.58));
    assert_eq!(result.format_type, Some(MarkFormat::Seconds));
    assert_eq!(result.unit, "s");
}

#[test]
fn test_dotted_mark_is_meters_when_filename_has_no_digit() {
    let result = mark::parse("7.85", "longjump.csv").unwrap();
    assert_eq!(result.numeric_value, Some(7.85));
    assert_eq!(result.format_type, Some(MarkFormat::Meters));
    assert_eq!(result.unit, "m");
}

#[test]
fn test_minutes_seconds_millis() {
    let result = mark::parse("1:02.345", "100m").unwrap();
    assert_eq!(result.numeric_value, Some(62.345));
    assert_eq!(result.format_type, Some(MarkFormat::Minutes));
    assert_eq!(result.unit, "min");
    assert_eq!(result.display_value.as_deref(), Some("1:02.345"));
}

#[test]
fn test_minutes_seconds_millis_preserves_leading_zero() {
    // "62.05" must not become "62.5"
    let result = mark::parse("1:02.05", "800m.csv").unwrap();
    assert_eq!(result.numeric_value, Some(62.05));
}

#[test]
fn test_minutes_seconds_without_millis() {
    let result = mark::parse("2:03", "800m.csv").unwrap();
    assert_eq!(result.numeric_value, Some(123.0));
    assert_eq!(result.format_type, Some(MarkFormat::Minutes));
}

#[test]
fn test_hours_minutes_seconds() {
    let result = mark::parse("2:01:39", "marathon.csv").unwrap();
    assert_eq!(result.numeric_value, Some(7299.0));
    assert_eq!(result.format_type, Some(MarkFormat::Hours));
    assert_eq!(result.unit, "h");
}

#[test]
fn test_hours_minutes_seconds_millis() {
    let result = mark::parse("1:02:03.5", "50km.csv").unwrap();
    assert_eq!(result.numeric_value, Some(3723.5));
    assert_eq!(result.format_type, Some(MarkFormat::Hours));
}

#[test]
fn test_h_placeholder_is_substituted_with_zero() {
    // Hand-timed convention: "10.2h" reads as "10.20"
    let result = mark::parse("10.2h", "100m.csv").unwrap();
    assert_eq!(result.numeric_value, Some(10.20));
    assert_eq!(result.raw_value.as_deref(), Some("10.20"));
    assert_eq!(result.display_value.as_deref(), Some("10.20"));
}

#[test]
fn test_parse_is_idempotent_on_display_value() {
    for (raw, filename) in [
        ("9.58", "100m.csv"),
        ("7.85", "longjump.csv"),
        ("1:02.345", "800m.csv"),
        ("2:01:39", "marathon.csv"),
        ("8832", "decathlon.csv"),
    ] {
        let first = mark::parse(raw, filename).unwrap();
        let display = first.display_value.clone().unwrap();
        let second = mark::parse(&display, filename).unwrap();
        assert_eq!(first.format_type, second.format_type, "for input '{}'", raw);
    }
}

#[test]
fn test_non_numeric_points_is_parse_error() {
    let result = mark::parse("DNF", "decatlon.csv");
    assert!(matches!(result, Err(Error::FieldParse { .. })));
}

#[test]
fn test_non_numeric_time_component_is_parse_error() {
    let result = mark::parse("1:xx.345", "800m.csv");
    assert!(matches!(result, Err(Error::FieldParse { .. })));
}

#[test]
fn test_unsupported_time_layout_is_parse_error() {
    // Two dots alongside a colon matches no composition rule
    let result = mark::parse("1:02.3.4", "800m.csv");
    assert!(matches!(result, Err(Error::FieldParse { .. })));
}
