//! Tests for finishing position decoding

use crate::app::services::normalizer::position;
use crate::Error;

#[test]
fn test_empty_position_is_all_null() {
    let result = position::parse("").unwrap();
    assert!(result.raw_pos.is_none());
    assert!(result.numeric_pos.is_none());
    assert!(result.group.is_none());
}

#[test]
fn test_plain_rank() {
    let result = position::parse("12").unwrap();
    assert_eq!(result.numeric_pos, Some(12));
    assert_eq!(result.raw_pos.as_deref(), Some("12"));
    assert!(result.group.is_none());
}

#[test]
fn test_dotted_rank_keeps_full_raw_string() {
    let result = position::parse("2.").unwrap();
    assert_eq!(result.numeric_pos, Some(2));
    assert_eq!(result.raw_pos.as_deref(), Some("2."));
    assert!(result.group.is_none());
}

#[test]
fn test_dotted_rank_discards_trailer_but_preserves_it_in_raw() {
    let result = position::parse("3.5").unwrap();
    assert_eq!(result.numeric_pos, Some(3));
    assert_eq!(result.raw_pos.as_deref(), Some("3.5"));
    assert!(result.group.is_none());
}

#[test]
fn test_phase_coded_position() {
    let result = position::parse("2sf3").unwrap();
    assert_eq!(result.numeric_pos, Some(2));
    assert_eq!(result.raw_pos.as_deref(), Some("2sf3"));
    assert_eq!(result.group.as_deref(), Some("Halbfinale 3"));
}

#[test]
fn test_all_phase_codes_resolve() {
    for (pos, label) in [
        ("1f1", "Finale 1"),
        ("3h2", "Vorrunde 2"),
        ("1er1", "Extra 1"),
        ("2sr1", "Halbfinale 1"),
        ("4pr2", "Vorausscheid 2"),
        ("1ce1", "Kombiniert 1"),
        ("5qf1", "Viertelfinale 1"),
        ("6q4", "Qualifikation 4"),
    ] {
        let result = position::parse(pos).unwrap();
        assert_eq!(result.group.as_deref(), Some(label), "for input '{}'", pos);
    }
}

#[test]
fn test_unknown_phase_code_is_explicit_error() {
    let result = position::parse("2zz3");
    match result {
        Err(Error::UnknownPhaseCode { code, value }) => {
            assert_eq!(code, "zz");
            assert_eq!(value, "2zz3");
        }
        other => panic!("expected UnknownPhaseCode, got {:?}", other),
    }
}

#[test]
fn test_phase_codes_are_case_sensitive() {
    let result = position::parse("2SF3");
    assert!(matches!(result, Err(Error::UnknownPhaseCode { .. })));
}

#[test]
fn test_unrecognized_format_is_all_null_not_stale() {
    // A successful phase lookup must not leak into a later miss
    let coded = position::parse("2sf3").unwrap();
    assert!(coded.group.is_some());

    let dnf = position::parse("DNF").unwrap();
    assert!(dnf.raw_pos.is_none());
    assert!(dnf.numeric_pos.is_none());
    assert!(dnf.group.is_none());
}

#[test]
fn test_dotted_non_numeric_rank_is_parse_error() {
    let result = position::parse("dnf.2");
    assert!(matches!(result, Err(Error::FieldParse { .. })));
}
