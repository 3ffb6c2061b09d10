//! Tests for venue string splitting

use crate::app::services::normalizer::venue;
use crate::Error;

#[test]
fn test_empty_venue_is_all_empty() {
    let result = venue::parse("").unwrap();
    assert_eq!(result.venue_raw, "");
    assert_eq!(result.city, "");
    assert_eq!(result.country, "");
    assert_eq!(result.stadium, "");
    assert_eq!(result.extra, "");
}

#[test]
fn test_city_and_country_only() {
    let result = venue::parse("Tokyo (JPN)").unwrap();
    assert_eq!(result.city, "Tokyo");
    assert_eq!(result.country, "JPN");
    assert_eq!(result.stadium, "");
    assert_eq!(result.extra, "");
    assert_eq!(result.venue_raw, "Tokyo (JPN)");
}

#[test]
fn test_stadium_city_country() {
    let result = venue::parse("National Stadium, Tokyo (JPN)").unwrap();
    assert_eq!(result.stadium, "National Stadium");
    assert_eq!(result.city, "Tokyo");
    assert_eq!(result.country, "JPN");
    assert_eq!(result.extra, "");
}

#[test]
fn test_stadium_city_extra_country() {
    let result = venue::parse("Stade de France, Paris, Olympic Games (FRA)").unwrap();
    assert_eq!(result.stadium, "Stade de France");
    assert_eq!(result.city, "Paris");
    assert_eq!(result.extra, "Olympic Games");
    assert_eq!(result.country, "FRA");
    assert_eq!(result.venue_raw, "Stade de France, Paris, Olympic Games (FRA)");
}

#[test]
fn test_venue_without_parentheses_has_empty_country() {
    let result = venue::parse("Tokyo").unwrap();
    assert_eq!(result.city, "Tokyo");
    assert_eq!(result.country, "");
}

#[test]
fn test_more_than_two_commas_is_format_error() {
    let result = venue::parse("A, B, C, D (GER)");
    assert!(matches!(result, Err(Error::VenueFormat { .. })));
}
