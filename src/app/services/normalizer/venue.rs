//! Venue string splitting.
//!
//! A venue column carries a city and a parenthesized country code, with
//! up to two comma-separated levels of extra context in front:
//!
//! - `Tokyo (JPN)` — city and country only
//! - `National Stadium, Tokyo (JPN)` — stadium, city, country
//! - `National Stadium, Tokyo, Olympic Games (JPN)` — stadium, city,
//!   extra context, country
//!
//! More than two commas is outside the input grammar and rejected.

use crate::app::models::Venue;
use crate::{Error, Result};

/// Parse a raw venue string into a typed [`Venue`].
///
/// Empty input yields the explicit all-empty venue. The unmodified input
/// is always kept in `venue_raw`; absent components stay empty strings.
pub fn parse(venue: &str) -> Result<Venue> {
    if venue.is_empty() {
        return Ok(Venue::empty());
    }

    let commas = venue.matches(',').count();

    match commas {
        0 => {
            let (city, country) = split_country(venue);
            Ok(Venue {
                venue_raw: venue.to_string(),
                city,
                country,
                stadium: String::new(),
                extra: String::new(),
            })
        }
        1 => {
            let (stadium, rest) = venue.split_once(',').expect("one comma counted");
            let (city, country) = split_country(rest);
            Ok(Venue {
                venue_raw: venue.to_string(),
                city,
                country,
                stadium: stadium.trim().to_string(),
                extra: String::new(),
            })
        }
        2 => {
            let mut parts = venue.splitn(3, ',');
            let stadium = parts.next().unwrap_or("");
            let city = parts.next().unwrap_or("");
            let rest = parts.next().unwrap_or("");
            let (extra, country) = split_country(rest);
            Ok(Venue {
                venue_raw: venue.to_string(),
                city: city.trim().to_string(),
                country,
                stadium: stadium.trim().to_string(),
                extra,
            })
        }
        _ => Err(Error::venue_format(
            venue,
            format!("unsupported venue layout with {} commas", commas),
        )),
    }
}

/// Split a segment at the opening parenthesis into the text before it and
/// the country code inside it. Without parentheses the whole segment is
/// the leading part and the country stays empty.
fn split_country(segment: &str) -> (String, String) {
    match segment.find('(') {
        Some(start) => {
            let before = segment[..start].trim().to_string();
            let country = segment[start..]
                .trim()
                .trim_start_matches('(')
                .trim_end_matches(')')
                .to_string();
            (before, country)
        }
        None => (segment.trim().to_string(), String::new()),
    }
}
