//! Partial-precision date resolution and age derivation.
//!
//! Both the birth date and the competition date arrive at one of three
//! precisions, keyed by string length:
//!
//! - 11 characters — `DD MON YYYY` (full day precision)
//! - 8 characters — `MON YYYY` (day defaults to the 1st)
//! - 4 characters — `YYYY` (month and day default to the 1st)
//!
//! Age is the calendar-year difference, decremented when the birthday has
//! not yet been reached in the competition year.

use chrono::{Datelike, NaiveDate};

use crate::app::models::AgeInfo;
use crate::constants::month_number;
use crate::{Error, Result};

/// Resolve both partial dates and derive the competition-day age.
///
/// Either input being empty yields the all-null [`AgeInfo`]; both dates
/// are otherwise resolved to day precision before the age calculation.
pub fn compute(competition_date: &str, dob: &str) -> Result<AgeInfo> {
    if competition_date.is_empty() || dob.is_empty() {
        return Ok(AgeInfo::empty());
    }

    let dob_date = resolve_partial_date(dob)?;
    let comp_date = resolve_partial_date(competition_date)?;

    let mut age = comp_date.year() - dob_date.year();

    // Birthday not yet reached in the competition year
    if (comp_date.month(), comp_date.day()) < (dob_date.month(), dob_date.day()) {
        age -= 1;
    }

    Ok(AgeInfo {
        age_at_competition: Some(age),
        dob: Some(dob_date),
        date: Some(comp_date),
    })
}

/// Resolve a partial-precision date string to a day-level calendar date
pub fn resolve_partial_date(date_str: &str) -> Result<NaiveDate> {
    let (year, month, day) = match date_str.len() {
        11 => {
            let mut parts = date_str.split_whitespace();
            let day = parts.next().unwrap_or("");
            let month = parts.next().unwrap_or("");
            let year = parts.next().unwrap_or("");
            (
                parse_year(date_str, year)?,
                parse_month(date_str, month)?,
                parse_day(date_str, day)?,
            )
        }
        8 => {
            let mut parts = date_str.split_whitespace();
            let month = parts.next().unwrap_or("");
            let year = parts.next().unwrap_or("");
            (parse_year(date_str, year)?, parse_month(date_str, month)?, 1)
        }
        4 => (parse_year(date_str, date_str)?, 1, 1),
        len => {
            return Err(Error::date_format(
                date_str,
                format!("unsupported date length {}", len),
            ));
        }
    };

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| Error::date_format(date_str, "not a valid calendar date"))
}

fn parse_year(date_str: &str, year: &str) -> Result<i32> {
    year.parse::<i32>()
        .map_err(|_| Error::date_format(date_str, format!("invalid year '{}'", year)))
}

fn parse_month(date_str: &str, abbrev: &str) -> Result<u32> {
    month_number(abbrev)
        .ok_or_else(|| Error::date_format(date_str, format!("unknown month code '{}'", abbrev)))
}

fn parse_day(date_str: &str, day: &str) -> Result<u32> {
    day.parse::<u32>()
        .map_err(|_| Error::date_format(date_str, format!("invalid day '{}'", day)))
}
