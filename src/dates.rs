//! Permissive date parsing
//!
//! Two flavors of sloppy input reach this crate: the date the user types on
//! the command line, and the date texts scraped out of listing pages. Both
//! are parsed by trying a list of known formats rather than insisting on a
//! single canonical one.

use chrono::{NaiveDate, NaiveDateTime};

use crate::{DatelineError, Result};

/// Formats accepted for the command-line date argument.
///
/// Month-first numeric forms win over day-first, matching the usage string.
const INPUT_FORMATS: &[&str] = &[
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Date-and-time formats seen in listing-page date elements.
const LISTING_DATETIME_FORMATS: &[&str] = &[
    "%B %d, %Y %H:%M",
    "%b %d, %Y %H:%M",
    "%B %d, %Y %I:%M %p",
    "%Y-%m-%d %H:%M",
];

/// Date-only formats seen in listing-page date elements.
const LISTING_DATE_FORMATS: &[&str] = &[
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%Y-%m-%d",
    "%m/%d/%Y",
];

/// Parses the user-supplied target date.
///
/// # Arguments
///
/// * `input` - The raw command-line argument
///
/// # Returns
///
/// * `Ok(NaiveDate)` - The parsed date
/// * `Err(DatelineError::InvalidDate)` - No known format matched
pub fn parse_input_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    for format in INPUT_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date);
        }
    }
    Err(DatelineError::InvalidDate {
        input: input.to_string(),
    })
}

/// Parses the text of one listing-page date element.
///
/// Listing dates come with decoration: label prefixes ("Updated:"), a
/// time of day, and a trailing timezone abbreviation the format strings
/// cannot express. Unparseable texts return `None`; the caller decides
/// whether an empty result set is fatal.
pub fn parse_listing_date(text: &str) -> Option<NaiveDate> {
    let mut cleaned = text.trim();
    for label in ["Updated:", "Published:", "Updated", "Published"] {
        if let Some(rest) = cleaned.strip_prefix(label) {
            cleaned = rest.trim();
        }
    }

    if let Some(date) = try_listing_formats(cleaned) {
        return Some(date);
    }

    // Retry without a trailing timezone abbreviation ("IST", "GMT", ...).
    if let Some(idx) = cleaned.rfind(' ') {
        let (head, tail) = cleaned.split_at(idx);
        let tail = tail.trim();
        if !tail.is_empty() && tail.chars().all(|c| c.is_ascii_uppercase()) {
            return try_listing_formats(head.trim());
        }
    }

    None
}

fn try_listing_formats(text: &str) -> Option<NaiveDate> {
    for format in LISTING_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(dt.date());
        }
    }
    for format in LISTING_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_input_date_numeric_forms() {
        assert_eq!(parse_input_date("01/10/2026").unwrap(), date(2026, 1, 10));
        assert_eq!(parse_input_date("2026-01-10").unwrap(), date(2026, 1, 10));
        assert_eq!(parse_input_date(" 01-10-2026 ").unwrap(), date(2026, 1, 10));
    }

    #[test]
    fn test_input_date_named_month() {
        assert_eq!(
            parse_input_date("January 10, 2026").unwrap(),
            date(2026, 1, 10)
        );
        assert_eq!(parse_input_date("10 Jan 2026").unwrap(), date(2026, 1, 10));
    }

    #[test]
    fn test_input_date_rejects_garbage() {
        assert!(matches!(
            parse_input_date("not a date"),
            Err(DatelineError::InvalidDate { .. })
        ));
        assert!(parse_input_date("13/45/2026").is_err());
    }

    #[test]
    fn test_listing_date_plain() {
        assert_eq!(
            parse_listing_date("January 10, 2026"),
            Some(date(2026, 1, 10))
        );
    }

    #[test]
    fn test_listing_date_with_time_and_zone() {
        assert_eq!(
            parse_listing_date("January 10, 2026 19:41 IST"),
            Some(date(2026, 1, 10))
        );
        assert_eq!(
            parse_listing_date("Updated: Jan 9, 2026 07:05 GMT"),
            Some(date(2026, 1, 9))
        );
    }

    #[test]
    fn test_listing_date_unparseable() {
        assert_eq!(parse_listing_date("yesterday"), None);
        assert_eq!(parse_listing_date(""), None);
    }
}
