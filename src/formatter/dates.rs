//! Best-effort date normalization to ISO `YYYY-MM-DD`
//!
//! The candidate check is a deliberate heuristic: strings of length 8 or 10
//! made of digits plus `-`/`/` separators are probed as dates. That can
//! misclassify numeric-looking values (an 8-digit CEP, for instance); those
//! fail the normalization below and fall back to plain string quoting, so
//! no text is ever lost.

use chrono::NaiveDate;

/// Accepted input formats for the fallback parser, tried in order
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%Y/%m/%d", "%d-%m-%Y"];

/// Check whether a string is worth probing as a date: length 8 or 10, and
/// all digits once `-` and `/` are removed (with at least one digit left)
pub fn is_date_candidate(value: &str) -> bool {
    if value.len() != 8 && value.len() != 10 {
        return false;
    }

    let mut digits = 0usize;
    for ch in value.chars() {
        match ch {
            '0'..='9' => digits += 1,
            '-' | '/' => {}
            _ => return false,
        }
    }

    digits > 0
}

/// Normalize a candidate string to `YYYY-MM-DD`, or `None` when it is not a
/// date after all. Failure here is a soft signal, never an error.
pub fn normalize_date(value: &str) -> Option<String> {
    let bytes = value.as_bytes();

    // Most common case: already YYYY-MM-DD. The positional fast paths do no
    // range validation, matching the loose behavior downstream consumers of
    // the generated scripts already rely on.
    if bytes.len() == 10 && bytes[4] == b'-' && bytes[7] == b'-' {
        return Some(value.to_string());
    }

    // DD/MM/YYYY
    if bytes.len() == 10 && bytes[2] == b'/' && bytes[5] == b'/' {
        let (day, month, year) = split_slashes(value)?;
        return Some(format!("{}-{:0>2}-{:0>2}", year, month, day));
    }

    // YYYY/MM/DD
    if bytes.len() == 10 && bytes[4] == b'/' && bytes[7] == b'/' {
        let (year, month, day) = split_slashes(value)?;
        return Some(format!("{}-{:0>2}-{:0>2}", year, month, day));
    }

    // Slow path for everything else (unpadded days, DD-MM-YYYY, ...)
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date.format("%Y-%m-%d").to_string());
        }
    }

    None
}

/// Split into exactly three slash-separated parts; extra slashes mean the
/// string is not a date in either slash layout
fn split_slashes(value: &str) -> Option<(&str, &str, &str)> {
    let mut parts = value.split('/');
    let first = parts.next()?;
    let second = parts.next()?;
    let third = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((first, second, third))
}
