//! SQL literal formatting module
//!
//! Maps a single JSON-decoded value to its SQL literal text. Strings that
//! look like dates are normalized to ISO `YYYY-MM-DD` before quoting; every
//! other string is escaped and single-quoted as-is.

pub mod dates;
pub mod quotes;

use serde_json::Value;

/// Format a JSON value as its SQL literal representation
pub fn format_sql_value(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Bool(b) => format_bool(*b),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format_string(s),
        // Nested structures have no column type in the target table; keep
        // their compact JSON text as an ordinary quoted string.
        other => quotes::quote(&other.to_string()),
    }
}

fn format_bool(value: bool) -> String {
    if value {
        "TRUE".to_string()
    } else {
        "FALSE".to_string()
    }
}

fn format_string(value: &str) -> String {
    if dates::is_date_candidate(value) {
        if let Some(normalized) = dates::normalize_date(value) {
            return quotes::quote(&normalized);
        }
    }

    quotes::quote(value)
}
