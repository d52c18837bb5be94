//! Single-quote escaping for SQL string literals

/// Quote a string as a SQL literal, doubling any embedded single quotes
pub fn quote(value: &str) -> String {
    if value.contains('\'') {
        let mut quoted = String::with_capacity(value.len() + 4);
        quoted.push('\'');
        for ch in value.chars() {
            if ch == '\'' {
                quoted.push_str("''");
            } else {
                quoted.push(ch);
            }
        }
        quoted.push('\'');
        quoted
    } else {
        format!("'{}'", value)
    }
}
