//! Unit tests for the best-effort date normalizer

use sqlconv::formatter::dates::{is_date_candidate, normalize_date};

#[cfg(test)]
mod date_normalization_tests {
    use super::*;

    #[test]
    fn test_candidate_lengths() {
        assert!(is_date_candidate("2025-04-06")); // 10
        assert!(is_date_candidate("2024-1-3")); // 8
        assert!(!is_date_candidate("2025-04-6x")); // non-digit
        assert!(!is_date_candidate("2025-04")); // 7
        assert!(!is_date_candidate("2025-04-06 ")); // 11
    }

    #[test]
    fn test_all_separator_string_is_not_a_candidate() {
        assert!(!is_date_candidate("----------"));
        assert!(!is_date_candidate("////////"));
    }

    #[test]
    fn test_fast_path_iso_is_returned_verbatim() {
        assert_eq!(normalize_date("2025-04-06"), Some("2025-04-06".to_string()));
        // The fast path does not validate ranges; compatibility over strictness
        assert_eq!(normalize_date("2025-99-99"), Some("2025-99-99".to_string()));
    }

    #[test]
    fn test_fast_path_slash_layouts() {
        assert_eq!(normalize_date("25/12/2024"), Some("2024-12-25".to_string()));
        assert_eq!(normalize_date("2024/12/25"), Some("2024-12-25".to_string()));
    }

    #[test]
    fn test_fallback_formats() {
        assert_eq!(normalize_date("25-12-2024"), Some("2024-12-25".to_string()));
        assert_eq!(normalize_date("2024-1-3"), Some("2024-01-03".to_string()));
        // Too short for the positional fast paths, the parser still takes it
        assert_eq!(normalize_date("1/2/2024"), Some("2024-02-01".to_string()));
    }

    #[test]
    fn test_failures_are_soft() {
        assert_eq!(normalize_date("76866000"), None);
        assert_eq!(normalize_date("20250406"), None);
        assert_eq!(normalize_date("12/34/56/8"), None);
    }
}
