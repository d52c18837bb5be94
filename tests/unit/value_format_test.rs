//! Unit tests for SQL literal formatting
//!
//! Tests cover:
//! - Scalar kinds (null, boolean, number, string)
//! - Date-string normalization and its fallback
//! - Single-quote escaping
//! - The fixed-shape guarantee of value tuples

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use sqlconv::format_sql_value;

#[cfg(test)]
mod value_format_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_null_and_missing_are_bare_null() {
        assert_eq!(format_sql_value(&Value::Null), "NULL");
    }

    #[test]
    fn test_booleans() {
        assert_eq!(format_sql_value(&json!(true)), "TRUE");
        assert_eq!(format_sql_value(&json!(false)), "FALSE");
    }

    #[test]
    fn test_integers_and_floats() {
        assert_eq!(format_sql_value(&json!(39)), "39");
        assert_eq!(format_sql_value(&json!(-62.3508238792419)), "-62.3508238792419");
        assert_eq!(format_sql_value(&json!(110160)), "110160");
    }

    #[test]
    fn test_plain_strings_are_single_quoted() {
        assert_eq!(format_sql_value(&json!("M")), "'M'");
        assert_eq!(
            format_sql_value(&json!("13 DE FEVEREIRO")),
            "'13 DE FEVEREIRO'"
        );
    }

    #[test]
    fn test_embedded_quote_is_doubled() {
        assert_eq!(format_sql_value(&json!("O'Brien")), "'O''Brien'");
        assert_eq!(
            format_sql_value(&json!("POSTO D'AGUA BRANCA")),
            "'POSTO D''AGUA BRANCA'"
        );
    }

    #[test]
    fn test_iso_date_round_trip() {
        assert_eq!(format_sql_value(&json!("2025-04-06")), "'2025-04-06'");
    }

    #[test]
    fn test_dd_mm_yyyy_normalized() {
        assert_eq!(format_sql_value(&json!("25/12/2024")), "'2024-12-25'");
    }

    #[test]
    fn test_yyyy_mm_dd_slashes_normalized() {
        assert_eq!(format_sql_value(&json!("2024/12/25")), "'2024-12-25'");
    }

    #[test]
    fn test_failed_normalization_preserves_raw_string() {
        // 8-digit CEP passes the date-candidate heuristic but not the parser
        assert_eq!(format_sql_value(&json!("76866000")), "'76866000'");
        // CNES establishment code: 13 digits, not even a candidate
        assert_eq!(
            format_sql_value(&json!("1101609514104")),
            "'1101609514104'"
        );
    }

    #[test]
    fn test_determinism() {
        for value in [
            json!(null),
            json!(true),
            json!(9514104),
            json!("ATENDIMENTOS NOS TURNOS DA MANHA E A TARDE"),
            json!("06/04/2025"),
        ] {
            assert_eq!(format_sql_value(&value), format_sql_value(&value));
        }
    }
}
