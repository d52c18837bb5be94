//! Unit tests for batch partitioning and INSERT statement shape

use serde_json::{json, Value};
use sqlconv::conversion::{ConversionConfig, ConversionEngine};
use sqlconv::Record;

fn engine(batch_size: usize) -> ConversionEngine {
    let config = ConversionConfig::default()
        .with_columns(vec![
            "codigo_cnes".to_string(),
            "nome_fantasia".to_string(),
        ])
        .with_batch_size(batch_size)
        .with_progress(false);
    ConversionEngine::new(config)
}

fn records(count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| {
            let mut record = Record::new();
            record.insert("codigo_cnes".to_string(), json!(i));
            record.insert("nome_fantasia".to_string(), json!(format!("UNIDADE {}", i)));
            record
        })
        .collect()
}

#[cfg(test)]
mod batching_tests {
    use super::*;

    #[test]
    fn test_2500_records_batch_1000_gives_three_statements() {
        let script = engine(1000).convert(&records(2500)).unwrap();

        assert_eq!(script.content.matches("INSERT INTO").count(), 3);
        assert_eq!(script.stats.batch_count, 3);

        // Count tuples per statement: 1000, 1000, 500
        let statements: Vec<&str> = script.content.split("INSERT INTO").skip(1).collect();
        assert_eq!(statements.len(), 3);
        let tuple_counts: Vec<usize> = statements
            .iter()
            .map(|s| s.lines().filter(|l| l.starts_with('(')).count())
            .collect();
        assert_eq!(tuple_counts, vec![1000, 1000, 500]);
    }

    #[test]
    fn test_no_record_dropped_or_duplicated() {
        let script = engine(1000).convert(&records(2500)).unwrap();

        for i in 0..2500 {
            let needle = format!("({}, 'UNIDADE {}')", i, i);
            assert_eq!(
                script.content.matches(needle.as_str()).count(),
                1,
                "record {} must appear exactly once",
                i
            );
        }
    }

    #[test]
    fn test_original_order_preserved() {
        let script = engine(10).convert(&records(25)).unwrap();

        let mut last_position = 0;
        for i in 0..25 {
            let needle = format!("({}, ", i);
            let position = script.content.find(needle.as_str()).unwrap();
            assert!(position >= last_position, "record {} out of order", i);
            last_position = position;
        }
    }

    #[test]
    fn test_zero_records_is_comment_only() {
        let script = engine(1000).convert(&[]).unwrap();
        assert_eq!(script.content, "-- No records to convert\n");
        assert!(!script.content.contains("INSERT"));
    }

    #[test]
    fn test_single_statement_mode_has_no_batch_comments() {
        let script = engine(1000).convert(&records(100)).unwrap();
        assert_eq!(script.content.matches("INSERT INTO").count(), 1);
        assert!(!script.content.contains("-- Batch"));
        assert!(script.content.contains("-- Total records: 100"));
        assert!(script.content.ends_with(");"));
    }

    #[test]
    fn test_multi_batch_header_lists_size_and_count() {
        let script = engine(7).convert(&records(20)).unwrap();
        assert!(script.content.contains("-- Batch size: 7"));
        assert!(script.content.contains("-- Batch count: 3"));
    }

    #[test]
    fn test_missing_field_keeps_tuple_width() {
        let mut record = Record::new();
        record.insert("nome_fantasia".to_string(), json!("SEM CODIGO"));

        let script = engine(1000).convert(&[record]).unwrap();
        assert!(script.content.contains("(NULL, 'SEM CODIGO');"));
    }

    #[test]
    fn test_extra_field_is_ignored() {
        let mut record = Record::new();
        record.insert("codigo_cnes".to_string(), json!(1));
        record.insert("nome_fantasia".to_string(), json!("UNIDADE"));
        record.insert("extra".to_string(), Value::String("NUNCA".to_string()));

        let script = engine(1000).convert(&[record]).unwrap();
        assert!(!script.content.contains("NUNCA"));
        assert!(!script.content.contains("extra"));
    }

    #[test]
    fn test_default_column_list_width() {
        let config = ConversionConfig::default().with_progress(false);
        let engine = ConversionEngine::new(config.clone());

        let mut record = Record::new();
        record.insert("codigo_cnes".to_string(), json!(9514104));

        let script = engine.convert(&[record]).unwrap();
        let tuple_line = script
            .content
            .lines()
            .find(|l| l.starts_with('('))
            .unwrap();
        // One value per column in the fixed list
        assert_eq!(
            tuple_line.matches("NULL").count(),
            config.columns.len() - 1
        );
    }
}
