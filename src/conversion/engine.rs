//! Core conversion engine for JSON to SQL transformation

use crate::conversion::config::ConversionConfig;
use crate::error::{ConversionError, ConversionResult};
use crate::formatter::format_sql_value;
use crate::parser::{JsonSource, Record};
use crate::progress::{self, ProgressReporter};
use serde_json::Value;
use std::fmt::Write;
use std::time::Instant;

use super::stats::ConversionStats;

/// Generated SQL script plus conversion statistics
#[derive(Debug, Clone)]
pub struct SqlScript {
    pub content: String,
    pub stats: ConversionStats,
}

impl SqlScript {
    pub fn new(content: String, stats: ConversionStats) -> Self {
        Self { content, stats }
    }

    /// Get the generated SQL text
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Get the length of the output in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Main conversion engine: holds the fixed configuration (table name, column
/// list, batch size) and converts record sequences statelessly.
pub struct ConversionEngine {
    config: ConversionConfig,
    progress: ProgressReporter,
}

impl ConversionEngine {
    /// Create a new conversion engine
    pub fn new(config: ConversionConfig) -> Self {
        let progress = ProgressReporter::new(config.show_progress);
        Self { config, progress }
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Convert a record sequence into SQL INSERT statements
    pub fn convert(&self, records: &[Record]) -> ConversionResult<SqlScript> {
        self.config
            .validate()
            .map_err(ConversionError::configuration)?;

        let start_time = Instant::now();
        let content = self.render(records);
        let batch_count = self.config.batch_count(records.len());

        let stats = ConversionStats::for_conversion(
            records.len(),
            batch_count,
            &content,
            start_time.elapsed(),
        );

        Ok(SqlScript::new(content, stats))
    }

    /// Parse a JSON source and convert its records
    pub fn convert_from_source(&self, source: &JsonSource) -> ConversionResult<SqlScript> {
        let records = source.parse_records()?;
        self.convert(&records)
    }

    /// Convert a JSON string containing an array of records
    pub fn convert_string(&self, json_str: &str) -> ConversionResult<SqlScript> {
        self.convert_from_source(&JsonSource::String(json_str.to_string()))
    }

    fn render(&self, records: &[Record]) -> String {
        if records.is_empty() {
            return "-- No records to convert\n".to_string();
        }

        if records.len() <= self.config.batch_size {
            return self.render_single(records);
        }

        self.render_batched(records)
    }

    /// One INSERT statement covering every record, with the short header
    fn render_single(&self, records: &[Record]) -> String {
        let mut output = String::new();
        output.push_str("-- SQL INSERT statements generated automatically\n");
        let _ = writeln!(output, "-- Table: {}", self.config.table_name);
        let _ = writeln!(output, "-- Total records: {}", records.len());
        output.push('\n');

        let bar = self.progress.record_bar(records.len());
        self.write_insert_statement(&mut output, records, &bar);
        progress::finish(&bar);

        output
    }

    /// One INSERT statement per chunk of at most batch_size records
    fn render_batched(&self, records: &[Record]) -> String {
        let batch_count = self.config.batch_count(records.len());

        let mut output = String::new();
        output.push_str("-- SQL INSERT statements generated automatically (batch mode)\n");
        let _ = writeln!(output, "-- Table: {}", self.config.table_name);
        let _ = writeln!(output, "-- Total records: {}", records.len());
        let _ = writeln!(output, "-- Batch size: {}", self.config.batch_size);
        let _ = writeln!(output, "-- Batch count: {}", batch_count);
        output.push('\n');

        let bar = self.progress.batch_bar(batch_count);
        for (index, batch) in records.chunks(self.config.batch_size).enumerate() {
            let _ = writeln!(output, "-- Batch {}", index + 1);
            // No per-record progress inside a batch, the batch bar is enough
            self.write_insert_statement(&mut output, batch, &None);
            output.push_str("\n\n");
            progress::tick(&bar);
        }
        progress::finish(&bar);

        output
    }

    /// Append one complete INSERT covering `records` to the output buffer
    fn write_insert_statement(
        &self,
        output: &mut String,
        records: &[Record],
        bar: &Option<indicatif::ProgressBar>,
    ) {
        let columns = self.config.columns.join(",\n  ");
        let _ = write!(
            output,
            "INSERT INTO {} (\n  {}\n)\nVALUES\n",
            self.config.table_name, columns
        );

        let last = records.len() - 1;
        for (index, record) in records.iter().enumerate() {
            output.push('(');
            for (position, column) in self.config.columns.iter().enumerate() {
                if position > 0 {
                    output.push_str(", ");
                }
                // Missing key behaves exactly like an explicit null
                let value = record.get(column).unwrap_or(&Value::Null);
                output.push_str(&format_sql_value(value));
            }
            if index == last {
                output.push_str(");");
            } else {
                output.push_str("),\n");
            }
            progress::tick(bar);
        }
    }
}

/// Convert records to SQL with the given configuration
pub fn convert_records_to_sql(
    records: &[Record],
    config: &ConversionConfig,
) -> ConversionResult<SqlScript> {
    ConversionEngine::new(config.clone()).convert(records)
}
