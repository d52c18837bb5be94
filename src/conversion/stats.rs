//! Statistics tracking for conversion operations

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Statistics for one conversion run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Number of records converted
    pub record_count: usize,
    /// Number of INSERT statements emitted
    pub batch_count: usize,
    /// Generated SQL size in bytes
    pub output_size_bytes: u64,
    /// Number of lines in the generated SQL
    pub output_line_count: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// Number of files processed
    pub file_count: usize,
}

impl ConversionStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Create statistics for a single conversion
    pub fn for_conversion(
        record_count: usize,
        batch_count: usize,
        output: &str,
        processing_time: Duration,
    ) -> Self {
        Self {
            record_count,
            batch_count,
            output_size_bytes: output.len() as u64,
            output_line_count: output.lines().count(),
            processing_time_ms: processing_time.as_millis() as u64,
            file_count: 1,
        }
    }

    /// Throughput in records per second
    pub fn records_per_second(&self) -> f64 {
        if self.processing_time_ms == 0 {
            return self.record_count as f64 * 1000.0;
        }
        self.record_count as f64 / (self.processing_time_ms as f64 / 1000.0)
    }

    /// Combine statistics from multiple operations
    pub fn combine(&mut self, other: &Self) {
        self.record_count += other.record_count;
        self.batch_count += other.batch_count;
        self.output_size_bytes += other.output_size_bytes;
        self.output_line_count += other.output_line_count;
        self.processing_time_ms += other.processing_time_ms;
        self.file_count += other.file_count;
    }

    /// Render the human-readable statistics block shown by `--stats`
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Conversion statistics:".to_string(),
            format!("  Records converted: {}", self.record_count),
            format!("  INSERT statements: {}", self.batch_count),
            format!("  Output size: {} bytes", self.output_size_bytes),
            format!("  Output lines: {}", self.output_line_count),
            format!("  Processing time: {}ms", self.processing_time_ms),
        ];
        if self.record_count > 0 {
            lines.push(format!(
                "  Throughput: {:.0} records/second",
                self.records_per_second()
            ));
        }
        lines.join("\n")
    }
}
