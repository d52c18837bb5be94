//! JSON to SQL conversion module
//!
//! This module contains the core conversion logic, configuration, and statistics.

pub mod config;
pub mod engine;
pub mod stats;

pub use config::{ConversionConfig, DEFAULT_BATCH_SIZE, DEFAULT_COLUMNS, DEFAULT_TABLE_NAME};
pub use engine::{convert_records_to_sql, ConversionEngine, SqlScript};
pub use stats::ConversionStats;
