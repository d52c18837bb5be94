//! JSON to SQL INSERT converter
//!
//! A Rust CLI tool and library for converting JSON arrays of healthcare
//! facility records (CNES establishment dumps) into batched SQL INSERT
//! statements for a fixed target table.

pub mod cli;
pub mod conversion;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod progress;

// Re-export commonly used types
pub use conversion::{convert_records_to_sql, ConversionConfig, ConversionEngine, SqlScript};
pub use error::{ConversionError, ConversionResult, ParseError};
pub use formatter::format_sql_value;
pub use parser::{JsonSource, Record};

use std::path::Path;

/// Convert records to SQL with the default configuration
pub fn convert_records(records: &[Record]) -> ConversionResult<SqlScript> {
    convert_records_with_config(records, &ConversionConfig::default())
}

/// Convert records to SQL with a custom configuration
pub fn convert_records_with_config(
    records: &[Record],
    config: &ConversionConfig,
) -> ConversionResult<SqlScript> {
    convert_records_to_sql(records, config)
}

/// Read a JSON file, convert it, and write the SQL next to it (or to
/// `output` when given). Returns the generated script either way.
pub fn convert_file(
    input: &Path,
    output: Option<&Path>,
    config: &ConversionConfig,
) -> ConversionResult<SqlScript> {
    let source = JsonSource::File(input.to_path_buf());
    let script = ConversionEngine::new(config.clone()).convert_from_source(&source)?;

    let output_path = match output {
        Some(path) => path.to_path_buf(),
        None => cli::path_mapping::derive_output_path(input),
    };

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConversionError::io(
                    format!("Failed to create output directory: {}", e),
                    Some(parent.to_path_buf()),
                )
            })?;
        }
    }

    std::fs::write(&output_path, &script.content).map_err(|e| {
        ConversionError::io(
            format!("Failed to write output file: {}", e),
            Some(output_path.clone()),
        )
    })?;

    Ok(script)
}
