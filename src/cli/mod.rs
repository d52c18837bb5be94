//! Command-line interface module

use clap::Parser;
use std::path::PathBuf;

use crate::conversion::ConversionConfig;
use crate::error::{ConversionError, ConversionResult};

pub mod path_mapping;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "sqlconv")]
#[command(about = "Convert JSON facility records into batched SQL INSERT statements")]
#[command(version = "0.1.0")]
#[command(long_about = None)]
pub struct Args {
    /// Input JSON source (inline string, file, or directory)
    #[arg()]
    pub input: Option<String>,

    /// Output file path (default: <input>_insert.sql for file inputs, stdout otherwise)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Read JSON from standard input
    #[arg(long)]
    pub stdin: bool,

    /// Target table name (default: unidade_saude)
    #[arg(long)]
    pub table: Option<String>,

    /// Maximum records per INSERT statement (default: 1000)
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// File with one column name per line, replacing the built-in column list
    #[arg(long)]
    pub columns_file: Option<PathBuf>,

    /// Disable the terminal progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Output conversion statistics
    #[arg(long)]
    pub stats: bool,

    /// Recursively process directories
    #[arg(long)]
    pub recursive: bool,

    /// Continue converting other files when one file fails
    #[arg(long)]
    pub continue_on_error: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,
}

impl Args {
    /// Build the conversion configuration these arguments describe
    pub fn conversion_config(&self) -> ConversionResult<ConversionConfig> {
        let mut config = ConversionConfig::default();

        if let Some(table) = &self.table {
            config = config.with_table_name(table.clone());
        }

        if let Some(batch_size) = self.batch_size {
            config = config.with_batch_size(batch_size);
        }

        if let Some(columns_file) = &self.columns_file {
            config = config.with_columns(load_columns_file(columns_file)?);
        }

        // Progress is pointless when output would interleave with it
        config = config.with_progress(!self.no_progress && !self.quiet);

        config
            .validate()
            .map_err(ConversionError::configuration)?;

        Ok(config)
    }
}

/// Read a column list file: one column per line, blank lines and `#` comments skipped
pub fn load_columns_file(path: &PathBuf) -> ConversionResult<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        ConversionError::configuration(format!(
            "Cannot read columns file {}: {}",
            path.display(),
            e
        ))
    })?;

    let columns: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();

    if columns.is_empty() {
        return Err(ConversionError::configuration(format!(
            "Columns file {} contains no column names",
            path.display()
        )));
    }

    Ok(columns)
}
