//! JSON parsing and record decoding module

pub mod directory;

use crate::error::{ConversionError, ConversionResult, ParseError, ParseResult};
use serde_json::{Map, Value};
use std::io::Read;
use std::path::PathBuf;

/// One facility record: a JSON object keyed by column name
pub type Record = Map<String, Value>;

/// Source for parsing operations
#[derive(Debug, Clone)]
pub enum JsonSource {
    String(String),
    File(PathBuf),
    Stdin,
}

impl JsonSource {
    /// Parse JSON from this source
    pub fn parse(&self) -> ConversionResult<Value> {
        match self {
            JsonSource::String(content) => parse_from_string(content).map_err(ConversionError::from),
            JsonSource::File(path) => parse_from_file(path),
            JsonSource::Stdin => parse_from_stdin().map_err(ConversionError::from),
        }
    }

    /// Parse the source and decode it into facility records.
    ///
    /// The input must be a single JSON array of objects; anything else is a
    /// malformed-input failure, not a generic one.
    pub fn parse_records(&self) -> ConversionResult<Vec<Record>> {
        let value = self.parse()?;
        decode_records(value).map_err(ConversionError::from)
    }

    /// Get a human-readable description of the source
    pub fn description(&self) -> String {
        match self {
            JsonSource::String(_) => "string input".to_string(),
            JsonSource::File(path) => format!("file: {}", path.display()),
            JsonSource::Stdin => "standard input".to_string(),
        }
    }
}

/// Decode a parsed JSON value into the record list
pub fn decode_records(value: Value) -> ParseResult<Vec<Record>> {
    let array = match value {
        Value::Array(items) => items,
        other => {
            return Err(ParseError::new(
                format!(
                    "Expected a top-level JSON array of records, found {}",
                    json_type_name(&other)
                ),
                None,
            ))
        }
    };

    let mut records = Vec::with_capacity(array.len());
    for (index, item) in array.into_iter().enumerate() {
        match item {
            Value::Object(map) => records.push(map),
            other => {
                return Err(ParseError::new(
                    format!(
                        "Record {} is not a JSON object (found {})",
                        index,
                        json_type_name(&other)
                    ),
                    None,
                ))
            }
        }
    }

    Ok(records)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parse JSON from a string
fn parse_from_string(content: &str) -> ParseResult<Value> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(ParseError::new("Empty JSON input".to_string(), None));
    }

    serde_json::from_str(trimmed).map_err(|e| {
        ParseError::new(format!("Invalid JSON: {}", e), extract_error_location(&e))
            .with_preview(get_error_preview(trimmed, &e))
    })
}

/// Parse JSON from a file, distinguishing a missing file from unreadable content
fn parse_from_file(path: &PathBuf) -> ConversionResult<Value> {
    if !path.exists() {
        return Err(ConversionError::not_found(path.clone()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConversionError::io(format!("Failed to read file: {}", e), Some(path.clone())))?;

    parse_from_string(&content).map_err(ConversionError::from)
}

/// Parse JSON from standard input
fn parse_from_stdin() -> ParseResult<Value> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| ParseError::new(format!("Failed to read stdin: {}", e), None))?;

    parse_from_string(buffer.trim())
}

/// Extract the (line, column) position from a serde_json error.
/// serde_json reports (0, 0) when the position is unknown.
fn extract_error_location(error: &serde_json::Error) -> Option<(usize, usize)> {
    if error.line() > 0 {
        Some((error.line(), error.column()))
    } else {
        None
    }
}

/// Get a short preview of the line the error occurred on
fn get_error_preview(content: &str, error: &serde_json::Error) -> String {
    if let Some((line, col)) = extract_error_location(error) {
        let lines: Vec<&str> = content.lines().collect();
        if line > 0 && line <= lines.len() {
            let error_line = lines[line - 1];
            let marker_offset = col.saturating_sub(1).min(error_line.len());
            return format!("{}\n{}^", error_line, " ".repeat(marker_offset));
        }
    }

    "Context not available".to_string()
}
