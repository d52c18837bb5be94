//! Error types and handling infrastructure for JSON to SQL conversion

use std::fmt;
use std::path::PathBuf;

/// Main error type for conversion operations
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// The input file does not exist. Kept separate from parse failures so
    /// callers can tell "wrong path" apart from "broken content".
    #[error("input file not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("invalid configuration: {message}")]
    Configuration { message: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ConversionError {
    pub fn not_found(path: PathBuf) -> Self {
        Self::InputNotFound { path }
    }

    pub fn parse(message: String, location: Option<(usize, usize)>) -> Self {
        Self::Parse(ParseError::new(message, location))
    }

    pub fn io(message: String, path: Option<PathBuf>) -> Self {
        Self::Io { message, path }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }

    pub fn other(error: anyhow::Error) -> Self {
        Self::Other(error)
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::InputNotFound { path } => {
                format!("Input file not found: {}", path.display())
            }
            Self::Parse(err) => {
                if let Some((line, col)) = err.location {
                    format!(
                        "Malformed JSON input at line {}, column {}: {}",
                        line, col, err.message
                    )
                } else {
                    format!("Malformed JSON input: {}", err.message)
                }
            }
            Self::Io { message, path } => match path {
                Some(path) => format!("IO error on {}: {}", path.display(), message),
                None => format!("IO error: {}", message),
            },
            Self::Configuration { message } => {
                format!("Invalid configuration: {}", message)
            }
            Self::Other(err) => {
                format!("Unexpected error: {}", err)
            }
        }
    }

    /// True for the distinct "file not found" failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::InputNotFound { .. })
    }

    /// True for the distinct "malformed input" failure
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

/// JSON parsing errors
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub location: Option<(usize, usize)>,
    pub input_preview: Option<String>,
}

impl ParseError {
    pub fn new(message: String, location: Option<(usize, usize)>) -> Self {
        Self {
            message,
            location,
            input_preview: None,
        }
    }

    pub fn with_preview(mut self, preview: String) -> Self {
        self.input_preview = Some(preview);
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some((line, col)) = self.location {
            write!(f, " at line {}, column {}", line, col)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Convenience result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
