//! Error types for the UKL translator.
//!
//! This module provides a unified error type [`UklError`] that covers
//! all error conditions that can occur while reading, parsing and
//! rendering a UKL document.

use thiserror::Error;

/// Result type alias using [`UklError`].
pub type Result<T> = std::result::Result<T, UklError>;

/// Unified error type for all UKL operations.
#[derive(Error, Debug)]
pub enum UklError {
    // ============ Syntax Errors ============
    /// A `var` line that does not match `var <name> = <value>;`
    #[error("line {line}: invalid constant declaration: {text}")]
    InvalidDeclaration { line: usize, text: String },

    /// Constant name outside `[a-z]+`
    #[error("line {line}: invalid constant name: {name}")]
    InvalidConstantName { line: usize, name: String },

    /// Reference to a constant that has not been declared (yet)
    #[error("line {line}: unknown constant: {name}")]
    UnknownConstant { line: usize, name: String },

    /// Dictionary key outside `[a-z_]+`
    #[error("line {line}: invalid key name: {key}")]
    InvalidKey { line: usize, key: String },

    /// Dictionary segment without a `:` separator
    #[error("line {line}: invalid pair: {pair}")]
    InvalidPair { line: usize, pair: String },

    /// Value that cannot be classified or is malformed
    #[error("line {line}: {message}: {text}")]
    InvalidValue {
        line: usize,
        message: String,
        text: String,
    },

    /// Integer literal that does not fit in 64 bits
    #[error("line {line}: integer out of range: {text}")]
    IntegerOutOfRange { line: usize, text: String },

    /// Input ended while a dictionary was still open
    #[error("line {line}: unterminated dictionary")]
    UnterminatedDictionary { line: usize },

    /// Dictionary nesting exceeded the configured limit
    #[error("line {line}: dictionary nesting too deep (limit {limit})")]
    NestingTooDeep { line: usize, limit: usize },

    // ============ I/O Errors ============
    /// Input file does not exist
    #[error("file '{path}' not found")]
    FileNotFound { path: String },

    /// Error reading the input file
    #[error("Failed to read input file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ============ Output Errors ============
    /// TOML rendering failed
    #[error("TOML output error: {0}")]
    Toml(#[from] toml::ser::Error),

    /// JSON rendering failed
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),
}

impl UklError {
    /// Create an invalid value error
    pub fn invalid_value(line: usize, message: impl Into<String>, text: impl Into<String>) -> Self {
        Self::InvalidValue {
            line,
            message: message.into(),
            text: text.into(),
        }
    }

    /// Create an error for a file that could not be read.
    pub fn file_read(path: &std::path::Path, source: std::io::Error) -> Self {
        let path = path.display().to_string();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileReadError { path, source }
        }
    }

    /// Whether this error was raised by the parser for malformed input.
    pub fn is_syntax(&self) -> bool {
        !matches!(
            self,
            Self::FileNotFound { .. } | Self::FileReadError { .. } | Self::Toml(_) | Self::Json(_)
        )
    }

    /// Line number of the offending logical line, for syntax errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::InvalidDeclaration { line, .. }
            | Self::InvalidConstantName { line, .. }
            | Self::UnknownConstant { line, .. }
            | Self::InvalidKey { line, .. }
            | Self::InvalidPair { line, .. }
            | Self::InvalidValue { line, .. }
            | Self::IntegerOutOfRange { line, .. }
            | Self::UnterminatedDictionary { line }
            | Self::NestingTooDeep { line, .. } => Some(*line),
            _ => None,
        }
    }
}
