//! # Error Types
//!
//! This module defines error types used throughout the escpos-ir library.

use thiserror::Error;

/// Main error type for escpos-ir operations
#[derive(Debug, Error)]
pub enum EscposError {
    /// Token that is neither a mnemonic, a quoted literal, nor a number
    #[error("line {line}: unrecognized token '{token}'")]
    UnrecognizedToken { line: usize, token: String },

    /// Numeric literal outside 0-255 or with invalid digits
    #[error("line {line}: invalid number '{token}': {reason}")]
    NumericRange {
        line: usize,
        token: String,
        reason: String,
    },

    /// Quoted literal still open at the end of its line
    #[error("line {line}: unterminated quote starting at '{token}'")]
    UnterminatedQuote { line: usize, token: String },

    /// IR line that is not valid UTF-8
    #[error("line {line}: IR text is not valid UTF-8")]
    InvalidText { line: usize },

    /// Transport-level errors (resolve, connect)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Image processing error
    #[error("Image error: {0}")]
    Image(String),

    /// Printer profile could not be loaded
    #[error("Config error: {0}")]
    Config(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EscposError {
    /// Line number the error points at, for conversion errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::UnrecognizedToken { line, .. }
            | Self::NumericRange { line, .. }
            | Self::UnterminatedQuote { line, .. }
            | Self::InvalidText { line } => Some(*line),
            _ => None,
        }
    }
}
