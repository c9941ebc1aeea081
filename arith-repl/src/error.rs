//! Error handling module for the arith CLI.
//!
//! The lexer itself never fails; these errors cover everything around it:
//! configuration, argument validation and terminal I/O.

use thiserror::Error;

/// Main error type for the arith CLI application.
#[derive(Error, Debug)]
pub enum ArithError {
    /// Error when configuration cannot be found, parsed or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when user input is rejected before lexing.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when reading input or writing output fails.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON token output cannot be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using ArithError.
pub type Result<T> = std::result::Result<T, ArithError>;
