//! Error types for the Gladius library.
//!
//! Only the outer surfaces of the engine can fail: loading documents,
//! reading configuration and building analyzers. Query compilation,
//! evaluation and scoring never return errors; their anomalies are reported
//! as [`Diagnostic`](crate::query::Diagnostic) values instead.
//!
//! # Examples
//!
//! ```
//! use gladius::error::{GladiusError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(GladiusError::config("phrase_bonus must be finite"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Gladius operations.
#[derive(Error, Debug)]
pub enum GladiusError {
    /// I/O errors (opening data or config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// CSV structure errors while loading documents
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Analysis-related errors (tokenizer construction, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with GladiusError.
pub type Result<T> = std::result::Result<T, GladiusError>;

impl GladiusError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        GladiusError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        GladiusError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        GladiusError::Other(msg.into())
    }
}
