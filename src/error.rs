//! Error types for the kusari library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`KusariError`] enum. Constructor helpers exist for the common cases so
//! call sites can write `KusariError::analysis("...")` instead of spelling
//! out the variant.
//!
//! # Examples
//!
//! ```
//! use kusari::error::{KusariError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(KusariError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for kusari operations.
#[derive(Error, Debug)]
pub enum KusariError {
    /// I/O errors (reading corpus files, schema scripts, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (morphological analysis, tokenization)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Schema-script errors (missing or unreadable DDL)
    #[error("Schema error: {0}")]
    Schema(String),

    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Errors surfaced by the SQLite driver
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with KusariError.
pub type Result<T> = std::result::Result<T, KusariError>;

impl KusariError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        KusariError::Analysis(msg.into())
    }

    /// Create a new schema error.
    pub fn schema<S: Into<String>>(msg: S) -> Self {
        KusariError::Schema(msg.into())
    }

    /// Create a new storage error.
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        KusariError::Storage(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        KusariError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        KusariError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
