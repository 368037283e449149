//! Error types for the Spamsift library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`SpamsiftError`] enum. Validation errors (mismatched input lengths, an
//! empty training set, predicting with an untrained model) indicate caller
//! bugs and fail fast; I/O and snapshot errors are surfaced explicitly so a
//! failed `load` can never be mistaken for an empty, validly-trained model.
//!
//! # Examples
//!
//! ```
//! use spamsift::error::{Result, SpamsiftError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SpamsiftError::invalid_argument("bad input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Spamsift operations.
#[derive(Error, Debug)]
pub enum SpamsiftError {
    /// I/O errors (snapshot and dataset file operations).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Model-related errors (training, prediction preconditions).
    #[error("Model error: {0}")]
    Model(String),

    /// Structural problems in a parsed model snapshot.
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// Dataset-related errors.
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SpamsiftError.
pub type Result<T> = std::result::Result<T, SpamsiftError>;

impl SpamsiftError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SpamsiftError::Analysis(msg.into())
    }

    /// Create a new model error.
    pub fn model<S: Into<String>>(msg: S) -> Self {
        SpamsiftError::Model(msg.into())
    }

    /// Create a new snapshot error.
    pub fn snapshot<S: Into<String>>(msg: S) -> Self {
        SpamsiftError::Snapshot(msg.into())
    }

    /// Create a new dataset error.
    pub fn dataset<S: Into<String>>(msg: S) -> Self {
        SpamsiftError::Dataset(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SpamsiftError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SpamsiftError::Other(msg.into())
    }
}
