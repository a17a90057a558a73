//! Error types for the Canticle library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`CanticleError`] enum. The error philosophy is uneven on purpose:
//! malformed queries and failed index builds are surfaced as hard errors,
//! while per-query word lookups degrade to an empty result and are only
//! logged, so boolean composition stays total.

use std::io;

use thiserror::Error;

/// The main error type for Canticle operations.
#[derive(Error, Debug)]
pub enum CanticleError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed search query (unmatched brackets, missing operand, ...).
    /// Always aborts the query with no partial result.
    #[error("Syntax error: {0}")]
    Syntax(String),

    /// Index build or load errors.
    #[error("Index error: {0}")]
    Index(String),

    /// Storage-related errors.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Analysis-related errors (word splitting, stemming, ...).
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Corpus provider errors (a verse could not be read).
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error, mostly from corpus providers.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with CanticleError.
pub type Result<T> = std::result::Result<T, CanticleError>;

impl CanticleError {
    /// Create a new syntax error.
    pub fn syntax<S: Into<String>>(msg: S) -> Self {
        CanticleError::Syntax(msg.into())
    }

    /// Create a new index error.
    pub fn index<S: Into<String>>(msg: S) -> Self {
        CanticleError::Index(msg.into())
    }

    /// Create a new storage error.
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        CanticleError::Storage(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        CanticleError::Analysis(msg.into())
    }

    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        CanticleError::Corpus(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        CanticleError::Other(msg.into())
    }
}
