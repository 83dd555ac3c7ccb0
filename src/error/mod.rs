//! Error handling for cvkit.
//!
//! The core engine (normalizer, predicates, scoring) is total and has no
//! error channel by design; [`CvError`] covers the storage boundary and
//! user-facing CLI validation only.

use std::io;

use thiserror::Error;

/// Main error type for cvkit operations.
#[derive(Error, Debug)]
pub enum CvError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Unknown template: {0} (expected one of: classic, modern, minimal)")]
    UnknownTemplate(String),

    #[error("Unknown skill category: {0} (expected one of: technical, soft, tools)")]
    UnknownCategory(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Result type alias using CvError.
pub type Result<T> = std::result::Result<T, CvError>;
