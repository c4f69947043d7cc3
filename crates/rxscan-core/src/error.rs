//! Error types for the rxscan-core library.
//!
//! Parsing itself never errors: a malformed pack code yields a [`PackRecord`]
//! with absent fields and `is_valid` false. Errors here cover the
//! presentation surface only.
//!
//! [`PackRecord`]: crate::models::pack::PackRecord

use thiserror::Error;

/// Main error type for the rxscan library.
#[derive(Error, Debug)]
pub enum Error {
    /// Serializing the record projection to JSON failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the rxscan library.
pub type Result<T> = std::result::Result<T, Error>;
