//! Error types for FolioDB
//!
//! Provides a unified error type for all operations.
//!
//! Read-path failures under the default lenient policy degrade to an absent
//! result instead of surfacing here; write-path failures always propagate.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using FolioError
pub type Result<T> = std::result::Result<T, FolioError>;

/// Unified error type for FolioDB operations
#[derive(Debug, Error)]
pub enum FolioError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Index Errors
    // -------------------------------------------------------------------------
    /// The index file exists but is not valid JSON. The store refuses to
    /// open rather than resetting the collection to empty.
    #[error("index file {path:?} is corrupt: {reason}")]
    CorruptIndex { path: PathBuf, reason: String },

    /// The identifier generator produced an id that is already indexed.
    #[error("duplicate document id: {0}")]
    DuplicateId(String),

    // -------------------------------------------------------------------------
    // Document Errors
    // -------------------------------------------------------------------------
    /// A document file referenced by the index is missing or unparsable.
    /// Only raised under [`ReadPolicy::Strict`](crate::ReadPolicy::Strict);
    /// the lenient policy reads this as "not found".
    #[error("document file for '{id}' is unreadable: {reason}")]
    DocumentUnreadable { id: String, reason: String },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("invalid collection name: {0:?}")]
    InvalidCollectionName(String),
}
