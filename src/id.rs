//! Identifier generation
//!
//! An identifier doubles as the document's public `_id` and its filename
//! stem, so generators must yield filesystem-safe tokens.

use std::time::{SystemTime, UNIX_EPOCH};

use sha2::{Digest, Sha256};

/// Produces document identifiers, one per call
pub trait IdGenerator: Send + Sync {
    /// Produce the next identifier
    fn generate(&self) -> String;
}

/// SHA-256 digest of the current wall-clock timestamp
///
/// The timestamp (millisecond resolution) is rendered as decimal text and
/// hashed one-shot; the identifier is the 64-character lowercase hex digest.
///
/// Two calls within the same millisecond yield the same token — there is no
/// salt or counter. [`CollectionStore::create`](crate::CollectionStore::create)
/// rejects the duplicate rather than indexing the same id twice.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampIdGenerator;

impl TimestampIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for TimestampIdGenerator {
    fn generate(&self) -> String {
        // A clock before the epoch renders as 0; the digest stays well-formed.
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);

        let mut hasher = Sha256::new();
        hasher.update(millis.to_string().as_bytes());
        hex::encode(hasher.finalize())
    }
}
