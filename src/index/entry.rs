//! Index entry definitions

use serde::{Deserialize, Serialize};

/// One live document in the collection manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// The document's public identifier
    pub id: String,

    /// Filename of the document inside the collection directory
    #[serde(rename = "file-name")]
    pub file_name: String,
}

impl IndexEntry {
    /// Build the entry for a freshly assigned identifier
    ///
    /// The filename is always `<id>.json`.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let file_name = format!("{}.json", id);
        Self { id, file_name }
    }
}
