//! Manifest persistence
//!
//! Owns the in-memory entry sequence and its backing index file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{FolioError, Result};

use super::IndexEntry;

/// The collection's index: ordered entries plus the index file they mirror
pub struct Manifest {
    /// Path of the backing index file
    path: PathBuf,

    /// Entries in insertion order; the single in-memory source of truth
    entries: Vec<IndexEntry>,
}

impl Manifest {
    /// Load the index file, bootstrapping an empty one if absent
    ///
    /// The empty state is persisted immediately so later reads never race
    /// against a missing index file. A present-but-unparsable file is an
    /// error; the collection is never silently reset to empty.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            let manifest = Self {
                path: path.to_path_buf(),
                entries: Vec::new(),
            };
            manifest.save()?;
            debug!(path = %path.display(), "created empty index file");
            return Ok(manifest);
        }

        let raw = fs::read_to_string(path)?;
        let entries: Vec<IndexEntry> =
            serde_json::from_str(&raw).map_err(|e| FolioError::CorruptIndex {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    /// Rewrite the index file in full (pretty-printed, 2-space indent)
    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Find an entry by id (linear scan)
    pub fn find(&self, id: &str) -> Option<&IndexEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Whether `id` has an entry
    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Append an entry; insertion order is list order
    pub fn push(&mut self, entry: IndexEntry) {
        self.entries.push(entry);
    }

    /// Remove the entry for `id`, returning it if present
    pub fn remove(&mut self, id: &str) -> Option<IndexEntry> {
        let pos = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(pos))
    }

    /// The entries in insertion order
    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Path of the backing index file
    pub fn path(&self) -> &Path {
        &self.path
    }
}
