//! Database root handle
//!
//! Opens per-collection stores over one configured root directory. The root
//! is carried in the [`Config`] passed at open, never in process-wide state,
//! so multiple roots can coexist in one process.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::id::IdGenerator;
use crate::store::CollectionStore;

/// A database root: a directory holding one subdirectory per collection
pub struct Database {
    config: Config,
}

impl Database {
    /// Open a database root, creating the directory if missing
    pub fn open(config: Config) -> Result<Self> {
        fs::create_dir_all(&config.data_dir)?;
        debug!(root = %config.data_dir.display(), "database root opened");
        Ok(Self { config })
    }

    /// Open (or create) the named collection
    pub fn collection(&self, name: &str) -> Result<CollectionStore> {
        CollectionStore::open(&self.config, name)
    }

    /// Open the named collection with a caller-supplied identifier generator
    pub fn collection_with_generator(
        &self,
        name: &str,
        ids: Box<dyn IdGenerator>,
    ) -> Result<CollectionStore> {
        CollectionStore::open_with_generator(&self.config, name, ids)
    }

    /// Names of the collections that exist under this root, sorted
    pub fn collection_names(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();

        for entry in fs::read_dir(&self.config.data_dir)? {
            let entry = entry?;
            if entry.path().is_dir() {
                if let Ok(name) = entry.file_name().into_string() {
                    names.push(name);
                }
            }
        }

        names.sort();
        Ok(names)
    }

    /// Root directory of this database
    pub fn data_dir(&self) -> &Path {
        &self.config.data_dir
    }

    /// The configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
