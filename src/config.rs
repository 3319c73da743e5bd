//! Configuration for FolioDB
//!
//! Centralized configuration with sensible defaults. The database root is an
//! explicit value here, not a process-wide constant, so multiple roots can
//! coexist in one process (and in tests).

use std::path::PathBuf;

/// Main configuration for a FolioDB database root
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for all collections.
    /// Internal structure:
    ///   {data_dir}/
    ///     └── {collection}/
    ///         ├── {collection}.json   (index file)
    ///         └── {id}.json           (one per document)
    pub data_dir: PathBuf,

    // -------------------------------------------------------------------------
    // Read Path Configuration
    // -------------------------------------------------------------------------
    /// How to treat document files that are missing or unparsable on read
    pub read_policy: ReadPolicy,
}

/// Read-path failure policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadPolicy {
    /// A missing or corrupt document file reads as absent; `list` drops it.
    /// This matches the store's historical behavior.
    Lenient,

    /// A missing or corrupt document file surfaces as
    /// [`DocumentUnreadable`](crate::FolioError::DocumentUnreadable).
    Strict,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./foliodb_data"),
            read_policy: ReadPolicy::Lenient,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the database root directory
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the read-path failure policy
    pub fn read_policy(mut self, policy: ReadPolicy) -> Self {
        self.config.read_policy = policy;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
