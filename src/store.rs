//! Collection Store
//!
//! The persistence engine for one named collection.
//!
//! ## Responsibilities
//! - Keep the in-memory index and the on-disk files consistent
//! - Serialize mutating operations
//! - Apply the configured read policy on the document load path
//!
//! ## Concurrency Model: Single-Writer / Multiple-Reader
//!
//! - **Mutations** (create/update/delete): Serialized by `write_lock`
//!   - Only ONE mutating operation at a time
//!   - Must acquire: write_lock → document file → manifest (write)
//!
//! - **Reads** (read/list): Concurrent at the manifest level
//!   - No write_lock needed
//!   - Manifest uses an internal RwLock (many concurrent readers)
//!   - Document files are loaded outside any lock
//!
//! There is no file locking against external writers; the collection
//! directory is assumed to have a single in-process owner.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use parking_lot::{Mutex, RwLock};
use tracing::{debug, warn};

use crate::config::{Config, ReadPolicy};
use crate::document::{Document, DOC_ID};
use crate::error::{FolioError, Result};
use crate::id::{IdGenerator, TimestampIdGenerator};
use crate::index::{IndexEntry, Manifest};

/// Durable CRUD over the documents of one named collection
///
/// The index is loaded once at open and is the single in-memory source of
/// truth afterwards. Every mutation updates it first, persists the affected
/// document file, then rewrites the whole index file. A crash between the
/// document write and the index rewrite can leave an orphan document file;
/// that window is accepted and never auto-repaired.
pub struct CollectionStore {
    /// Collection name (also the index file stem)
    name: String,

    /// Collection directory: {data_dir}/{name}
    dir: PathBuf,

    /// Read-path failure policy
    read_policy: ReadPolicy,

    /// In-memory index, mirrored to the index file (internal RwLock)
    manifest: RwLock<Manifest>,

    /// Identifier generator (trait object so tests can substitute one)
    ids: Box<dyn IdGenerator>,

    /// Serializes mutating operations (create/update/delete)
    write_lock: Mutex<()>,
}

impl CollectionStore {
    /// Open or create the named collection under the configured root
    ///
    /// On open:
    /// 1. Validate the collection name
    /// 2. Create the database root and collection directory if missing
    /// 3. Load the index (an absent index file is initialized empty and
    ///    persisted immediately; an unparsable one fails the open)
    pub fn open(config: &Config, name: &str) -> Result<Self> {
        Self::open_with_generator(config, name, Box::new(TimestampIdGenerator::new()))
    }

    /// Open with a caller-supplied identifier generator
    pub fn open_with_generator(
        config: &Config,
        name: &str,
        ids: Box<dyn IdGenerator>,
    ) -> Result<Self> {
        validate_collection_name(name)?;

        // Step 1: Ensure the database root and collection directory exist
        fs::create_dir_all(&config.data_dir)?;
        let dir = config.data_dir.join(name);
        fs::create_dir_all(&dir)?;

        // Step 2: Load the index
        let index_path = dir.join(format!("{}.json", name));
        let manifest = Manifest::load(&index_path)?;

        debug!(
            collection = name,
            documents = manifest.len(),
            "collection opened"
        );

        Ok(Self {
            name: name.to_string(),
            dir,
            read_policy: config.read_policy,
            manifest: RwLock::new(manifest),
            ids,
            write_lock: Mutex::new(()),
        })
    }

    /// Create a document from the caller's fields
    ///
    /// Steps:
    /// 1. Generate a fresh identifier (rejected if already indexed)
    /// 2. Write the document file `<id>.json`
    /// 3. Append the index entry and rewrite the index file
    ///
    /// Returns the stored document including its assigned `_id`. A
    /// caller-supplied `_id` is discarded; the generated identifier is
    /// authoritative. If the index rewrite fails after the document write,
    /// the document file stays behind as an orphan and the error propagates.
    pub fn create(&self, body: Document) -> Result<Document> {
        let _write_guard = self.write_lock.lock();

        // Step 1: Assign an identifier
        let id = self.ids.generate();
        if self.manifest.read().contains(&id) {
            warn!(collection = %self.name, id = %id, "generated id already indexed");
            return Err(FolioError::DuplicateId(id));
        }

        if body.get(DOC_ID).is_some() {
            warn!(collection = %self.name, id = %id, "discarding caller-supplied _id on create");
        }

        // Step 2: Write the document file
        let entry = IndexEntry::new(id.as_str());
        let stored = body.into_stored(&id);
        self.write_document(&entry.file_name, &stored)?;

        // Step 3: Append to the in-memory index and rewrite the index file
        let mut manifest = self.manifest.write();
        manifest.push(entry);
        manifest.save()?;

        debug!(collection = %self.name, id = %id, "document created");
        Ok(stored)
    }

    /// Read a document by id
    ///
    /// Unknown ids return `Ok(None)`. A missing or unparsable document file
    /// also reads as `Ok(None)` under [`ReadPolicy::Lenient`]; under
    /// [`ReadPolicy::Strict`] it surfaces as
    /// [`FolioError::DocumentUnreadable`].
    pub fn read(&self, id: &str) -> Result<Option<Document>> {
        let file_name = match self.manifest.read().find(id) {
            Some(entry) => entry.file_name.clone(),
            None => return Ok(None),
        };

        self.load_document(id, &file_name)
    }

    /// Merge a partial body into an existing document
    ///
    /// Unknown ids are a logged no-op. The stored document becomes the
    /// shallow union of its current fields and `partial`, the caller's
    /// fields winning on collision — except `_id`, which is never updatable
    /// and is dropped from the body. The index is unchanged: filename and
    /// id are stable across updates.
    pub fn update(&self, id: &str, mut partial: Document) -> Result<()> {
        let _write_guard = self.write_lock.lock();

        let file_name = match self.manifest.read().find(id) {
            Some(entry) => entry.file_name.clone(),
            None => {
                warn!(collection = %self.name, id, "update for unknown id ignored");
                return Ok(());
            }
        };

        if let Some(supplied) = partial.remove(DOC_ID) {
            if supplied.as_str() != Some(id) {
                warn!(collection = %self.name, id, "ignoring _id field in update body");
            }
        }

        // An unreadable current document degrades to an empty base under the
        // lenient policy; `_id` is re-asserted from the index entry either way.
        let current = self.load_document(id, &file_name)?.unwrap_or_default();
        let merged = current.merged_with(&partial).into_stored(id);
        self.write_document(&file_name, &merged)?;

        debug!(collection = %self.name, id, "document updated");
        Ok(())
    }

    /// List all documents in index order
    ///
    /// Full materialization, no pagination. Under [`ReadPolicy::Lenient`],
    /// entries whose file fails to load are dropped from the result; under
    /// [`ReadPolicy::Strict`] the first failure propagates.
    pub fn list(&self) -> Result<Vec<Document>> {
        // Snapshot the entries so document loads run without the index lock
        let entries: Vec<IndexEntry> = self.manifest.read().entries().to_vec();

        let mut documents = Vec::with_capacity(entries.len());
        for entry in &entries {
            if let Some(doc) = self.load_document(&entry.id, &entry.file_name)? {
                documents.push(doc);
            }
        }

        Ok(documents)
    }

    /// Delete a document by id
    ///
    /// Unknown ids are a logged no-op, so a second delete of the same id
    /// does nothing. A document file that is already gone must not strand
    /// its index entry: NotFound from the filesystem is tolerated and the
    /// entry is removed anyway. Any other I/O failure propagates before the
    /// index is touched.
    pub fn delete(&self, id: &str) -> Result<()> {
        let _write_guard = self.write_lock.lock();

        let file_name = match self.manifest.read().find(id) {
            Some(entry) => entry.file_name.clone(),
            None => {
                warn!(collection = %self.name, id, "delete for unknown id ignored");
                return Ok(());
            }
        };

        // Step 1: Remove the document file
        match fs::remove_file(self.dir.join(&file_name)) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(collection = %self.name, id, file_name = %file_name, "document file already absent");
            }
            Err(e) => return Err(e.into()),
        }

        // Step 2: Remove the index entry and rewrite the index file
        let mut manifest = self.manifest.write();
        manifest.remove(id);
        manifest.save()?;

        debug!(collection = %self.name, id, "document deleted");
        Ok(())
    }

    // =========================================================================
    // Accessors (for callers and tests)
    // =========================================================================

    /// Collection name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Collection directory on disk
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Number of live documents in the index
    pub fn document_count(&self) -> usize {
        self.manifest.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.manifest.read().is_empty()
    }

    /// Whether `id` is present in the index
    pub fn contains(&self, id: &str) -> bool {
        self.manifest.read().contains(id)
    }

    /// The configured read-path failure policy
    pub fn read_policy(&self) -> ReadPolicy {
        self.read_policy
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Write one document file (pretty-printed, fully rewritten)
    fn write_document(&self, file_name: &str, document: &Document) -> Result<()> {
        let json = serde_json::to_string_pretty(document)?;
        fs::write(self.dir.join(file_name), json)?;
        Ok(())
    }

    /// Load and parse one document file, applying the read policy
    fn load_document(&self, id: &str, file_name: &str) -> Result<Option<Document>> {
        let path = self.dir.join(file_name);

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) => return self.read_failure(id, file_name, &e.to_string()),
        };

        match serde_json::from_str(&raw) {
            Ok(document) => Ok(Some(document)),
            Err(e) => self.read_failure(id, file_name, &e.to_string()),
        }
    }

    /// Resolve a read-path failure according to the configured policy
    fn read_failure(&self, id: &str, file_name: &str, reason: &str) -> Result<Option<Document>> {
        match self.read_policy {
            ReadPolicy::Lenient => {
                debug!(
                    collection = %self.name,
                    id,
                    file_name,
                    reason,
                    "unreadable document treated as absent"
                );
                Ok(None)
            }
            ReadPolicy::Strict => Err(FolioError::DocumentUnreadable {
                id: id.to_string(),
                reason: reason.to_string(),
            }),
        }
    }
}

/// Collection names become directory and file names; reject anything that
/// could escape the database root.
fn validate_collection_name(name: &str) -> Result<()> {
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(FolioError::InvalidCollectionName(name.to_string()));
    }
    Ok(())
}
