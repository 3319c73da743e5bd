//! Index Module
//!
//! The collection manifest: an ordered sequence of `{id, file-name}` entries
//! mirrored to a single JSON index file.
//!
//! ## Responsibilities
//! - Load the index file at open (bootstrap an empty one if absent)
//! - Rewrite the file whole after every mutation
//! - Linear id lookup (collection sizes are assumed modest)
//!
//! ## File Format
//! ```text
//! [
//!   {
//!     "id": "3e23e8160039594a33894f6564e1b134...",
//!     "file-name": "3e23e8160039594a33894f6564e1b134....json"
//!   }
//! ]
//! ```
//! Pretty-printed with 2-space indent, fully rewritten (not appended) on
//! every save.

mod entry;
mod manifest;

pub use entry::IndexEntry;
pub use manifest::Manifest;
