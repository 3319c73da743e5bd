//! # FolioDB
//!
//! A minimal per-collection JSON document store:
//! - One directory per collection, one JSON file per document
//! - A single index file per collection mapping identifiers to filenames
//! - Fail-soft reads (configurable strict mode)
//! - Serialized mutations behind a per-collection write lock
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 External HTTP Adapter                        │
//! │              (out of scope for this crate)                   │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     Database                                 │
//! │          (one root dir, named collections)                   │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                 CollectionStore                              │
//! │        (create / read / update / delete / list)              │
//! └──────────┬─────────────────────────────┬────────────────────┘
//!            │                             │
//!            ▼                             ▼
//!    ┌──────────────┐             ┌─────────────────┐
//!    │   Manifest   │             │ Document files  │
//!    │ (index file) │             │ (<id>.json)     │
//!    └──────────────┘             └─────────────────┘
//! ```
//!
//! The index is loaded into memory once when a collection is opened and is
//! the single source of truth thereafter; every mutation updates it first,
//! persists the affected document file, then rewrites the index file whole.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod document;
pub mod id;
pub mod index;
pub mod store;
pub mod database;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{FolioError, Result};
pub use config::{Config, ReadPolicy};
pub use document::Document;
pub use id::{IdGenerator, TimestampIdGenerator};
pub use index::IndexEntry;
pub use store::CollectionStore;
pub use database::Database;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of FolioDB
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
