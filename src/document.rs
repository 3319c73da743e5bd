//! Document model
//!
//! A document is an ordered mapping of field names to JSON values, always
//! carrying the reserved `_id` field assigned by the store at creation time.
//! Field order is preserved so a document round-trips byte-identically.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reserved field carrying the store-assigned identifier
pub const DOC_ID: &str = "_id";

/// A JSON document
///
/// Serializes transparently as a JSON object, so any
/// `{"field": value, ...}` body deserializes directly into a `Document`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    fields: Map<String, Value>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a field value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Set a field value, returning the previous one if any
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.fields.insert(key.into(), value)
    }

    /// Remove a field, preserving the order of the remaining fields
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.fields.shift_remove(key)
    }

    /// The store-assigned identifier, if this document has been stored
    pub fn id(&self) -> Option<&str> {
        self.fields.get(DOC_ID).and_then(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Build the stored form of this document: `_id` first, then the
    /// remaining fields in their original order. Any caller-supplied `_id`
    /// is discarded; the store's identifier is authoritative.
    pub fn into_stored(self, id: impl Into<String>) -> Document {
        let mut fields = Map::with_capacity(self.fields.len() + 1);
        fields.insert(DOC_ID.to_string(), Value::String(id.into()));
        for (key, value) in self.fields {
            if key != DOC_ID {
                fields.insert(key, value);
            }
        }
        Document { fields }
    }

    /// Shallow union of this document and `partial`; `partial`'s fields win
    /// on key collision, existing fields keep their position.
    pub fn merged_with(&self, partial: &Document) -> Document {
        let mut fields = self.fields.clone();
        for (key, value) in &partial.fields {
            fields.insert(key.clone(), value.clone());
        }
        Document { fields }
    }

    /// Borrow the underlying field map
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Consume the document, yielding the field map
    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }
}

impl From<Map<String, Value>> for Document {
    fn from(fields: Map<String, Value>) -> Self {
        Document { fields }
    }
}
