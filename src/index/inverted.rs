//! Inverted index over the record store
//!
//! # API
//!
//! - `build(store, fields)` - One pass over the store, all fields at once
//! - `lookup_eq(field, value)` - Bucket of ids for an exact value
//! - `is_indexed(field)` - Whether a field has an index
//!
//! Buckets keep ids in store order. Each record contributes exactly one id
//! per indexed field.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::store::{Field, RecordId, RecordStore};

/// Value buckets for a single string field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeIndex {
    buckets: BTreeMap<String, Vec<RecordId>>,
}

impl AttributeIndex {
    fn push(&mut self, key: String, id: RecordId) {
        self.buckets.entry(key).or_default().push(id);
    }

    /// Ids with the exact key, empty if the key is absent
    pub fn lookup(&self, key: &str) -> &[RecordId] {
        self.buckets.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct keys
    pub fn key_count(&self) -> usize {
        self.buckets.len()
    }

    /// Total number of ids across all buckets
    pub fn entry_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// (key, bucket) pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[RecordId])> {
        self.buckets.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

/// Field → value → ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvertedIndex {
    fields: BTreeMap<Field, AttributeIndex>,
}

impl InvertedIndex {
    /// Build indexes for `fields` in a single pass over the store.
    ///
    /// Callers pass only indexable fields; `EngineConfig::validate` rejects
    /// the rest before a build starts.
    pub fn build(store: &RecordStore, fields: &[Field]) -> Self {
        let mut indexes: BTreeMap<Field, AttributeIndex> = fields
            .iter()
            .map(|f| (*f, AttributeIndex::default()))
            .collect();

        for record in store.iter() {
            for (field, index) in indexes.iter_mut() {
                index.push(record.key(*field), record.id);
            }
        }

        Self { fields: indexes }
    }

    pub fn is_indexed(&self, field: Field) -> bool {
        self.fields.contains_key(&field)
    }

    /// Indexed fields in ascending order
    pub fn indexed_fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.fields.keys().copied()
    }

    pub fn attribute(&self, field: Field) -> Option<&AttributeIndex> {
        self.fields.get(&field)
    }

    /// Exact-match bucket.
    ///
    /// Indexed fields hold strings, so an unindexed field, a non-string
    /// value or an absent value all give an empty bucket.
    pub fn lookup_eq(&self, field: Field, value: &Value) -> &[RecordId] {
        let Some(index) = self.fields.get(&field) else {
            return &[];
        };
        let Some(key) = value.as_str() else {
            return &[];
        };
        index.lookup(key)
    }
}
