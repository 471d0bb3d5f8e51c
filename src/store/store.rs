//! Immutable record store
//!
//! Holds validated records in the order they were supplied. That order is
//! the tie-break order for every derived structure.

use std::collections::HashMap;

use crate::errors::{TallyError, TallyResult};

use super::record::{RawRecord, Record, RecordId};

/// Ordered, immutable sequence of records with id lookup
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    positions: HashMap<RecordId, usize>,
}

impl RecordStore {
    /// Validate and store records.
    ///
    /// Fails on the first malformed or duplicate record in input order.
    /// No store is produced on failure.
    pub fn from_raw(raw: impl IntoIterator<Item = RawRecord>) -> TallyResult<Self> {
        let mut records = Vec::new();
        let mut positions = HashMap::new();

        for input in raw {
            let record = input.validate()?;
            if positions.contains_key(&record.id) {
                return Err(TallyError::record_format(record.id, "duplicate id"));
            }
            positions.insert(record.id, records.len());
            records.push(record);
        }

        Ok(Self { records, positions })
    }

    /// Total record count
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in original order
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Lookup by id
    pub fn get(&self, id: RecordId) -> TallyResult<&Record> {
        self.position(id)
            .map(|pos| &self.records[pos])
            .ok_or(TallyError::NotFound(id))
    }

    /// Position of a record in the original sequence
    pub fn position(&self, id: RecordId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    /// Record at a position, if in range
    pub fn at(&self, position: usize) -> Option<&Record> {
        self.records.get(position)
    }

    /// All ids in original order
    pub fn ids(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.records.iter().map(|r| r.id)
    }
}
