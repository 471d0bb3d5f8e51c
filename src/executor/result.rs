//! Result types for query execution

use crate::planner::ScanType;
use crate::store::{Record, RecordId};

/// Records matched by a search, in store order
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<'a> {
    pub records: Vec<&'a Record>,
    pub scan_type: ScanType,
    /// Records examined after candidate selection
    pub candidate_count: usize,
}

impl<'a> SearchResult<'a> {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.records.iter().copied()
    }

    /// Ids in result order
    pub fn ids(&self) -> Vec<RecordId> {
        self.records.iter().map(|r| r.id).collect()
    }

    /// Owned copies of the matched records
    pub fn to_records(&self) -> Vec<Record> {
        self.records.iter().map(|r| (*r).clone()).collect()
    }
}
