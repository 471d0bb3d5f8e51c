//! Query planner
//!
//! Splits a criteria set into the part the inverted index can answer and
//! the residual that must be checked record by record.
//!
//! Indexed criteria are always used when present, even alongside residual
//! criteria. Only the residual is evaluated by scanning the candidates.

use serde::Serialize;

use crate::index::InvertedIndex;

use super::ast::{Criteria, Criterion};

/// How candidates are obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScanType {
    /// Intersection of index buckets
    IndexIntersection,
    /// Every record in the store
    FullScan,
}

impl ScanType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanType::IndexIntersection => "INDEX_INTERSECTION",
            ScanType::FullScan => "FULL_SCAN",
        }
    }
}

/// Immutable query plan
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPlan {
    pub scan_type: ScanType,
    /// Criteria served by the inverted index
    pub indexed: Vec<Criterion>,
    /// Criteria applied by direct field comparison
    pub residual: Vec<Criterion>,
}

impl QueryPlan {
    pub fn is_full_scan(&self) -> bool {
        self.scan_type == ScanType::FullScan
    }
}

/// Stateless planner over a built index
pub struct QueryPlanner<'a> {
    index: &'a InvertedIndex,
}

impl<'a> QueryPlanner<'a> {
    pub fn new(index: &'a InvertedIndex) -> Self {
        Self { index }
    }

    /// Partition criteria, preserving caller order within each side.
    pub fn plan(&self, criteria: &Criteria) -> QueryPlan {
        let (indexed, residual): (Vec<Criterion>, Vec<Criterion>) =
            criteria.iter().cloned().partition(|c| {
                c.resolved_field()
                    .map(|f| self.index.is_indexed(f))
                    .unwrap_or(false)
            });

        let scan_type = if indexed.is_empty() {
            ScanType::FullScan
        } else {
            ScanType::IndexIntersection
        };

        QueryPlan {
            scan_type,
            indexed,
            residual,
        }
    }
}
