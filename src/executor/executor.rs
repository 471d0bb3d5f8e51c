//! Query executor for tallydb
//!
//! Execution flow (strict order):
//! 1. Obtain candidate ids: bucket intersection, or the whole store
//! 2. Order candidates by store position
//! 3. Apply residual criteria by direct comparison
//! 4. Return matched records

use std::collections::HashSet;

use crate::index::InvertedIndex;
use crate::planner::{QueryPlan, ScanType};
use crate::store::{RecordId, RecordStore};

use super::filters::CriteriaFilter;
use super::result::SearchResult;

/// Executes plans against a store and its index
pub struct QueryExecutor<'a> {
    store: &'a RecordStore,
    index: &'a InvertedIndex,
}

impl<'a> QueryExecutor<'a> {
    pub fn new(store: &'a RecordStore, index: &'a InvertedIndex) -> Self {
        Self { store, index }
    }

    /// Executes a plan. Same plan + same store = same result, in store order.
    pub fn execute(&self, plan: &QueryPlan) -> SearchResult<'a> {
        let positions = match plan.scan_type {
            ScanType::FullScan => (0..self.store.len()).collect(),
            ScanType::IndexIntersection => self.intersect_positions(plan),
        };

        let candidate_count = positions.len();
        let records = positions
            .into_iter()
            .filter_map(|pos| self.store.at(pos))
            .filter(|record| CriteriaFilter::matches(record, &plan.residual))
            .collect();

        SearchResult {
            records,
            scan_type: plan.scan_type,
            candidate_count,
        }
    }

    /// Smallest bucket size across the plan's indexed criteria
    pub fn estimate_candidates(&self, plan: &QueryPlan) -> usize {
        match plan.scan_type {
            ScanType::FullScan => self.store.len(),
            ScanType::IndexIntersection => self
                .buckets(plan)
                .iter()
                .map(|b| b.len())
                .min()
                .unwrap_or(0),
        }
    }

    fn buckets(&self, plan: &QueryPlan) -> Vec<&'a [RecordId]> {
        plan.indexed
            .iter()
            .filter_map(|c| {
                c.resolved_field()
                    .map(|field| self.index.lookup_eq(field, &c.value))
            })
            .collect()
    }

    /// Intersect buckets by record id, starting from the smallest, and return
    /// the surviving store positions in ascending order.
    fn intersect_positions(&self, plan: &QueryPlan) -> Vec<usize> {
        let mut buckets = self.buckets(plan);
        buckets.sort_by_key(|b| b.len());

        let Some((smallest, rest)) = buckets.split_first() else {
            return Vec::new();
        };

        let others: Vec<HashSet<RecordId>> = rest
            .iter()
            .map(|b| b.iter().copied().collect())
            .collect();

        let mut positions: Vec<usize> = smallest
            .iter()
            .filter(|id| others.iter().all(|set| set.contains(*id)))
            .filter_map(|id| self.store.position(*id))
            .collect();

        // Bucket order is encounter order, but output must follow the store.
        positions.sort_unstable();
        positions.dedup();
        positions
    }
}
