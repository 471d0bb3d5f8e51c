//! Metrics registry for tallydb
//!
//! - Counters only, monotonic
//! - Owned by one engine, reset only by rebuilding it
//! - Relaxed atomics so a shared engine needs no lock

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Operational counters
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    builds: AtomicU64,
    records_loaded: AtomicU64,
    queries_executed: AtomicU64,
    index_intersections: AtomicU64,
    full_scans: AtomicU64,
    candidates_examined: AtomicU64,
    range_queries: AtomicU64,
    aggregations: AtomicU64,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed build of `records` records
    pub fn record_build(&self, records: u64) {
        self.builds.fetch_add(1, Ordering::Relaxed);
        self.records_loaded.fetch_add(records, Ordering::Relaxed);
    }

    /// Record a criteria search
    pub fn record_query(&self, indexed: bool, candidates: u64) {
        self.queries_executed.fetch_add(1, Ordering::Relaxed);
        if indexed {
            self.index_intersections.fetch_add(1, Ordering::Relaxed);
        } else {
            self.full_scans.fetch_add(1, Ordering::Relaxed);
        }
        self.candidates_examined.fetch_add(candidates, Ordering::Relaxed);
    }

    /// Record a date range scan over `scanned` records
    pub fn record_range_query(&self, scanned: u64) {
        self.range_queries.fetch_add(1, Ordering::Relaxed);
        self.candidates_examined.fetch_add(scanned, Ordering::Relaxed);
    }

    pub fn increment_aggregations(&self) {
        self.aggregations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn queries_executed(&self) -> u64 {
        self.queries_executed.load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            builds: self.builds.load(Ordering::Relaxed),
            records_loaded: self.records_loaded.load(Ordering::Relaxed),
            queries_executed: self.queries_executed.load(Ordering::Relaxed),
            index_intersections: self.index_intersections.load(Ordering::Relaxed),
            full_scans: self.full_scans.load(Ordering::Relaxed),
            candidates_examined: self.candidates_examined.load(Ordering::Relaxed),
            range_queries: self.range_queries.load(Ordering::Relaxed),
            aggregations: self.aggregations.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of all counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MetricsSnapshot {
    pub builds: u64,
    pub records_loaded: u64,
    pub queries_executed: u64,
    pub index_intersections: u64,
    pub full_scans: u64,
    pub candidates_examined: u64,
    pub range_queries: u64,
    pub aggregations: u64,
}
