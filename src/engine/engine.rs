//! The query engine
//!
//! Builds the store, grouping views and inverted index together from one
//! input sequence. Either the whole build succeeds or no engine exists.
//! After construction nothing is mutated except the metrics counters, so an
//! engine can be shared across threads without locking.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::aggregate::{self, PriceStatistics};
use crate::errors::TallyResult;
use crate::executor::{scan_date_range, DateRange, QueryExecutor, SearchResult};
use crate::grouping::{GroupBy, GroupingView, GroupingViews};
use crate::index::InvertedIndex;
use crate::observability::{log_event_with_fields, Event, Logger, MetricsRegistry, ObservationScope};
use crate::planner::{Criteria, ExplainPlan, QueryPlan, QueryPlanner};
use crate::store::{Field, RawRecord, Record, RecordId, RecordStore};

use super::config::EngineConfig;

/// In-memory indexed query engine over an immutable record set
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    store: RecordStore,
    views: GroupingViews,
    index: InvertedIndex,
    logger: Logger,
    metrics: MetricsRegistry,
}

impl Engine {
    /// Build with the default configuration
    pub fn new(raw: impl IntoIterator<Item = RawRecord>) -> TallyResult<Self> {
        Self::with_config(raw, EngineConfig::default())
    }

    /// Validate config and records, then derive views and index.
    pub fn with_config(
        raw: impl IntoIterator<Item = RawRecord>,
        config: EngineConfig,
    ) -> TallyResult<Self> {
        config.validate()?;
        let logger = config.logger();

        let scope = ObservationScope::new(
            &logger,
            "ENGINE_BUILD",
            Event::BuildBegin,
            Event::BuildComplete,
            Event::BuildFailed,
        );

        let store = match RecordStore::from_raw(raw) {
            Ok(store) => store,
            Err(e) => {
                scope.fail(&e.to_string());
                return Err(e);
            }
        };

        let views = GroupingViews::build(&store);
        let index = InvertedIndex::build(&store, &config.indexed_fields);

        let records = store.len().to_string();
        let indexed: Vec<&str> = index.indexed_fields().map(|f| f.as_str()).collect();
        let indexed = indexed.join(",");
        scope.complete_with_fields(&[
            ("records", records.as_str()),
            ("indexed_fields", indexed.as_str()),
        ]);

        let metrics = MetricsRegistry::new();
        metrics.record_build(store.len() as u64);

        Ok(Self {
            config,
            store,
            views,
            index,
            logger,
            metrics,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn views(&self) -> &GroupingViews {
        &self.views
    }

    pub fn view(&self, group_by: GroupBy) -> &GroupingView {
        self.views.view(group_by)
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    pub fn metrics(&self) -> &MetricsRegistry {
        &self.metrics
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Lookup by id; an unknown id is `NotFound`
    pub fn get(&self, id: RecordId) -> TallyResult<&Record> {
        self.store.get(id).inspect_err(|_| {
            let id = id.to_string();
            log_event_with_fields(&self.logger, Event::LookupMissed, &[("id", id.as_str())]);
        })
    }

    /// Plan without executing
    pub fn plan(&self, criteria: &Criteria) -> QueryPlan {
        QueryPlanner::new(&self.index).plan(criteria)
    }

    /// Describe how a criteria set would be answered
    pub fn explain(&self, criteria: &Criteria) -> ExplainPlan {
        let plan = self.plan(criteria);
        let estimate = QueryExecutor::new(&self.store, &self.index).estimate_candidates(&plan);
        ExplainPlan::from_plan(&plan, estimate)
    }

    /// Records matching every criterion, in store order.
    ///
    /// Empty criteria return the whole store.
    pub fn search(&self, criteria: &Criteria) -> SearchResult<'_> {
        let plan = self.plan(criteria);
        let indexed = plan.indexed.len().to_string();
        let residual = plan.residual.len().to_string();
        log_event_with_fields(
            &self.logger,
            Event::QueryPlanned,
            &[
                ("indexed", indexed.as_str()),
                ("residual", residual.as_str()),
                ("scan_type", plan.scan_type.as_str()),
            ],
        );

        let result = QueryExecutor::new(&self.store, &self.index).execute(&plan);

        self.metrics
            .record_query(!plan.is_full_scan(), result.candidate_count as u64);
        let candidates = result.candidate_count.to_string();
        let matched = result.len().to_string();
        log_event_with_fields(
            &self.logger,
            Event::QueryExecuted,
            &[("candidates", candidates.as_str()), ("matched", matched.as_str())],
        );
        result
    }

    /// Inclusive date range scan with `YYYY-MM-DD` bounds
    pub fn search_by_date_range(&self, start: &str, end: &str) -> TallyResult<Vec<&Record>> {
        let range = DateRange::parse(start, end).inspect_err(|e| {
            let reason = e.to_string();
            log_event_with_fields(&self.logger, Event::RangeQueryRejected, &[("reason", reason.as_str())]);
        })?;
        Ok(self.scan_range(&range))
    }

    /// Inclusive date range scan with typed bounds
    pub fn search_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<&Record> {
        self.scan_range(&DateRange::new(start, end))
    }

    fn scan_range(&self, range: &DateRange) -> Vec<&Record> {
        let matched = scan_date_range(&self.store, range);
        let scanned = if range.is_empty() { 0 } else { self.store.len() };
        self.metrics.record_range_query(scanned as u64);
        let count = matched.len().to_string();
        log_event_with_fields(&self.logger, Event::RangeQueryExecuted, &[("matched", count.as_str())]);
        matched
    }

    /// Top `n` values of `field` by count, ties in first-occurrence order
    pub fn most_frequent(&self, field: Field, n: usize) -> Vec<(String, usize)> {
        let top = aggregate::most_frequent(&self.store, field, n);
        self.record_aggregation("most_frequent", field.as_str());
        top
    }

    /// Price totals per group
    pub fn sum_by(&self, group_by: GroupBy) -> BTreeMap<String, f64> {
        let sums = aggregate::sum_by(self.view(group_by), &self.store);
        self.record_aggregation("sum_by", group_by.as_str());
        sums
    }

    /// Price statistics for one group; `None` if the group has no records
    pub fn statistics(&self, group_by: GroupBy, key: &str) -> Option<PriceStatistics> {
        let prices: Vec<f64> = self
            .view(group_by)
            .records(key, &self.store)
            .map(|r| r.price)
            .collect();
        self.record_aggregation("statistics", group_by.as_str());
        PriceStatistics::from_prices(&prices)
    }

    /// Price statistics for one vendor; `None` for a vendor with no sales
    pub fn vendor_statistics(&self, vendor: &str) -> Option<PriceStatistics> {
        self.statistics(GroupBy::Vendor, vendor)
    }

    fn record_aggregation(&self, kind: &str, attribute: &str) {
        self.metrics.increment_aggregations();
        log_event_with_fields(
            &self.logger,
            Event::AggregationComplete,
            &[("attribute", attribute), ("kind", kind)],
        );
    }
}
