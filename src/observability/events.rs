//! Observable events for tallydb
//!
//! Events are explicit and typed.

use std::fmt;

use super::logger::Severity;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration and ingestion
    ConfigLoaded,
    DatasetLoaded,

    // Engine build
    BuildBegin,
    BuildComplete,
    BuildFailed,

    // Queries
    QueryPlanned,
    QueryExecuted,
    RangeQueryExecuted,
    RangeQueryRejected,
    LookupMissed,

    // Aggregation
    AggregationComplete,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::DatasetLoaded => "DATASET_LOADED",

            Event::BuildBegin => "ENGINE_BUILD_BEGIN",
            Event::BuildComplete => "ENGINE_BUILD_COMPLETE",
            Event::BuildFailed => "ENGINE_BUILD_FAILED",

            Event::QueryPlanned => "QUERY_PLANNED",
            Event::QueryExecuted => "QUERY_COMPLETE",
            Event::RangeQueryExecuted => "RANGE_QUERY_COMPLETE",
            Event::RangeQueryRejected => "RANGE_QUERY_REJECTED",
            Event::LookupMissed => "LOOKUP_MISSED",

            Event::AggregationComplete => "AGGREGATION_COMPLETE",
        }
    }

    /// Default severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::QueryPlanned
            | Event::QueryExecuted
            | Event::RangeQueryExecuted
            | Event::AggregationComplete
            | Event::LookupMissed => Severity::Trace,
            Event::BuildFailed | Event::RangeQueryRejected => Severity::Error,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_upper_snake() {
        let events = [
            Event::ConfigLoaded,
            Event::DatasetLoaded,
            Event::BuildBegin,
            Event::BuildComplete,
            Event::BuildFailed,
            Event::QueryPlanned,
            Event::QueryExecuted,
            Event::RangeQueryExecuted,
            Event::RangeQueryRejected,
            Event::LookupMissed,
            Event::AggregationComplete,
        ];
        for event in events {
            let s = event.as_str();
            assert!(!s.is_empty());
            assert!(s.chars().all(|c| c.is_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_query_events_are_trace() {
        assert_eq!(Event::QueryExecuted.severity(), Severity::Trace);
        assert_eq!(Event::BuildComplete.severity(), Severity::Info);
        assert_eq!(Event::BuildFailed.severity(), Severity::Error);
    }
}
