//! Residual filtering
//!
//! Exact equality only. A record lacking the attribute never matches.

use crate::planner::Criterion;
use crate::store::Record;

/// Evaluates criteria against records
pub struct CriteriaFilter;

impl CriteriaFilter {
    /// All criteria must match (AND semantics). Empty criteria match.
    pub fn matches(record: &Record, criteria: &[Criterion]) -> bool {
        criteria
            .iter()
            .all(|c| record.field_equals(&c.field, &c.value))
    }
}
