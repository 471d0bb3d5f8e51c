//! Explain output for query plans
//!
//! Deterministic description of how a criteria set would be answered,
//! without executing it.

use serde::Serialize;

use super::planner::{QueryPlan, ScanType};

/// Explain plan output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplainPlan {
    pub scan_type: ScanType,
    /// `field = value` for each index lookup
    pub index_lookups: Vec<String>,
    /// `field = value` for each residual comparison
    pub residual_filters: Vec<String>,
    /// Size of the smallest bucket, or the store size for a full scan
    pub estimated_candidates: usize,
}

impl ExplainPlan {
    pub fn from_plan(plan: &QueryPlan, estimated_candidates: usize) -> Self {
        let render = |c: &super::ast::Criterion| format!("{} = {}", c.field, c.value);
        Self {
            scan_type: plan.scan_type,
            index_lookups: plan.indexed.iter().map(render).collect(),
            residual_filters: plan.residual.iter().map(render).collect(),
            estimated_candidates,
        }
    }
}
