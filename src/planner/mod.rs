//! Query Planner subsystem for tallydb
//!
//! # Design Principles
//!
//! - Deterministic: same criteria and index → same plan
//! - Index first: every indexed criterion narrows the candidate set
//! - Residual second: the rest is compared field by field
//!
//! The plan never changes which records match, only how they are found.

mod ast;
mod explain;
mod planner;

pub use ast::{Criteria, Criterion};
pub use explain::ExplainPlan;
pub use planner::{QueryPlan, QueryPlanner, ScanType};
