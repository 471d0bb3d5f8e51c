//! Query Executor subsystem for tallydb
//!
//! The executor consumes plans and produces deterministic results.
//!
//! # Execution Flow (strict order)
//!
//! 1. Intersect index buckets for indexed criteria, or take the whole store
//! 2. Sort candidates by store position
//! 3. Filter by residual criteria
//! 4. Return records in store order
//!
//! # Invariants
//!
//! - The indexed path returns exactly what a full scan with all criteria
//!   would return
//! - Empty results are values, never errors

mod executor;
mod filters;
mod range;
mod result;

pub use executor::QueryExecutor;
pub use filters::CriteriaFilter;
pub use range::{scan_date_range, DateRange};
pub use result::SearchResult;
