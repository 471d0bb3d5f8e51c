//! Aggregation subsystem for tallydb
//!
//! Frequency counts over the store, price sums per grouping view, and
//! descriptive statistics over a single group.

mod frequency;
mod stats;

pub use frequency::{most_frequent, sum_by};
pub use stats::PriceStatistics;
