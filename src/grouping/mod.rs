//! Grouping Views for tallydb
//!
//! Precomputed partitions of the store by product, category, vendor and
//! month. Built once with the store, never updated.

mod view;

pub use view::{month_key, GroupBy, GroupingView, GroupingViews};
