//! Inverted Index subsystem for tallydb
//!
//! Indexes are derived, in-memory state built once from the record store.
//!
//! # Design Principles
//!
//! - Derived state: the store is the source of truth
//! - Built wholesale: no incremental maintenance
//! - Deterministic: BTreeMap iteration order, buckets in store order
//!
//! # Invariants
//!
//! - For every indexed field, each record id appears in exactly one bucket
//! - Lookup of an absent value is an empty bucket, never an error

mod inverted;

pub use inverted::{AttributeIndex, InvertedIndex};
