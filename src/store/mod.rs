//! Record Store subsystem for tallydb
//!
//! The store is the substrate every derived structure reads from.
//!
//! # Invariants
//!
//! - Records are validated once, at construction
//! - Supplied order is preserved and never changes
//! - Ids are unique; lookups go through the id, never memory identity

mod dataset;
mod record;
mod store;

pub use dataset::{load_dataset, parse_dataset};
pub use record::{parse_date, Field, RawRecord, Record, RecordId, DATE_FORMAT};
pub use store::RecordStore;
