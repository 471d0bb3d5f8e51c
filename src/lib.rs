//! tallydb - A deterministic, in-memory indexed query engine
//!
//! Sales records are validated once into an immutable store. Grouping views
//! and an inverted index are derived at build time, and every query after
//! that is read-only.

pub mod aggregate;
pub mod cli;
pub mod engine;
pub mod errors;
pub mod executor;
pub mod grouping;
pub mod index;
pub mod observability;
pub mod planner;
pub mod store;

pub use aggregate::PriceStatistics;
pub use engine::{Engine, EngineConfig};
pub use errors::{DataSubject, TallyError, TallyResult};
pub use executor::{DateRange, SearchResult};
pub use grouping::GroupBy;
pub use planner::{Criteria, Criterion, ExplainPlan, ScanType};
pub use store::{Field, RawRecord, Record, RecordId};
