//! Engine subsystem for tallydb
//!
//! The single entry point: construct once from raw records, then query.
//!
//! # Lifecycle
//!
//! 1. Validate configuration
//! 2. Validate records into the store
//! 3. Derive grouping views and the inverted index
//! 4. Serve read-only queries and aggregations

mod config;
mod engine;

pub use config::EngineConfig;
pub use engine::Engine;
