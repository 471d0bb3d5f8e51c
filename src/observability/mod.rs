//! Observability subsystem for tallydb
//!
//! - Structured logging (JSON lines on stderr)
//! - Typed lifecycle and query events
//! - Atomic counters
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on query results
//! 3. No background threads
//! 4. Deterministic output format
//!
//! # Usage
//!
//! ```ignore
//! use tallydb::observability::{Event, Logger, Severity};
//!
//! let logger = Logger::new(Severity::Info);
//! tallydb::observability::log_event_with_fields(&logger, Event::DatasetLoaded, &[("records", "10")]);
//! ```

mod events;
mod logger;
mod metrics;
mod scope;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
pub use scope::ObservationScope;

/// Log an event with fields at its default severity
pub fn log_event_with_fields(logger: &Logger, event: Event, fields: &[(&str, &str)]) {
    logger.log(event.severity(), event.as_str(), fields);
}
