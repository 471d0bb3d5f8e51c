//! ObservationScope for paired begin/complete logging
//!
//! - `{event}` logged on creation
//! - completion or failure logged explicitly
//! - a scope dropped without either logs `{name}_INCOMPLETE`

use std::cell::Cell;
use std::time::Instant;

use super::events::Event;
use super::logger::{Logger, Severity};

/// A scope bracketing one operation with begin/complete/failed events
pub struct ObservationScope<'a> {
    logger: &'a Logger,
    name: &'static str,
    complete_event: Event,
    failed_event: Event,
    completed: Cell<bool>,
    start: Instant,
}

impl<'a> ObservationScope<'a> {
    /// Logs `begin` immediately
    pub fn new(
        logger: &'a Logger,
        name: &'static str,
        begin: Event,
        complete_event: Event,
        failed_event: Event,
    ) -> Self {
        logger.log(begin.severity(), begin.as_str(), &[]);
        Self {
            logger,
            name,
            complete_event,
            failed_event,
            completed: Cell::new(false),
            start: Instant::now(),
        }
    }

    /// Logs the completion event with elapsed time and extra fields
    pub fn complete_with_fields(self, fields: &[(&str, &str)]) {
        self.completed.set(true);
        let elapsed = self.elapsed_us();
        let mut all: Vec<(&str, &str)> = vec![("elapsed_us", elapsed.as_str())];
        all.extend(fields.iter().copied());
        self.logger
            .log(self.complete_event.severity(), self.complete_event.as_str(), &all);
    }

    /// Logs the failure event with a reason
    pub fn fail(self, reason: &str) {
        self.completed.set(true);
        self.logger.log(
            self.failed_event.severity(),
            self.failed_event.as_str(),
            &[("reason", reason)],
        );
    }

    pub fn is_completed(&self) -> bool {
        self.completed.get()
    }

    fn elapsed_us(&self) -> String {
        self.start.elapsed().as_micros().to_string()
    }
}

impl Drop for ObservationScope<'_> {
    fn drop(&mut self) {
        if !self.completed.get() {
            let event = format!("{}_INCOMPLETE", self.name);
            self.logger.log(
                Severity::Warn,
                &event,
                &[("reason", "scope dropped without completion")],
            );
        }
    }
}
