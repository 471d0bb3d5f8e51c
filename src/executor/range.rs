//! Date range queries
//!
//! Dates carry no index. A range query is always a linear scan, inclusive
//! on both ends.

use chrono::NaiveDate;

use crate::errors::{DataSubject, TallyError, TallyResult};
use crate::store::{parse_date, Record, RecordStore};

/// Inclusive calendar date interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Parse `YYYY-MM-DD` bounds. A bound that fails to parse is a data
    /// format error naming that bound.
    pub fn parse(start: &str, end: &str) -> TallyResult<Self> {
        let start_date = parse_date(start).ok_or_else(|| {
            TallyError::bound_format(
                DataSubject::RangeStart,
                format!("'{}' does not match YYYY-MM-DD", start),
            )
        })?;
        let end_date = parse_date(end).ok_or_else(|| {
            TallyError::bound_format(
                DataSubject::RangeEnd,
                format!("'{}' does not match YYYY-MM-DD", end),
            )
        })?;
        Ok(Self::new(start_date, end_date))
    }

    /// An inverted interval contains nothing
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Records whose date lies in the range, in store order
pub fn scan_date_range<'a>(store: &'a RecordStore, range: &DateRange) -> Vec<&'a Record> {
    if range.is_empty() {
        return Vec::new();
    }
    store.iter().filter(|r| range.contains(r.date)).collect()
}
