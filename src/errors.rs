//! Error types for tallydb
//!
//! Error codes:
//! - TALLY_DATA_FORMAT: malformed record or range bound
//! - TALLY_NOT_FOUND: lookup of an unknown record id
//! - TALLY_INVALID_CONFIG: rejected engine configuration
//! - TALLY_DATASET: unreadable or malformed dataset file
//!
//! Empty search results and absent statistics are not errors.

use std::fmt;

use thiserror::Error;

use crate::store::RecordId;

/// What a data format error refers to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSubject {
    /// An input record, named by its id
    Record(RecordId),
    /// Lower bound of a date range query
    RangeStart,
    /// Upper bound of a date range query
    RangeEnd,
}

impl fmt::Display for DataSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSubject::Record(id) => write!(f, "record {}", id),
            DataSubject::RangeStart => write!(f, "range start"),
            DataSubject::RangeEnd => write!(f, "range end"),
        }
    }
}

/// Errors surfaced by the engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TallyError {
    #[error("Data format error in {subject}: {constraint}")]
    DataFormat {
        subject: DataSubject,
        constraint: String,
    },

    #[error("Record not found: {0}")]
    NotFound(RecordId),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Dataset error: {0}")]
    Dataset(String),
}

impl TallyError {
    /// Create a data format error for an input record
    pub fn record_format(id: RecordId, constraint: impl Into<String>) -> Self {
        TallyError::DataFormat {
            subject: DataSubject::Record(id),
            constraint: constraint.into(),
        }
    }

    /// Create a data format error for a range bound
    pub fn bound_format(subject: DataSubject, constraint: impl Into<String>) -> Self {
        TallyError::DataFormat {
            subject,
            constraint: constraint.into(),
        }
    }

    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            TallyError::DataFormat { .. } => "TALLY_DATA_FORMAT",
            TallyError::NotFound(_) => "TALLY_NOT_FOUND",
            TallyError::InvalidConfig(_) => "TALLY_INVALID_CONFIG",
            TallyError::Dataset(_) => "TALLY_DATASET",
        }
    }

    /// Returns the offending record id, if the error names one
    pub fn record_id(&self) -> Option<RecordId> {
        match self {
            TallyError::DataFormat {
                subject: DataSubject::Record(id),
                ..
            } => Some(*id),
            TallyError::NotFound(id) => Some(*id),
            _ => None,
        }
    }

    /// Returns true for malformed input errors
    pub fn is_data_format(&self) -> bool {
        matches!(self, TallyError::DataFormat { .. })
    }
}

/// Result type for engine operations
pub type TallyResult<T> = Result<T, TallyError>;
