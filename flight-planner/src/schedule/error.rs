//! Schedule loading error types.

use crate::domain::{DomainError, InvalidAirportCode, TimeError};

/// Why a single flight record was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// Text records must have exactly eight fields
    #[error("expected {expected} fields, got {found}")]
    FieldCount { expected: usize, found: usize },

    /// A departure or arrival time is not HH:MM
    #[error("{field}: {source}")]
    Time {
        field: &'static str,
        source: TimeError,
    },

    /// A price is not a non-negative integer
    #[error("{field}: invalid price {value:?}")]
    Price { field: &'static str, value: String },

    /// An airport code is empty or contains whitespace
    #[error("{field}: {source}")]
    Airport {
        field: &'static str,
        source: InvalidAirportCode,
    },

    /// The record parsed but breaks a flight invariant
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Errors from loading a schedule.
///
/// Any error aborts the whole load: no flights are returned from a file that
/// contains a bad record.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be opened or read
    #[error("{path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// A record at a known line was rejected
    #[error("{path}:{line}: {error}")]
    Record {
        path: String,
        line: u64,
        #[source]
        error: RecordError,
    },

    /// The CSV header lacks columns the loader needs
    #[error("{path}: missing required CSV columns: {}", .missing.join(", "))]
    MissingColumns { path: String, missing: Vec<String> },

    /// The CSV reader failed (malformed quoting, ragged rows, ...)
    #[error("{path}: {source}")]
    Csv { path: String, source: csv::Error },
}

impl LoadError {
    /// Line number of the offending record, when known.
    pub fn line(&self) -> Option<u64> {
        match self {
            LoadError::Record { line, .. } => Some(*line),
            LoadError::Csv { source, .. } => source.position().map(|p| p.line()),
            _ => None,
        }
    }
}
