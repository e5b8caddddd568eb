//! Error types for ride log operations.
//!
//! Errors are descriptive at the core level; the CLI layer decides how each
//! one is presented (badge, exit code, log line).

use std::path::PathBuf;

use thiserror::Error;

use crate::record::RideField;

/// Result type alias for ride log operations.
pub type Result<T> = std::result::Result<T, RidesError>;

/// Core error type for ride log operations.
#[derive(Debug, Error)]
pub enum RidesError {
    /// One or more required fields were empty when saving
    #[error("{} required", join_labels(.missing))]
    Validation { missing: Vec<RideField> },

    /// Reading or writing the ride file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV layer rejected a row
    #[error("CSV error in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The file has a header row, but none of its columns are ride fields
    #[error("{} has no recognizable ride columns in its header", .path.display())]
    UnrecognizedHeader { path: PathBuf },

    /// A field name did not match any ride field
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl RidesError {
    /// Whether this error came from form validation rather than storage.
    pub fn is_validation(&self) -> bool {
        matches!(self, RidesError::Validation { .. })
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RidesError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        RidesError::Csv {
            path: path.into(),
            source,
        }
    }
}

/// "Date, Pickup Location and Drop-off Location are" style list.
fn join_labels(fields: &[RideField]) -> String {
    let labels: Vec<&str> = fields.iter().map(|f| f.label()).collect();
    match labels.as_slice() {
        [] => "No fields are".to_string(),
        [one] => format!("{} is", one),
        [init @ .., last] => format!("{} and {} are", init.join(", "), last),
    }
}
