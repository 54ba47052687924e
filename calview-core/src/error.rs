//! Error types for calview.

use std::fmt;

use thiserror::Error;

use crate::event::EventId;

/// Errors that can occur outside of event mutations (config, host I/O).
#[derive(Error, Debug)]
pub enum CalViewError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid view mode '{0}'. Expected day, week, month or year")]
    InvalidViewMode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for calview operations.
pub type CalViewResult<T> = Result<T, CalViewError>;

/// Form field a validation error is reported against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    End,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Field::Title => "title",
            Field::End => "end",
        };
        write!(f, "{}", name)
    }
}

/// Why a create/edit/delete was not applied to the event store.
///
/// Neither variant is fatal: the store is left exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MutationError {
    #[error("Invalid {field}: {reason}")]
    ValidationFailed { field: Field, reason: String },

    #[error("Event not found: {0}")]
    NotFound(EventId),
}

impl MutationError {
    pub fn validation(field: Field, reason: impl Into<String>) -> Self {
        MutationError::ValidationFailed {
            field,
            reason: reason.into(),
        }
    }
}
