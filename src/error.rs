//! Error types for the trig quiz core engine

use thiserror::Error;

/// Main error type for the trig quiz core engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Invalid mode: {0}")]
    InvalidMode(String),

    #[error("No option selected")]
    NoSelection,

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    /// Lookup outside a fact table's fixed domain. Keys handed out by the
    /// range selector never hit this.
    #[error("Key not found: {function}({key})")]
    KeyNotFound { function: String, key: String },

    #[error("Cannot {action} while session is {phase}")]
    InvalidTransition {
        phase: &'static str,
        action: &'static str,
    },

    #[error("Session not found: {0}")]
    SessionNotFound(u64),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl QuizError {
    /// Errors a renderer recovers from by re-prompting the user
    pub fn is_recoverable(&self) -> bool {
        matches!(self, QuizError::NoSelection | QuizError::UnknownOption(_))
    }
}

#[cfg(feature = "python")]
impl From<QuizError> for pyo3::PyErr {
    fn from(err: QuizError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyKeyError, PyRuntimeError, PyValueError};

        match err {
            QuizError::InvalidRange(_)
            | QuizError::InvalidMode(_)
            | QuizError::NoSelection
            | QuizError::UnknownOption(_)
            | QuizError::InvalidConfig(_) => PyValueError::new_err(err.to_string()),
            QuizError::KeyNotFound { .. } | QuizError::SessionNotFound(_) => {
                PyKeyError::new_err(err.to_string())
            }
            QuizError::InvalidTransition { .. } | QuizError::SerializationError(_) => {
                PyRuntimeError::new_err(err.to_string())
            }
        }
    }
}

/// Result type alias for the trig quiz core engine
pub type Result<T> = std::result::Result<T, QuizError>;
