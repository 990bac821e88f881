//! Application error types

use pathfinders_domain::ValidationError;
use thiserror::Error;

use crate::ports::StorageError;

/// Why a form submission did not succeed.
///
/// The `Display` output of every variant is the single string shown above
/// the submit button.
#[derive(Debug, Error)]
pub enum FlowError {
    /// Local validation failed; no request was sent.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// A submission on this form is already in flight.
    #[error("A submission is already in progress.")]
    Busy,

    /// The Auth Service rejected the request or could not be reached.
    #[error("{message}")]
    Failed {
        /// User-facing message derived from the response.
        message: String,
    },

    /// The session could not be persisted after a successful exchange.
    #[error("Could not save your session: {0}")]
    Storage(#[from] StorageError),
}

impl FlowError {
    /// Creates a Failed error.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }

    /// The message to display.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Result type alias for flow operations.
pub type FlowResult<T> = Result<T, FlowError>;
