//! Auth Service port

use std::future::Future;

use pathfinders_domain::{ErrorBody, LoginRequest, LoginResponse, RegisterRequest};

/// Errors returned by an [`AuthService`] adapter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthServiceError {
    /// The server answered with a non-success status.
    #[error("request rejected with status {status}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Parsed error body; empty if the body was not a JSON object.
        body: ErrorBody,
    },

    /// The transport layer gave up waiting.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout {
        /// Timeout that elapsed.
        timeout_ms: u64,
    },

    /// The server could not be reached.
    #[error("transport error: {0}")]
    Transport(String),

    /// A success status arrived with a body of the wrong shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl AuthServiceError {
    /// The structured error body, when the server sent one.
    #[must_use]
    pub const fn body(&self) -> Option<&ErrorBody> {
        match self {
            Self::Rejected { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Port for the external Auth Service.
///
/// One call per form submission; adapters perform no retries.
pub trait AuthService: Send + Sync {
    /// Exchanges credentials for an access token and profile fields.
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError::Rejected`] for non-2xx responses and
    /// a transport variant when no usable response arrived.
    fn login(
        &self,
        request: &LoginRequest,
    ) -> impl Future<Output = Result<LoginResponse, AuthServiceError>> + Send;

    /// Registers a new account. Does not authenticate.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`AuthService::login`].
    fn register(
        &self,
        request: &RegisterRequest,
    ) -> impl Future<Output = Result<(), AuthServiceError>> + Send;
}
