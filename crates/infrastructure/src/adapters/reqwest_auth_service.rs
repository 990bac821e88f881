//! Auth Service client implementation using reqwest.
//!
//! This adapter implements the `AuthService` port against the backend's
//! `/auth/login/` and `/auth/register/` endpoints. One request per call, no
//! retries; the only timeout is the one configured on the client.

use std::time::Duration;

use pathfinders_application::ports::{AuthService, AuthServiceError};
use pathfinders_domain::{ErrorBody, LoginRequest, LoginResponse, RegisterRequest};
use reqwest::{Client, Url};
use serde::Serialize;
use tracing::debug;

/// Login endpoint, relative to the API base URL.
pub const LOGIN_PATH: &str = "auth/login/";

/// Registration endpoint, relative to the API base URL.
pub const REGISTER_PATH: &str = "auth/register/";

/// Auth Service client using reqwest.
///
/// Wraps a `reqwest::Client` and an API base URL. The base URL must end
/// with `/` so that endpoint paths are joined beneath it.
#[derive(Debug, Clone)]
pub struct ReqwestAuthService {
    client: Client,
    base_url: Url,
    timeout: Duration,
}

impl ReqwestAuthService {
    /// Creates a client for the API at `base_url`.
    ///
    /// Default configuration:
    /// - Request timeout: `timeout`
    /// - Follow redirects: up to 10
    /// - User-Agent: "PathFinders/<version>"
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, AuthServiceError> {
        let client = Client::builder()
            .user_agent(concat!("PathFinders/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::limited(10))
            .timeout(timeout)
            .build()
            .map_err(|e| AuthServiceError::Transport(e.to_string()))?;

        Ok(Self::with_client(client, base_url, timeout))
    }

    /// Creates a client around an existing reqwest client.
    ///
    /// `timeout` is only used to label timeout errors; it is not applied to
    /// `client`.
    #[must_use]
    pub const fn with_client(client: Client, base_url: Url, timeout: Duration) -> Self {
        Self {
            client,
            base_url,
            timeout,
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, AuthServiceError> {
        self.base_url
            .join(path)
            .map_err(|e| AuthServiceError::Transport(format!("invalid endpoint {path}: {e}")))
    }

    /// POSTs `body` as JSON and returns the raw success body.
    async fn post<B>(&self, path: &str, body: &B) -> Result<Vec<u8>, AuthServiceError>
    where
        B: Serialize + Sync + ?Sized,
    {
        let url = self.endpoint(path)?;
        debug!(%url, "sending auth request");

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| self.map_error(e))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.map_error(e))?
            .to_vec();

        debug!(status = status.as_u16(), len = bytes.len(), "auth response received");

        if status.is_success() {
            Ok(bytes)
        } else {
            Err(AuthServiceError::Rejected {
                status: status.as_u16(),
                body: ErrorBody::from_slice(&bytes),
            })
        }
    }

    /// Maps reqwest errors to `AuthServiceError`.
    fn map_error(&self, error: reqwest::Error) -> AuthServiceError {
        if error.is_timeout() {
            return AuthServiceError::Timeout {
                timeout_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
            };
        }

        if error.is_decode() {
            return AuthServiceError::MalformedResponse(error.to_string());
        }

        AuthServiceError::Transport(error.to_string())
    }
}

impl AuthService for ReqwestAuthService {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AuthServiceError> {
        let bytes = self.post(LOGIN_PATH, request).await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| AuthServiceError::MalformedResponse(format!("login response: {e}")))
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), AuthServiceError> {
        self.post(REGISTER_PATH, request).await.map(|_| ())
    }
}
