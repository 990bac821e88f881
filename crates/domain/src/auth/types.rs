//! Request and response bodies exchanged with the Auth Service.

use serde::{Deserialize, Serialize};

use crate::session::{Profile, Session};

/// Body of `POST /auth/login/`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    /// Email address used as the login identifier.
    pub email: String,
    /// Plain-text password.
    pub password: String,
}

/// Body of `POST /auth/register/`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Chosen password.
    pub password: String,
    /// Confirmation of `password`; the server re-checks equality.
    pub password2: String,
    /// Account role.
    pub role: String,
}

/// Successful response of `POST /auth/login/`.
///
/// The backend issues a JWT pair; only `access` is kept as the session
/// token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Access token.
    pub access: String,
    /// Refresh token, if the backend sent one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh: Option<String>,
    /// Username, if the account has one.
    #[serde(default)]
    pub username: String,
    /// Account role.
    pub role: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

impl LoginResponse {
    /// Builds the session to persist after a successful login.
    ///
    /// The profile email is the one the user typed, not one echoed by the
    /// server.
    #[must_use]
    pub fn into_session(self, email: &str) -> Session {
        Session::new(
            self.access,
            Profile {
                email: email.to_string(),
                username: self.username,
                role: self.role,
                first_name: self.first_name,
                last_name: self.last_name,
            },
        )
    }
}

// Bodies carry passwords and tokens; Debug shows only identifiers.
impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("email", &self.email)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}
