//! Session types persisted on the client between runs.
//!
//! A [`Session`] pairs the bearer token returned by the Auth Service with a
//! denormalized copy of the user's profile. The profile is never refreshed
//! from the server after login; the only way to change it is to log in
//! again, which overwrites the whole session.

use serde::{Deserialize, Serialize};

/// Role assigned to every account created through the signup flow.
pub const STUDENT_ROLE: &str = "student";

/// Snapshot of the authenticated user's profile.
///
/// Serialized as the `user` storage entry. Field names match the backend
/// so the stored JSON stays readable by other clients of the same API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Login email address.
    pub email: String,
    /// Username; empty when the backend did not return one.
    #[serde(default)]
    pub username: String,
    /// Account role, e.g. `student` or `admin`.
    pub role: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

impl Profile {
    /// Returns `"<first_name> <last_name>"`, as shown in view headers.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns the username, or `None` when the backend left it empty.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        if self.username.is_empty() {
            None
        } else {
            Some(&self.username)
        }
    }
}

/// The authenticated identity: bearer token plus profile.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    /// Opaque bearer credential.
    pub token: String,
    /// Denormalized user profile.
    pub profile: Profile,
}

impl Session {
    /// Creates a new session.
    #[must_use]
    pub fn new(token: impl Into<String>, profile: Profile) -> Self {
        Self {
            token: token.into(),
            profile,
        }
    }
}

// The token is a credential; keep it out of logs and panic messages.
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("profile", &self.profile)
            .finish()
    }
}
