//! Load session use case.

use pathfinders_domain::Session;

use crate::ports::KeyValueStorage;
use crate::session::SessionStore;

/// Reads the session once when an identity-displaying view opens.
///
/// Views do not subscribe to changes; they call this again the next time
/// they are shown.
pub struct LoadSession<S> {
    sessions: SessionStore<S>,
}

impl<S: KeyValueStorage> LoadSession<S> {
    /// Creates a new `LoadSession` use case.
    #[must_use]
    pub const fn new(sessions: SessionStore<S>) -> Self {
        Self { sessions }
    }

    /// Returns the current session, or `None` when logged out or when the
    /// stored data is unusable.
    pub async fn execute(&self) -> Option<Session> {
        self.sessions.read().await
    }
}
