//! Logout use case.

use pathfinders_domain::Navigation;
use tracing::info;

use crate::ports::{KeyValueStorage, StorageError};
use crate::session::SessionStore;

/// Ends the current session.
pub struct Logout<S> {
    sessions: SessionStore<S>,
}

impl<S: KeyValueStorage> Logout<S> {
    /// Creates a new `Logout` use case.
    #[must_use]
    pub const fn new(sessions: SessionStore<S>) -> Self {
        Self { sessions }
    }

    /// Removes token and profile, then signals the login view.
    ///
    /// Logging out without a session succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub async fn execute(&self) -> Result<Navigation, StorageError> {
        self.sessions.clear().await?;
        info!("logged out");
        Ok(Navigation::Login)
    }
}
