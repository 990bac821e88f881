//! Session store over a key/value storage area.
//!
//! The session lives under two keys: `token` holds the bearer credential and
//! `user` holds the JSON-encoded profile. Both are written in one batch and
//! removed in one batch, so a reader sees either a full session or none.

use std::sync::Arc;

use pathfinders_domain::{Profile, Session};
use tracing::{debug, warn};

use crate::ports::{KeyValueStorage, StorageError};

/// Storage key of the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Storage key of the JSON-encoded profile.
pub const USER_KEY: &str = "user";

/// Reads, writes and clears the current session.
#[derive(Debug)]
pub struct SessionStore<S> {
    storage: Arc<S>,
}

impl<S> Clone for SessionStore<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
        }
    }
}

impl<S: KeyValueStorage> SessionStore<S> {
    /// Creates a store over `storage`.
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self::from_shared(Arc::new(storage))
    }

    /// Creates a store over storage that is also used elsewhere.
    #[must_use]
    pub const fn from_shared(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// The underlying storage area.
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Persists `session`, replacing any previous one. No merge.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile cannot be encoded or the storage
    /// backend fails; in that case nothing was written.
    pub async fn write(&self, session: &Session) -> Result<(), StorageError> {
        let user = serde_json::to_string(&session.profile)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        self.storage
            .set_items(&[(TOKEN_KEY, session.token.clone()), (USER_KEY, user)])
            .await?;

        debug!(email = %session.profile.email, "session written");
        Ok(())
    }

    /// Returns the stored session, or `None`.
    ///
    /// Storage failures, a half-written session and an unparsable profile
    /// all degrade to `None`; they are logged, never returned.
    pub async fn read(&self) -> Option<Session> {
        let values = match self.storage.get_items(&[TOKEN_KEY, USER_KEY]).await {
            Ok(values) => values,
            Err(error) => {
                warn!(%error, "session storage unreadable, treating as logged out");
                return None;
            }
        };

        let mut values = values.into_iter();
        let token = values.next().flatten();
        let user = values.next().flatten();

        match (token, user) {
            (Some(token), Some(user)) => match serde_json::from_str::<Profile>(&user) {
                Ok(profile) => Some(Session::new(token, profile)),
                Err(error) => {
                    warn!(%error, "stored profile is malformed, treating as logged out");
                    None
                }
            },
            (None, None) => None,
            (token, _) => {
                warn!(
                    has_token = token.is_some(),
                    "incomplete session in storage, treating as logged out"
                );
                None
            }
        }
    }

    /// Removes the token and the profile together.
    ///
    /// Clearing an empty store succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub async fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove_items(&[TOKEN_KEY, USER_KEY]).await?;
        debug!("session cleared");
        Ok(())
    }
}
