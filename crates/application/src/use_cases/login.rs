//! Login flow controller.

use std::sync::Arc;

use pathfinders_domain::{FlowState, LoginForm, Navigation};
use tracing::{info, warn};

use crate::error::{FlowError, FlowResult};
use crate::ports::{AuthService, AuthServiceError, KeyValueStorage};
use crate::session::SessionStore;
use crate::use_cases::FormState;

/// Message shown when a failed login carries no `detail`.
pub const LOGIN_FAILED_MESSAGE: &str = "Failed to login. Please check your credentials.";

/// Maps a failed login exchange to its display string.
///
/// A non-empty `detail` from the server is shown verbatim; anything else
/// gets the generic message.
#[must_use]
pub fn login_failure_message(error: &AuthServiceError) -> String {
    error
        .body()
        .and_then(|body| body.detail())
        .filter(|detail| !detail.is_empty())
        .unwrap_or(LOGIN_FAILED_MESSAGE)
        .to_string()
}

/// Controller for one login form.
///
/// On success the session is written and [`Navigation::Dashboard`] is
/// signalled. On failure nothing is written and the message is kept in the
/// form state until the next submission.
pub struct Login<A, S> {
    auth: Arc<A>,
    sessions: SessionStore<S>,
    form: FormState,
}

impl<A: AuthService, S: KeyValueStorage> Login<A, S> {
    /// Creates a login controller.
    #[must_use]
    pub fn new(auth: Arc<A>, sessions: SessionStore<S>) -> Self {
        Self {
            auth,
            sessions,
            form: FormState::new(),
        }
    }

    /// Current form state.
    pub async fn state(&self) -> FlowState {
        self.form.current().await
    }

    /// Submits the form.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Busy`] while another submission is in flight,
    /// [`FlowError::Validation`] for empty fields, [`FlowError::Failed`] when
    /// the server rejects the credentials or cannot be reached, and
    /// [`FlowError::Storage`] if the session cannot be saved.
    pub async fn submit(&self, form: &LoginForm) -> FlowResult<Navigation> {
        self.form.begin(|| form.validate()).await?;
        info!(email = %form.email, "submitting login");

        let outcome = self.exchange(form).await;
        self.form.finish(&outcome).await;
        outcome
    }

    async fn exchange(&self, form: &LoginForm) -> FlowResult<Navigation> {
        let response = match self.auth.login(&form.to_request()).await {
            Ok(response) => response,
            Err(error) => {
                warn!(%error, email = %form.email, "login failed");
                return Err(FlowError::failed(login_failure_message(&error)));
            }
        };

        let session = response.into_session(&form.email);
        self.sessions.write(&session).await?;
        info!(email = %form.email, role = %session.profile.role, "login succeeded");
        Ok(Navigation::Dashboard)
    }
}
