//! Signup flow controller.

use std::sync::Arc;

use pathfinders_domain::{
    FieldLabel, FlowState, Navigation, RegistrationForm, SIGNUP_ERROR_FIELDS,
};
use tracing::{info, warn};

use crate::error::{FlowError, FlowResult};
use crate::ports::{AuthService, AuthServiceError};
use crate::use_cases::FormState;

/// Message shown when a failed signup names none of the known fields.
pub const SIGNUP_FAILED_MESSAGE: &str = "Failed to sign up. Please try again.";

/// Maps a failed registration exchange to its display string, walking
/// `fields` in priority order.
#[must_use]
pub fn signup_failure_message(error: &AuthServiceError, fields: &[FieldLabel]) -> String {
    error
        .body()
        .and_then(|body| body.prioritized_message(fields))
        .unwrap_or_else(|| SIGNUP_FAILED_MESSAGE.to_string())
}

/// Controller for one signup form.
///
/// Registration does not authenticate: success writes no session and
/// signals [`Navigation::Login`].
pub struct Signup<A> {
    auth: Arc<A>,
    error_fields: &'static [FieldLabel],
    form: FormState,
}

impl<A: AuthService> Signup<A> {
    /// Creates a signup controller using the default field priority.
    #[must_use]
    pub fn new(auth: Arc<A>) -> Self {
        Self {
            auth,
            error_fields: SIGNUP_ERROR_FIELDS,
            form: FormState::new(),
        }
    }

    /// Overrides the field priority used to map server errors.
    #[must_use]
    pub const fn with_error_fields(mut self, fields: &'static [FieldLabel]) -> Self {
        self.error_fields = fields;
        self
    }

    /// Current form state.
    pub async fn state(&self) -> FlowState {
        self.form.current().await
    }

    /// Submits the form.
    ///
    /// Local validation runs first and never contacts the server.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Busy`] while another submission is in flight,
    /// [`FlowError::Validation`] when the pre-flight checks fail, and
    /// [`FlowError::Failed`] when the server rejects the registration or
    /// cannot be reached.
    pub async fn submit(&self, form: &RegistrationForm) -> FlowResult<Navigation> {
        self.form.begin(|| form.validate()).await?;
        info!(email = %form.email, "submitting registration");

        let outcome = match self.auth.register(&form.to_request()).await {
            Ok(()) => {
                info!(email = %form.email, "registration succeeded");
                Ok(Navigation::Login)
            }
            Err(error) => {
                warn!(%error, email = %form.email, "registration failed");
                Err(FlowError::failed(signup_failure_message(
                    &error,
                    self.error_fields,
                )))
            }
        };

        self.form.finish(&outcome).await;
        outcome
    }
}
