//! Submission state shared by the form controllers.

use std::sync::Arc;

use pathfinders_domain::{DomainResult, FlowState, Navigation};
use tokio::sync::RwLock;

use crate::error::{FlowError, FlowResult};

/// The state of one form instance.
///
/// Entering `Submitting` is a check-and-set under the write lock, so at
/// most one request per form is ever outstanding. Clones share the state.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    state: Arc<RwLock<FlowState>>,
}

impl FormState {
    /// Creates an idle form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current state.
    pub async fn current(&self) -> FlowState {
        self.state.read().await.clone()
    }

    /// Moves to `Submitting` if the form accepts input and `validate`
    /// passes.
    ///
    /// A validation failure is recorded as `Failed` without ever entering
    /// `Submitting`.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Busy`] if a submission is in flight, or
    /// [`FlowError::Validation`] if `validate` fails.
    pub async fn begin(&self, validate: impl FnOnce() -> DomainResult<()>) -> FlowResult<()> {
        let mut state = self.state.write().await;
        if state.is_submitting() {
            return Err(FlowError::Busy);
        }
        if let Err(error) = validate() {
            *state = FlowState::failed(error.to_string());
            return Err(error.into());
        }
        *state = FlowState::Submitting;
        Ok(())
    }

    /// Records the outcome of a submission started with [`FormState::begin`].
    pub async fn finish(&self, outcome: &FlowResult<Navigation>) {
        let next = match outcome {
            Ok(navigation) => FlowState::Succeeded {
                navigation: *navigation,
            },
            Err(error) => FlowState::failed(error.message()),
        };
        *self.state.write().await = next;
    }
}
