//! Form submission state types.
//!
//! Each auth form runs the same small state machine:
//! `Idle -> Submitting -> {Succeeded, Failed}`. A failed form accepts a new
//! submission just like an idle one; a submitting form rejects it.

use serde::{Deserialize, Serialize};

/// Where the client should go after a flow completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Navigation {
    /// The student dashboard, after login.
    Dashboard,
    /// The login form, after signup or logout.
    Login,
}

/// Current state of an auth form.
///
/// - `Idle`: inputs enabled, no message
/// - `Submitting`: request in flight, inputs and submit disabled
/// - `Succeeded`: flow finished, navigation pending
/// - `Failed`: inputs enabled, message shown above the submit button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FlowState {
    /// Nothing submitted yet.
    #[default]
    Idle,

    /// A request is outstanding.
    Submitting,

    /// The last submission succeeded.
    Succeeded {
        /// Navigation signalled by the flow.
        navigation: Navigation,
    },

    /// The last submission failed.
    Failed {
        /// User-facing error message.
        message: String,
    },
}

impl FlowState {
    /// Creates a Failed state.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }

    /// Returns true while a request is outstanding.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Returns true if inputs and the submit control should be enabled.
    #[must_use]
    pub const fn accepts_input(&self) -> bool {
        !self.is_submitting()
    }

    /// The error message to display, if the last submission failed.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// The pending navigation, if the last submission succeeded.
    #[must_use]
    pub const fn navigation(&self) -> Option<Navigation> {
        match self {
            Self::Succeeded { navigation } => Some(*navigation),
            _ => None,
        }
    }
}
