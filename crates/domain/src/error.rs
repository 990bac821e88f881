//! Domain error types

use thiserror::Error;

/// Local validation failures for the login and signup forms.
///
/// The `Display` output is the message shown above the submit button,
/// so it is user-facing text rather than a diagnostic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The terms and conditions checkbox was not ticked.
    #[error("You must agree to the terms and conditions.")]
    TermsNotAccepted,

    /// `password` and `confirm_password` differ.
    #[error("Passwords do not match.")]
    PasswordMismatch,

    /// A required field was left empty.
    #[error("{0} is required.")]
    MissingField(&'static str),
}

/// Result type alias for domain validation.
pub type DomainResult<T> = Result<T, ValidationError>;
