//! Form input captured from the user before submission.

use crate::auth::{LoginRequest, RegisterRequest};
use crate::error::{DomainResult, ValidationError};
use crate::session::STUDENT_ROLE;

/// Input collected by the login form.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    /// Email address; format is left to the server.
    pub email: String,
    /// Plain-text password.
    pub password: String,
}

impl LoginForm {
    /// Creates a login form.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Checks that both fields are filled in.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] for the first empty field.
    pub fn validate(&self) -> DomainResult<()> {
        require("Email", &self.email)?;
        require("Password", &self.password)
    }

    /// Builds the wire body for `POST /auth/login/`.
    #[must_use]
    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Input collected by the signup form.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Chosen password.
    pub password: String,
    /// Repeated password.
    pub confirm_password: String,
    /// Whether the terms and conditions were accepted.
    pub agree_terms: bool,
}

impl RegistrationForm {
    /// Runs the pre-flight checks, in order: terms accepted, passwords
    /// match, then every text field non-empty.
    ///
    /// A password mismatch is reported even when other fields are empty.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered.
    pub fn validate(&self) -> DomainResult<()> {
        if !self.agree_terms {
            return Err(ValidationError::TermsNotAccepted);
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        require("First Name", &self.first_name)?;
        require("Last Name", &self.last_name)?;
        require("Email", &self.email)?;
        require("Password", &self.password)
    }

    /// Builds the wire body for `POST /auth/register/`.
    ///
    /// The role is always `student`; the signup form offers no choice.
    #[must_use]
    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            password2: self.confirm_password.clone(),
            role: STUDENT_ROLE.to_string(),
        }
    }
}

impl std::fmt::Debug for RegistrationForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationForm")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("agree_terms", &self.agree_terms)
            .finish_non_exhaustive()
    }
}

fn require(label: &'static str, value: &str) -> DomainResult<()> {
    if value.is_empty() {
        Err(ValidationError::MissingField(label))
    } else {
        Ok(())
    }
}
