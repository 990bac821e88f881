//! PathFinders Domain - Core business types
//!
//! This crate defines the domain model for the PathFinders client:
//! sessions, form input and its validation, Auth Service bodies, and the
//! form submission state machine.
//! All types here are pure Rust with no I/O dependencies.

pub mod auth;
pub mod error;
pub mod form;
pub mod session;
pub mod state;

pub use auth::{
    ErrorBody, FieldLabel, LoginRequest, LoginResponse, RegisterRequest, SIGNUP_ERROR_FIELDS,
};
pub use error::{DomainResult, ValidationError};
pub use form::{LoginForm, RegistrationForm};
pub use session::{Profile, STUDENT_ROLE, Session};
pub use state::{FlowState, Navigation};
