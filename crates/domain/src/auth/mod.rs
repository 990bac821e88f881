//! Authentication domain types

mod error_body;
mod types;

pub use error_body::{ErrorBody, FieldLabel, SIGNUP_ERROR_FIELDS};
pub use types::{LoginRequest, LoginResponse, RegisterRequest};
