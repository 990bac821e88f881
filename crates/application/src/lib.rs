//! PathFinders Application - Use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for external dependencies)
//! - The session store and its in-memory storage backend
//! - Use case orchestration for the login, signup and logout flows
//! - Application-level error handling

pub mod error;
pub mod ports;
pub mod session;
pub mod use_cases;

pub use error::{FlowError, FlowResult};
pub use ports::{
    AuthService, AuthServiceError, FileSystem, FileSystemError, KeyValueStorage, StorageError,
};
pub use session::{MemoryStorage, SessionStore, TOKEN_KEY, USER_KEY};
pub use use_cases::{
    FormState, LOGIN_FAILED_MESSAGE, LoadSession, Login, Logout, SIGNUP_FAILED_MESSAGE, Signup,
};
