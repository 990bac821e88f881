//! Session persistence.
//!
//! This module provides:
//! - The [`SessionStore`] that reads, writes and clears the session
//!   through any [`KeyValueStorage`](crate::ports::KeyValueStorage)
//! - An in-memory storage backend for tests and ephemeral use

mod memory;
mod store;

pub use memory::MemoryStorage;
pub use store::{SessionStore, TOKEN_KEY, USER_KEY};
