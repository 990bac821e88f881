//! Persistence implementations for file-based storage.

mod file_storage;
mod file_system;

pub use file_storage::*;
pub use file_system::*;
