//! PathFinders Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus configuration loading.

pub mod adapters;
pub mod config;
pub mod persistence;
pub mod serialization;

pub use adapters::ReqwestAuthService;
pub use config::{ClientConfig, ConfigError, ConfigOverrides};
pub use persistence::{FileStorage, TokioFileSystem};
pub use serialization::{
    SerializationError, from_json_bytes, to_json_stable, to_json_stable_bytes,
};
